//! Line-oriented text builder with an indentation level.

/// Builds multi-line text where every appended line is prefixed with the
/// current indentation.
///
/// Multi-line input is split and each line is indented individually, so a
/// pre-formatted block (such as a synthesized literal) can be nested at any
/// level. Empty lines are never indented.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::indented::IndentedWriter;
///
/// let mut w = IndentedWriter::new();
/// w.line("function f() {")
///     .indent()
///     .line("const x = {\n  a: 1\n};")
///     .outdent()
///     .line("}");
///
/// assert_eq!(w.finish(), "function f() {\n  const x = {\n    a: 1\n  };\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct IndentedWriter {
    buf: String,
    level: usize,
    unit: &'static str,
}

impl Default for IndentedWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentedWriter {
    /// Creates a writer indenting by two spaces per level.
    pub fn new() -> Self {
        Self::with_unit("  ")
    }

    pub fn with_unit(unit: &'static str) -> Self {
        Self {
            buf: String::new(),
            level: 0,
            unit,
        }
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decreases the level; saturates at zero.
    pub fn outdent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Appends `text` followed by a newline, indenting each line of `text`.
    pub fn line(&mut self, text: &str) -> &mut Self {
        for line in text.split('\n') {
            if !line.is_empty() {
                for _ in 0..self.level {
                    self.buf.push_str(self.unit);
                }
                self.buf.push_str(line);
            }
            self.buf.push('\n');
        }
        self
    }

    /// Appends an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Appends already-formatted text verbatim.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Indentation for a literal nested `depth` levels deep.
pub fn indent_for(depth: usize) -> String {
    "  ".repeat(depth)
}
