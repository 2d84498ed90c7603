//! Output assembly and file writing for generated samples.
//!
//! This module handles the final phase of generation: validating the model,
//! assembling one standalone program per operation, and writing each
//! program to disk atomically.
//!
//! ## Output Structure
//!
//! ```text
//! samples/
//! ├── client/              # top-level operations
//! │   └── putWidget.ts
//! ├── widgets/             # one directory per operation group
//! │   └── getWidget.ts
//! └── fragments.ts         # inline documentation fragments (optional)
//! ```
//!
//! Every example of an operation becomes one block of that operation's
//! program. Operations whose examples were all suppressed produce no file.
//!
//! ## Safety Guarantees
//!
//! - **Validation**: structural model problems abort before anything is written
//! - **Atomic writes**: uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::{Path, PathBuf};

use exemplar_define::{CodeModel, Operation, OperationGroup};

use crate::codegen::{ProgramBuilder, SampleAssembler};
use crate::config::GeneratorSettings;
use crate::diagnostics::DiagnosticSink;
use crate::errors::GeneratorError;
use crate::validation::validate_model;

/// Directory holding samples of top-level operations.
pub const TOP_LEVEL_DIR: &str = "client";

/// File name for the concatenated inline fragments.
pub const FRAGMENTS_FILE: &str = "fragments.ts";

/// One rendered sample program, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFile {
    /// Path relative to the output directory.
    pub relative_path: PathBuf,
    pub content: String,
    /// Number of examples that made it into the program.
    pub samples: usize,
}

/// Counts reported after a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Files written (or printed, on a dry run), relative to the output directory.
    pub files: Vec<PathBuf>,
    /// Examples that produced a sample.
    pub samples: usize,
    /// Examples suppressed because a required parameter was missing.
    pub suppressed: usize,
}

/// Returns the sample path of `operation` relative to the output directory.
///
/// ## Examples
///
/// ```
/// use std::path::PathBuf;
/// use exemplar_define::{Operation, OperationGroup};
/// use exemplar_gen::output::sample_path;
///
/// let op = Operation::new("putWidget", vec![]);
/// assert_eq!(
///     sample_path(&OperationGroup::top_level(vec![]), &op),
///     PathBuf::from("client/putWidget.ts")
/// );
/// assert_eq!(
///     sample_path(&OperationGroup::new("widgets", vec![]), &op),
///     PathBuf::from("widgets/putWidget.ts")
/// );
/// ```
pub fn sample_path(group: &OperationGroup, operation: &Operation) -> PathBuf {
    let dir = if group.is_top_level() {
        TOP_LEVEL_DIR
    } else {
        group.name.as_str()
    };
    Path::new(dir).join(format!("{}.ts", operation.name))
}

/// Renders one program per operation that has at least one usable example.
///
/// Returns the rendered files plus the number of suppressed examples.
///
/// ## Errors
///
/// Returns an error if [`validate_model`] rejects the model or the
/// settings are invalid.
pub fn render_samples(
    model: &CodeModel,
    settings: &GeneratorSettings,
    sink: &dyn DiagnosticSink,
) -> Result<(Vec<SampleFile>, usize), GeneratorError> {
    settings.validate()?;
    validate_model(model)?;

    let assembler = SampleAssembler::new(model, settings, sink);
    let mut files = Vec::new();
    let mut suppressed = 0;

    for (group, operation) in model.operations() {
        let mut program = ProgramBuilder::new(&assembler);
        for example in &operation.examples {
            if !program.push(operation, group, example) {
                suppressed += 1;
            }
        }

        let samples = program.len();
        match program.finish() {
            Some(content) => files.push(SampleFile {
                relative_path: sample_path(group, operation),
                content,
                samples,
            }),
            None => tracing::debug!(operation = %operation.name, "No samples for operation"),
        }
    }

    Ok((files, suppressed))
}

/// Renders the inline documentation fragment of every usable example.
///
/// Returns `None` when no example produced a fragment.
///
/// ## Errors
///
/// Returns an error if [`validate_model`] rejects the model.
pub fn render_fragments(
    model: &CodeModel,
    settings: &GeneratorSettings,
    sink: &dyn DiagnosticSink,
) -> Result<Option<String>, GeneratorError> {
    validate_model(model)?;

    let assembler = SampleAssembler::new(model, settings, sink);
    let fragments: Vec<String> = model
        .operations()
        .filter_map(|(group, operation)| assembler.operation_fragments(operation, group))
        .collect();

    Ok((!fragments.is_empty()).then(|| fragments.join("\n")))
}

/// Writes content to a file atomically using temp file + rename.
///
/// This prevents partial writes if the process is interrupted.
/// Creates parent directories if they don't exist.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if directory creation, writing, or
/// renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates every sample of `model` and writes it below `output_dir`.
///
/// ## Arguments
///
/// * `model` - The code model to generate samples for
/// * `settings` - Package and client naming
/// * `sink` - Receives data-shape diagnostics
/// * `output_dir` - Directory to write sample files to
/// * `dry_run` - If true, print samples instead of writing files
///
/// ## Errors
///
/// Returns an error if validation fails or a file cannot be written. Nothing
/// is written when validation fails.
pub fn generate_samples(
    model: &CodeModel,
    settings: &GeneratorSettings,
    sink: &dyn DiagnosticSink,
    output_dir: &Path,
    dry_run: bool,
) -> Result<GenerationSummary, GeneratorError> {
    let (files, suppressed) = render_samples(model, settings, sink)?;
    let mut summary = GenerationSummary {
        suppressed,
        ..GenerationSummary::default()
    };

    for file in files {
        if dry_run {
            println!("=== {} ===\n{}\n", file.relative_path.display(), file.content);
        } else {
            let path = output_dir.join(&file.relative_path);
            write_atomic(&path, &file.content)?;
            tracing::info!(path = %path.display(), samples = file.samples, "Wrote sample file");
        }
        summary.samples += file.samples;
        summary.files.push(file.relative_path);
    }

    Ok(summary)
}

/// Writes the inline fragments of `model` to [`FRAGMENTS_FILE`] below `output_dir`.
///
/// Returns the relative path written, or `None` if there were no fragments.
///
/// ## Errors
///
/// Returns an error if validation fails or the file cannot be written.
pub fn generate_fragments(
    model: &CodeModel,
    settings: &GeneratorSettings,
    sink: &dyn DiagnosticSink,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Option<PathBuf>, GeneratorError> {
    let Some(content) = render_fragments(model, settings, sink)? else {
        return Ok(None);
    };

    if dry_run {
        println!("=== {} ===\n{}\n", FRAGMENTS_FILE, content);
    } else {
        let path = output_dir.join(FRAGMENTS_FILE);
        write_atomic(&path, &content)?;
        tracing::info!(path = %path.display(), "Wrote inline fragments");
    }

    Ok(Some(PathBuf::from(FRAGMENTS_FILE)))
}
