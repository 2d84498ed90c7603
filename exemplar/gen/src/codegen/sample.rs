//! Sample assembly.
//!
//! A sample declares one variable per resolved parameter, calls the
//! operation on the client, and logs the result:
//!
//! ```text
//! const widgetBody: WidgetModels.Widget = {
//!   name: "acme"
//! };
//!
//! const widget = await client.widgets.putWidget(widgetBody);
//! console.log(widget);
//! ```
//!
//! [`SampleMode`] decides what surrounds those statements. Samples whose
//! example lacks a required parameter are suppressed entirely: every
//! assembly function returns `None` for them and records a
//! `MissingRequiredParameter` diagnostic.

use exemplar_define::{CodeModel, Example, ModelType, Operation, OperationGroup};
use serde_json::Value;

use crate::codegen::literal::{LiteralSynthesizer, SynthesisOptions};
use crate::codegen::resolve::{ResolvedArgument, resolve_arguments};
use crate::config::GeneratorSettings;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::indented::IndentedWriter;
use crate::naming::{to_camel_case, to_pascal_case};

/// Identifier of the client instance every sample calls through.
pub const CLIENT_INSTANCE: &str = "client";

/// Identifiers the bootstrap prelude declares; sample variables never reuse them.
pub const RESERVED_IDENTIFIERS: [&str; 3] = [CLIENT_INSTANCE, "credentials", "subscriptionId"];

/// Composite type annotated with the runtime namespace instead of the models namespace.
const REQUEST_OPTIONS_CLASS: &str = "RequestOptionsBase";
const RUNTIME_NAMESPACE: &str = "msRest";

/// What surrounds the core sample statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// A documentation comment holding the statements, followed by a
    /// `var` declaration reserving the sample's name.
    Inline,
    /// A complete program: bootstrap prelude, the sample block, and the
    /// end of the entry function.
    Standalone,
    /// One block of a batched program. `prelude` emits the bootstrap
    /// before the block, `last` closes the entry function after it.
    Block { prelude: bool, last: bool },
}

/// Assembles samples for the operations of one code model.
pub struct SampleAssembler<'a> {
    settings: &'a GeneratorSettings,
    sink: &'a dyn DiagnosticSink,
    synth: LiteralSynthesizer<'a>,
    client_name: String,
}

impl<'a> SampleAssembler<'a> {
    pub fn new(
        model: &'a CodeModel,
        settings: &'a GeneratorSettings,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        let prefix = settings
            .client_prefix
            .as_deref()
            .unwrap_or_else(|| model.client_prefix());
        let synth = LiteralSynthesizer::new(model, sink)
            .with_models_namespace(format!("{prefix}Models"))
            .with_options(SynthesisOptions {
                inline_sub_resource_ids: settings.inline_sub_resource_ids,
            });

        Self {
            settings,
            sink,
            synth,
            client_name: settings
                .client_name
                .clone()
                .unwrap_or_else(|| model.name.clone()),
        }
    }

    /// Assembles one sample in the given mode.
    ///
    /// ## Returns
    ///
    /// `None` if a required parameter of `operation` is missing from `example`.
    pub fn assemble(
        &self,
        mode: SampleMode,
        operation: &Operation,
        group: &OperationGroup,
        example: &Example,
    ) -> Option<String> {
        let core = self.core_statements(operation, group, example)?;
        tracing::debug!(
            operation = %operation.name,
            example = %example.name,
            ?mode,
            "Assembled sample"
        );

        Some(match mode {
            SampleMode::Inline => self.inline_fragment(&core, operation, group, example),
            SampleMode::Standalone => self.block(&core, true, true),
            SampleMode::Block { prelude, last } => self.block(&core, prelude, last),
        })
    }

    /// Parameter declarations plus the awaited call, without any surrounding code.
    ///
    /// Statements start at column zero and end with a newline.
    pub fn core_statements(
        &self,
        operation: &Operation,
        group: &OperationGroup,
        example: &Example,
    ) -> Option<String> {
        let arguments = match resolve_arguments(operation, example) {
            Ok(arguments) => arguments,
            Err(missing) => {
                self.sink.record(Diagnostic::missing_parameter(
                    &missing.operation,
                    &missing.parameter,
                ));
                tracing::warn!(
                    operation = %operation.name,
                    example = %example.name,
                    "Sample suppressed"
                );
                return None;
            }
        };

        let variables: Vec<String> = arguments
            .iter()
            .map(|a| argument_variable(&a.parameter.name))
            .collect();

        let mut w = IndentedWriter::new();
        for (argument, variable) in arguments.iter().zip(&variables) {
            w.line(&self.declaration(argument, variable));
        }
        if !arguments.is_empty() {
            w.blank();
        }

        let names: Vec<&str> = variables.iter().map(String::as_str).collect();
        let binding = result_binding(operation, &names);
        let receiver = if group.is_top_level() {
            CLIENT_INSTANCE.to_string()
        } else {
            format!("{CLIENT_INSTANCE}.{}", to_camel_case(&group.name))
        };

        w.line(&format!(
            "const {binding} = await {receiver}.{}({});",
            operation.name,
            names.join(", ")
        ))
        .line(&format!("console.log({binding});"));

        Some(w.finish())
    }

    fn declaration(&self, argument: &ResolvedArgument<'_>, variable: &str) -> String {
        let parameter = argument.parameter;
        let literal = self
            .synth
            .synthesize(&parameter.model_type, Some(argument.resolved.value), 0);

        match &parameter.model_type {
            ModelType::Composite { name } => {
                let namespace = if name.eq_ignore_ascii_case(REQUEST_OPTIONS_CLASS) {
                    RUNTIME_NAMESPACE
                } else {
                    self.synth.models_namespace()
                };
                format!("const {variable}: {namespace}.{name} = {literal};")
            }
            _ => format!("const {variable} = {literal};"),
        }
    }

    /// Imports, credential acquisition and client construction.
    ///
    /// Leaves the entry function open; the text ends one level deep inside it.
    pub fn prelude(&self) -> String {
        let client = &self.client_name;
        let mut w = IndentedWriter::new();
        w.line(&format!(
            "// npm install {}@{} ms-rest-js ms-rest-nodeauth",
            self.settings.package_name, self.settings.package_version
        ))
        .line(&format!("import * as {RUNTIME_NAMESPACE} from \"ms-rest-js\";"))
            .line("import * as msRestNodeAuth from \"ms-rest-nodeauth\";")
            .line(&format!(
                "import {{ {client}, {} }} from {};",
                self.synth.models_namespace(),
                quote(&self.settings.package_name)
            ))
            .blank()
            .line(&format!(
                "const subscriptionId = {};",
                quote(&self.settings.subscription_id)
            ))
            .line("// Calling the async executeContext method")
            .line("executeContext().catch((err) => { console.log(err); });")
            .line("// Function Definition")
            .line("async function executeContext(): Promise<void> {")
            .indent()
            .line("// Authenticate.")
            .line("const credentials = await msRestNodeAuth.interactiveLogin();")
            .line("// Create client.")
            .line(&format!(
                "const {CLIENT_INSTANCE} = new {client}(credentials, subscriptionId);"
            ));
        w.finish()
    }

    fn block(&self, core: &str, prelude: bool, last: bool) -> String {
        let mut w = IndentedWriter::new();
        if prelude {
            w.raw(&self.prelude());
        }
        w.indent()
            .line("{")
            .indent()
            .line(core.trim_end())
            .outdent()
            .line("}");
        if last {
            w.outdent().line("}");
        }
        w.finish()
    }

    fn inline_fragment(
        &self,
        core: &str,
        operation: &Operation,
        group: &OperationGroup,
        example: &Example,
    ) -> String {
        let title_line = example
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("#### Title: {t}"));
        let mut body: Vec<&str> = Vec::new();
        if let Some(line) = &title_line {
            body.push(line);
            body.push("");
        }
        if let Some(description) = example.description.as_deref().filter(|d| !d.is_empty()) {
            body.push("#### Description:");
            body.extend(description.lines());
            body.push("");
        }
        body.push("@example");
        body.push("```typescript");
        body.extend(core.trim_end().lines());
        body.push("```");

        let mut out = String::from("/**\n");
        for line in body {
            if line.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(" * ");
                out.push_str(&line.replace("*/", "*\\/"));
                out.push('\n');
            }
        }
        out.push_str(" */\n");
        out.push_str(&format!("var {};\n", sample_name(operation, group)));
        out
    }

    /// Batches every example of `operation` into one standalone program.
    ///
    /// Returns `None` when no example produced a sample.
    pub fn operation_program(&self, operation: &Operation, group: &OperationGroup) -> Option<String> {
        let mut program = ProgramBuilder::new(self);
        for example in &operation.examples {
            program.push(operation, group, example);
        }
        program.finish()
    }

    /// Inline fragments for every example of `operation`, concatenated.
    pub fn operation_fragments(&self, operation: &Operation, group: &OperationGroup) -> Option<String> {
        let fragments: Vec<String> = operation
            .examples
            .iter()
            .filter_map(|example| self.assemble(SampleMode::Inline, operation, group, example))
            .collect();
        (!fragments.is_empty()).then(|| fragments.join("\n"))
    }
}

/// Accumulates sample blocks into one program.
///
/// The bootstrap prelude is written before the first block that is actually
/// emitted, and the entry function is closed once by [`finish`](Self::finish),
/// so suppressed samples anywhere in the batch leave a well-formed program.
pub struct ProgramBuilder<'s, 'a> {
    assembler: &'s SampleAssembler<'a>,
    text: String,
    blocks: usize,
}

impl<'s, 'a> ProgramBuilder<'s, 'a> {
    pub fn new(assembler: &'s SampleAssembler<'a>) -> Self {
        Self {
            assembler,
            text: String::new(),
            blocks: 0,
        }
    }

    /// Adds the sample for `example`; returns `false` if it was suppressed.
    pub fn push(&mut self, operation: &Operation, group: &OperationGroup, example: &Example) -> bool {
        let mode = SampleMode::Block {
            prelude: self.blocks == 0,
            last: false,
        };
        match self.assembler.assemble(mode, operation, group, example) {
            Some(block) => {
                self.text.push_str(&block);
                self.blocks += 1;
                true
            }
            None => false,
        }
    }

    /// Number of blocks emitted so far.
    pub fn len(&self) -> usize {
        self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks == 0
    }

    /// Closes the entry function; `None` if nothing was emitted.
    pub fn finish(mut self) -> Option<String> {
        if self.blocks == 0 {
            return None;
        }
        self.text.push_str("}\n");
        Some(self.text)
    }
}

/// Identifier reserved for a sample (`{Group}{Operation}Sample`).
///
/// ## Examples
///
/// ```
/// use exemplar_define::{Operation, OperationGroup};
/// use exemplar_gen::codegen::sample::sample_name;
///
/// let op = Operation::new("putWidget", vec![]);
/// assert_eq!(sample_name(&op, &OperationGroup::top_level(vec![])), "PutWidgetSample");
/// assert_eq!(sample_name(&op, &OperationGroup::new("widgets", vec![])), "WidgetsPutWidgetSample");
/// ```
pub fn sample_name(operation: &Operation, group: &OperationGroup) -> String {
    format!(
        "{}{}Sample",
        to_pascal_case(&group.name),
        to_pascal_case(&operation.name)
    )
}

/// Variable name a parameter is declared under.
///
/// Parameters named like a prelude identifier get an `Arg` suffix.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::codegen::sample::argument_variable;
///
/// assert_eq!(argument_variable("widgetBody"), "widgetBody");
/// assert_eq!(argument_variable("client"), "clientArg");
/// ```
pub fn argument_variable(name: &str) -> String {
    if RESERVED_IDENTIFIERS.contains(&name) {
        format!("{name}Arg")
    } else {
        name.to_string()
    }
}

/// Name the call result is bound to.
///
/// The camelCased return body type name, else the return headers type
/// name, else `{operation}Result`. A name that would shadow a prelude
/// identifier or one of the argument variables gets `Result` suffixes
/// until it is free.
pub fn result_binding(operation: &Operation, arguments: &[&str]) -> String {
    let return_type = &operation.return_type;
    let mut binding = match return_type.body.as_deref().or(return_type.headers.as_deref()) {
        Some(name) => to_camel_case(name),
        None => format!("{}Result", operation.name),
    };

    while RESERVED_IDENTIFIERS.contains(&binding.as_str()) || arguments.contains(&binding.as_str()) {
        binding.push_str("Result");
    }
    binding
}

fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}
