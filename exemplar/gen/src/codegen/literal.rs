//! Literal synthesis from example data.
//!
//! [`LiteralSynthesizer`] turns an untyped JSON example value into the
//! source text of a literal expression, directed by the declared
//! [`ModelType`]. Output depends only on the type, the value and the
//! nesting depth: object properties follow the type's declaration order,
//! never the JSON object's key order.
//!
//! ## Layout
//!
//! Non-empty objects and arrays are written one entry per line. Entries are
//! indented two spaces per level below `depth`; the closing delimiter is
//! aligned with `depth`:
//!
//! ```text
//! {
//!   name: "acme",
//!   tags: [
//!     "blue"
//!   ]
//! }
//! ```
//!
//! Empty objects and arrays are always `{}` and `[]`.

use exemplar_define::{CodeModel, CompositeType, EnumType, ModelType, PrimitiveKind};
use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::indented::indent_for;
use crate::naming::{LiteralEscaper, TypeScriptEscaper};
use crate::path;

/// The literal written for absent or null values.
pub const ABSENT_LITERAL: &str = "undefined";
pub const EMPTY_OBJECT_LITERAL: &str = "{}";
pub const EMPTY_ARRAY_LITERAL: &str = "[]";

/// Class name of the resource stub affected by
/// [`SynthesisOptions::inline_sub_resource_ids`].
const SUB_RESOURCE_CLASS: &str = "SubResource";

/// Optional synthesis rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Write a `SubResource` whose only property is `id` as the bare id
    /// value (`"/subscriptions/..."`) instead of `{ id: ... }`.
    pub inline_sub_resource_ids: bool,
}

/// Synthesizes literal expressions for one code model.
///
/// ## Examples
///
/// ```
/// use exemplar_define::prelude::*;
/// use exemplar_gen::codegen::LiteralSynthesizer;
/// use exemplar_gen::diagnostics::CollectingSink;
/// use serde_json::json;
///
/// let mut model = CodeModel::new("WidgetClient", ModelFamily::TypeScript);
/// model.model_types.push(CompositeType::new(
///     "Widget",
///     vec![
///         Property::required("name", ModelType::string()),
///         Property::optional("size", ModelType::int()),
///     ],
/// ));
///
/// let sink = CollectingSink::new();
/// let synth = LiteralSynthesizer::new(&model, &sink);
/// let value = json!({ "size": 3, "name": "acme" });
///
/// assert_eq!(
///     synth.synthesize(&ModelType::composite("Widget"), Some(&value), 0),
///     "{\n  name: \"acme\",\n  size: 3\n}"
/// );
/// assert!(sink.is_empty());
/// ```
pub struct LiteralSynthesizer<'a> {
    model: &'a CodeModel,
    sink: &'a dyn DiagnosticSink,
    escaper: &'a dyn LiteralEscaper,
    models_namespace: String,
    options: SynthesisOptions,
}

impl<'a> LiteralSynthesizer<'a> {
    /// Creates a synthesizer using TypeScript escaping and the model's own
    /// namespace prefix.
    pub fn new(model: &'a CodeModel, sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            model,
            sink,
            escaper: &TypeScriptEscaper,
            models_namespace: format!("{}Models", model.client_prefix()),
            options: SynthesisOptions::default(),
        }
    }

    /// Overrides the namespace enum casts are qualified with.
    pub fn with_models_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.models_namespace = namespace.into();
        self
    }

    pub fn with_options(mut self, options: SynthesisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn models_namespace(&self) -> &str {
        &self.models_namespace
    }

    /// Synthesizes the literal for `value` under `ty`, nested `depth` levels deep.
    ///
    /// Absent and null values yield [`ABSENT_LITERAL`] for every type. A
    /// value of the wrong JSON shape for a composite or sequence also yields
    /// [`ABSENT_LITERAL`]; missing required properties are reported to the
    /// sink and left out.
    pub fn synthesize(&self, ty: &ModelType, value: Option<&Value>, depth: usize) -> String {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return ABSENT_LITERAL.to_string();
        };

        match ty {
            ModelType::Composite { name } => match self.model.composite(name) {
                Some(composite) => self.object_literal(composite, value, depth),
                None => {
                    tracing::debug!(class = %name, "Unknown composite type, writing raw JSON");
                    self.escaper.escape(PrimitiveKind::Object, value)
                }
            },
            ModelType::Sequence { element } => self.sequence_literal(element, value, depth),
            ModelType::Enum { name } => match self.model.enum_type(name) {
                Some(enum_type) => self.enum_literal(enum_type, value),
                None => {
                    tracing::debug!(class = %name, "Unknown enum type, writing plain string");
                    self.escaper.escape(PrimitiveKind::String, value)
                }
            },
            ModelType::Primitive { kind } => self.escaper.escape(*kind, value),
            ModelType::Dictionary { .. } => self.escaper.escape(PrimitiveKind::Object, value),
        }
    }

    fn object_literal(&self, composite: &CompositeType, value: &Value, depth: usize) -> String {
        if !value.is_object() {
            return ABSENT_LITERAL.to_string();
        }

        let indent = indent_for(depth + 1);
        let mut entries = Vec::with_capacity(composite.properties.len());

        for property in &composite.properties {
            match path::select(value, &property.serialized_name) {
                Some(found) => {
                    let literal = self.synthesize(&property.model_type, Some(found), depth + 1);
                    entries.push(format!("{indent}{}: {literal}", property_key(&property.name)));
                }
                None if property.required => {
                    self.sink
                        .record(Diagnostic::missing_field(&composite.class_name, &property.name));
                }
                None => {}
            }
        }

        if entries.is_empty() {
            return EMPTY_OBJECT_LITERAL.to_string();
        }

        if self.options.inline_sub_resource_ids && is_id_only_sub_resource(composite) {
            if let Some(id) = path::select(value, "id") {
                return id.to_string();
            }
        }

        format!("{{\n{}\n{}}}", entries.join(",\n"), indent_for(depth))
    }

    fn sequence_literal(&self, element: &ModelType, value: &Value, depth: usize) -> String {
        let Some(items) = value.as_array() else {
            return ABSENT_LITERAL.to_string();
        };

        if items.is_empty() {
            return EMPTY_ARRAY_LITERAL.to_string();
        }

        let indent = indent_for(depth + 1);
        let entries: Vec<String> = items
            .iter()
            .map(|item| format!("{indent}{}", self.synthesize(element, Some(item), depth + 1)))
            .collect();

        format!("[\n{}\n{}]", entries.join(",\n"), indent_for(depth))
    }

    fn enum_literal(&self, enum_type: &EnumType, value: &Value) -> String {
        let declared = value.as_str().and_then(|text| {
            enum_type
                .values
                .iter()
                .find(|candidate| candidate.eq_ignore_ascii_case(text))
        });

        let scalar = match declared {
            Some(canonical) => Value::String(canonical.clone()),
            None => {
                if !enum_type.model_as_string && !enum_type.values.is_empty() {
                    tracing::warn!(
                        class = %enum_type.class_name,
                        value = %value,
                        "Example value is not a declared enum value"
                    );
                }
                value.clone()
            }
        };

        format!(
            "<{}.{}>{}",
            self.models_namespace,
            enum_type.class_name,
            self.escaper.escape(PrimitiveKind::String, &scalar)
        )
    }
}

fn is_id_only_sub_resource(composite: &CompositeType) -> bool {
    composite.short_name() == SUB_RESOURCE_CLASS
        && composite.properties.len() == 1
        && composite.properties[0].serialized_name == "id"
}

/// Object key for a property: bare when it is a valid identifier, quoted otherwise.
fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if valid {
        name.to_string()
    } else {
        Value::String(name.to_string()).to_string()
    }
}
