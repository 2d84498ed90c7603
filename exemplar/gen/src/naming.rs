//! Naming conventions and scalar literal escaping.
//!
//! Generated samples reuse identifiers from the code model, so casing
//! transforms must be conservative: names that are already valid
//! identifiers only have their first character adjusted (`getVMSize` keeps
//! its acronym), while names containing separators are fully re-cased.
//!
//! Scalar literals are produced by a [`LiteralEscaper`], keyed by the
//! *declared* primitive kind rather than by the JSON type of the example
//! value. [`TypeScriptEscaper`] is the default implementation.

use exemplar_define::PrimitiveKind;
use heck::{ToLowerCamelCase, ToUpperCamelCase};
use serde_json::Value;

fn is_identifier_like(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '$')
}

/// Converts a name to camelCase.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("Widget"), "widget");
/// assert_eq!(to_camel_case("VirtualMachineScaleSets"), "virtualMachineScaleSets");
/// assert_eq!(to_camel_case("getVMSize"), "getVMSize");
/// assert_eq!(to_camel_case("storage-accounts"), "storageAccounts");
/// ```
pub fn to_camel_case(s: &str) -> String {
    if !is_identifier_like(s) {
        return s.to_lower_camel_case();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a name to PascalCase.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("putWidget"), "PutWidget");
/// assert_eq!(to_pascal_case("storage_accounts"), "StorageAccounts");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    if !is_identifier_like(s) {
        return s.to_upper_camel_case();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Writes example scalars as source literals.
pub trait LiteralEscaper: Send + Sync {
    /// Escapes `value` as a literal of the declared primitive `kind`.
    fn escape(&self, kind: PrimitiveKind, value: &Value) -> String;
}

/// Escapes scalars using TypeScript literal syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScriptEscaper;

impl TypeScriptEscaper {
    fn quote(text: &str) -> String {
        // A JSON string literal is a valid TypeScript string literal.
        Value::String(text.to_string()).to_string()
    }
}

/// Returns the text as a number literal if it is one in TypeScript.
///
/// Rust accepts `inf`, `NaN` and `infinity` as floats; TypeScript does not.
fn numeric_literal(text: &str) -> Option<&str> {
    let text = text.trim();
    let starts_numeric = text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '.');
    let finite = text.parse::<f64>().is_ok_and(f64::is_finite);
    (starts_numeric && finite).then_some(text)
}

/// Plain text of a scalar; compact JSON for anything else.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl LiteralEscaper for TypeScriptEscaper {
    fn escape(&self, kind: PrimitiveKind, value: &Value) -> String {
        let text = scalar_text(value);
        match kind {
            _ if kind.is_numeric() => match value {
                Value::Number(n) => n.to_string(),
                Value::String(s) => match numeric_literal(s) {
                    Some(number) => number.to_string(),
                    None => Self::quote(s),
                },
                _ => Self::quote(&text),
            },
            PrimitiveKind::Boolean => match value {
                Value::Bool(b) => b.to_string(),
                Value::String(s) if s.eq_ignore_ascii_case("true") => "true".to_string(),
                Value::String(s) if s.eq_ignore_ascii_case("false") => "false".to_string(),
                _ => Self::quote(&text),
            },
            // Seconds since the epoch; `Date` takes milliseconds.
            PrimitiveKind::UnixTime => match value {
                Value::Number(n) => format!("new Date({n} * 1000)"),
                Value::String(s) => match numeric_literal(s) {
                    Some(seconds) => format!("new Date({seconds} * 1000)"),
                    None => format!("new Date({})", Self::quote(s)),
                },
                _ => format!("new Date({})", Self::quote(&text)),
            },
            PrimitiveKind::Date | PrimitiveKind::DateTime | PrimitiveKind::DateTimeRfc1123 => {
                format!("new Date({})", Self::quote(&text))
            }
            PrimitiveKind::ByteArray => format!("Buffer.from({}, \"base64\")", Self::quote(&text)),
            PrimitiveKind::Object => value.to_string(),
            // String, Uuid, TimeSpan, Base64Url, Stream
            _ => Self::quote(&text),
        }
    }
}
