//! Error types for the sample generator.
//!
//! Only structural problems are errors. Defects in example data
//! (missing required values, mistyped payloads) are reported through the
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) and never surface
//! as a `GeneratorError`.

use exemplar_define::{ModelError, ModelFamily};
use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to load or parse the code model
    #[error("Failed to load code model: {0}")]
    ModelError(#[from] ModelError),

    /// Failed to parse a settings file
    #[error("Failed to parse settings: {0}")]
    ParseError(String),

    /// Failed to read an input file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The model was normalized for a different language family.
    #[error("Code model is not a {expected} code model (found {found})")]
    WrongModelKind {
        expected: ModelFamily,
        found: ModelFamily,
    },

    /// A property or parameter references a type the model does not define.
    #[error("'{owner}' references undefined type '{name}'")]
    UnresolvedType {
        /// Composite class name or operation name holding the reference.
        owner: String,
        /// The missing enum or composite class name.
        name: String,
    },

    /// Two operations would be written to the same sample file.
    #[error("Operations '{first}' and '{second}' would both be written to '{path}'")]
    DuplicateSamplePath {
        path: String,
        first: String,
        second: String,
    },

    /// Two properties of one composite share a logical name.
    #[error("Type '{class_name}' declares property '{property}' more than once")]
    DuplicateProperty {
        class_name: String,
        property: String,
    },
}
