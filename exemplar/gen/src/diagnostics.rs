//! Diagnostics raised by example data defects.
//!
//! Sample generation never fails because an example is incomplete. Instead
//! each defect is recorded in a [`DiagnosticSink`] and generation carries on
//! with best-effort output. Two sinks are provided:
//!
//! - [`TracingSink`] - forwards every diagnostic as a `tracing` event
//! - [`CollectingSink`] - keeps diagnostics in memory for inspection
//!
//! Both are `Send + Sync`, so a sink can be shared by callers that
//! generate samples from several threads.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A required composite property had no example value.
    MissingRequiredField { class_name: String, property: String },
    /// A required operation parameter could not be resolved from an example.
    MissingRequiredParameter { operation: String, parameter: String },
}

/// A single structured diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    /// A required property was absent from example data.
    ///
    /// ## Examples
    ///
    /// ```
    /// use exemplar_gen::diagnostics::{Diagnostic, Severity};
    ///
    /// let d = Diagnostic::missing_field("Widget", "name");
    /// assert_eq!(d.severity, Severity::Error);
    /// assert_eq!(d.message, "Required property 'name' of type 'Widget' not found.");
    /// ```
    pub fn missing_field(class_name: &str, property: &str) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::MissingRequiredField {
                class_name: class_name.to_string(),
                property: property.to_string(),
            },
            message: format!("Required property '{property}' of type '{class_name}' not found."),
        }
    }

    /// A required parameter could not be found in an example.
    pub fn missing_parameter(operation: &str, parameter: &str) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::MissingRequiredParameter {
                operation: operation.to_string(),
                parameter: parameter.to_string(),
            },
            message: format!(
                "Required parameter '{parameter}' of operation '{operation}' not found."
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}: {}", self.message)
    }
}

/// Append-only destination for diagnostics.
///
/// Implementations must not panic and must tolerate concurrent calls.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn record(&self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        let (kind, owner, member) = match &diagnostic.kind {
            DiagnosticKind::MissingRequiredField {
                class_name,
                property,
            } => ("missing_required_field", class_name, property),
            DiagnosticKind::MissingRequiredParameter {
                operation,
                parameter,
            } => ("missing_required_parameter", operation, parameter),
        };

        match diagnostic.severity {
            Severity::Error => tracing::error!(
                diagnostic.kind = kind,
                diagnostic.owner = %owner,
                diagnostic.member = %member,
                "{}",
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                diagnostic.kind = kind,
                diagnostic.owner = %owner,
                diagnostic.member = %member,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Keeps diagnostics in memory, in the order they were recorded.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of recorded diagnostics with `Error` severity.
    pub fn error_count(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, diagnostic: Diagnostic) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

/// Records into two sinks; used to log and count at the same time.
pub struct Tee<A, B>(pub A, pub B);

impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for Tee<A, B> {
    fn record(&self, diagnostic: Diagnostic) {
        self.0.record(diagnostic.clone());
        self.1.record(diagnostic);
    }
}
