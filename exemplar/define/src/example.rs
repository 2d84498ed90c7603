//! Recorded example invocations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recorded invocation of an operation.
///
/// `parameters` maps wire parameter names to arbitrary JSON values, exactly
/// as captured in the API description.
///
/// ## Examples
///
/// ```
/// use exemplar_define::Example;
/// use serde_json::json;
///
/// let example = Example::new("PutWidget", json!({ "widgetBody": { "name": "acme" } }))
///     .with_title("Create a widget");
///
/// assert_eq!(example.title.as_deref(), Some("Create a widget"));
/// assert!(example.parameter("widgetBody").is_some());
/// assert!(example.parameter("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl Example {
    /// Creates an example from a JSON object of parameters.
    ///
    /// Non-object values produce an example without parameters.
    pub fn new(name: impl Into<String>, parameters: Value) -> Self {
        let parameters = match parameters {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            name: name.into(),
            title: None,
            description: None,
            parameters,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Looks up a top-level parameter by wire name.
    pub fn parameter(&self, serialized_name: &str) -> Option<&Value> {
        self.parameters.get(serialized_name)
    }
}
