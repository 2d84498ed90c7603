//! Operations, their formal parameters, and the groups they live in.

use serde::{Deserialize, Serialize};

use crate::example::Example;
use crate::types::ModelType;

/// A formal parameter of an [`Operation`].
///
/// ## Examples
///
/// ```
/// use exemplar_define::{ModelType, Parameter};
///
/// let body = Parameter::required("widgetBody", ModelType::composite("Widget"));
/// assert_eq!(body.serialized_name, "widgetBody");
///
/// let filter = Parameter::optional("filter", ModelType::string())
///     .with_serialized_name("$filter");
/// assert!(!filter.required);
/// assert_eq!(filter.serialized_name, "$filter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Identifier used for the generated variable and argument.
    pub name: String,
    /// Key used on the wire and in example payloads.
    pub serialized_name: String,
    pub model_type: ModelType,
    #[serde(default)]
    pub required: bool,
}

impl Parameter {
    pub fn required(name: impl Into<String>, model_type: ModelType) -> Self {
        let name = name.into();
        Self {
            serialized_name: name.clone(),
            name,
            model_type,
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, model_type: ModelType) -> Self {
        Self {
            required: false,
            ..Self::required(name, model_type)
        }
    }

    pub fn with_serialized_name(mut self, serialized_name: impl Into<String>) -> Self {
        self.serialized_name = serialized_name.into();
        self
    }
}

/// A flattening rule: the parameter `flattened_name` was extracted from a
/// field of the parameter originally named `original_name`.
///
/// Both names are wire names. Examples are recorded against the original
/// (unflattened) shape, so a flattened parameter is found by looking up
/// `original_name` and then selecting the parameter's own wire name inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterTransformation {
    pub flattened_name: String,
    pub original_name: String,
}

impl ParameterTransformation {
    pub fn new(flattened_name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            flattened_name: flattened_name.into(),
            original_name: original_name.into(),
        }
    }
}

/// Names of the types an operation returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnType {
    /// Response body type name.
    #[serde(default)]
    pub body: Option<String>,
    /// Response headers type name.
    #[serde(default)]
    pub headers: Option<String>,
}

impl ReturnType {
    pub fn body(name: impl Into<String>) -> Self {
        Self {
            body: Some(name.into()),
            headers: None,
        }
    }
}

/// A single API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Method name on the generated client (e.g. `putWidget`).
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Formal parameters in declaration (call) order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub transformations: Vec<ParameterTransformation>,
    #[serde(default)]
    pub return_type: ReturnType,
    /// Recorded example invocations, in documentation order.
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Operation {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters,
            transformations: vec![],
            return_type: ReturnType::default(),
            examples: vec![],
        }
    }

    pub fn parameter(&self, serialized_name: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.serialized_name == serialized_name)
    }
}

/// Operations sharing a property on the generated client.
///
/// An empty `name` denotes operations exposed directly on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl OperationGroup {
    pub fn new(name: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            name: name.into(),
            operations,
        }
    }

    pub fn top_level(operations: Vec<Operation>) -> Self {
        Self::new("", operations)
    }

    pub fn is_top_level(&self) -> bool {
        self.name.is_empty()
    }
}
