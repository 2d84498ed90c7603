//! The top-level code model.
//!
//! A [`CodeModel`] is the normalized description of one API: its named
//! types, its operation groups, and the language family it was prepared
//! for. It is produced once per generation run and never mutated.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::operation::{Operation, OperationGroup};
use crate::types::{CompositeType, EnumType};

/// Language family a code model was normalized for.
///
/// Models carry language-specific naming, so a model prepared for one
/// family cannot be fed to another family's generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ModelFamily {
    TypeScript,
    Python,
    CSharp,
    Go,
    Java,
}

/// Errors raised while loading a code model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read code model '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse code model: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A complete, normalized API description.
///
/// ## Examples
///
/// ```
/// use exemplar_define::{CodeModel, ModelFamily};
///
/// let model = CodeModel::new("WidgetClient", ModelFamily::TypeScript);
/// assert_eq!(model.client_prefix(), "Widget");
/// assert!(model.composite("Widget").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeModel {
    /// Service client class name.
    pub name: String,
    pub family: ModelFamily,
    /// Prefix of the models namespace (`{prefix}Models`).
    #[serde(default)]
    pub client_prefix: Option<String>,
    #[serde(default)]
    pub model_types: Vec<CompositeType>,
    #[serde(default)]
    pub enum_types: Vec<EnumType>,
    #[serde(default)]
    pub operation_groups: Vec<OperationGroup>,
}

impl CodeModel {
    pub fn new(name: impl Into<String>, family: ModelFamily) -> Self {
        Self {
            name: name.into(),
            family,
            client_prefix: None,
            model_types: vec![],
            enum_types: vec![],
            operation_groups: vec![],
        }
    }

    /// Parses a model from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a model from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let json = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn composite(&self, class_name: &str) -> Option<&CompositeType> {
        self.model_types.iter().find(|t| t.class_name == class_name)
    }

    pub fn enum_type(&self, class_name: &str) -> Option<&EnumType> {
        self.enum_types.iter().find(|t| t.class_name == class_name)
    }

    /// Returns the models namespace prefix.
    ///
    /// Uses `client_prefix` if set, otherwise the client name with a
    /// trailing `Client` removed.
    pub fn client_prefix(&self) -> &str {
        match &self.client_prefix {
            Some(prefix) => prefix,
            None => self.name.strip_suffix("Client").unwrap_or(&self.name),
        }
    }

    /// Iterates every operation together with its group, in model order.
    pub fn operations(&self) -> impl Iterator<Item = (&OperationGroup, &Operation)> {
        self.operation_groups
            .iter()
            .flat_map(|group| group.operations.iter().map(move |op| (group, op)))
    }
}
