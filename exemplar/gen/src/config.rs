//! Generator settings.
//!
//! Everything the sample generator needs beyond the code model itself is
//! carried in a [`GeneratorSettings`] value passed explicitly into the
//! generation entry points. Settings can be read from a TOML file and then
//! overridden from the command line.
//!
//! ## Examples
//!
//! ```
//! use exemplar_gen::config::GeneratorSettings;
//!
//! let settings = GeneratorSettings::from_toml_str(r#"
//!     package_name = "@acme/widgets"
//!     package_version = "1.2.0"
//! "#).unwrap();
//!
//! assert_eq!(settings.package_name, "@acme/widgets");
//! assert!(!settings.inline_sub_resource_ids);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::GeneratorError;

/// Placeholder subscription id written into standalone samples.
pub const DEFAULT_SUBSCRIPTION_ID: &str = "012-334-555-656";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// npm package the samples import the client from.
    pub package_name: String,
    pub package_version: String,
    /// Overrides the client class name taken from the model.
    pub client_name: Option<String>,
    /// Overrides the models namespace prefix taken from the model.
    pub client_prefix: Option<String>,
    pub subscription_id: String,
    /// Write `SubResource` literals that only carry an `id` as the bare id value.
    pub inline_sub_resource_ids: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            package_name: "client".to_string(),
            package_version: "0.1.0".to_string(),
            client_name: None,
            client_prefix: None,
            subscription_id: DEFAULT_SUBSCRIPTION_ID.to_string(),
            inline_sub_resource_ids: false,
        }
    }
}

impl GeneratorSettings {
    /// Parses settings from TOML; missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, GeneratorError> {
        let settings: Self =
            toml::from_str(source).map_err(|e| GeneratorError::ParseError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, GeneratorError> {
        let source = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks that the settings can produce importable samples.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if the package name is empty or
    /// contains whitespace, or if an override is empty.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.package_name.trim().is_empty() {
            return Err(GeneratorError::ConfigError(
                "package_name cannot be empty".to_string(),
            ));
        }
        if self.package_name.chars().any(char::is_whitespace) {
            return Err(GeneratorError::ConfigError(format!(
                "package_name '{}' cannot contain whitespace",
                self.package_name
            )));
        }
        for (key, value) in [
            ("client_name", &self.client_name),
            ("client_prefix", &self.client_prefix),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(GeneratorError::ConfigError(format!("{key} cannot be empty")));
            }
        }
        Ok(())
    }
}
