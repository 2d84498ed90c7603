//! Validation module for code models.
//!
//! This module provides pre-generation validation to detect structural
//! problems before any sample is assembled. Unlike defects in example data,
//! which only suppress or trim individual samples, these problems mean the
//! model itself cannot be trusted and generation must not start.
//!
//! ## Validation Checks
//!
//! - **Model family**: the model must have been normalized for TypeScript
//! - **Type references**: every enum/composite a property or parameter
//!   references must be defined in the model
//! - **Property names**: logical property names are unique per composite
//! - **Sample paths**: no two operations map to the same sample file
//! - **Transformations**: a transformation naming no formal parameter is
//!   logged as a warning
//!
//! ## Examples
//!
//! ```
//! use exemplar_define::{CodeModel, ModelFamily};
//! use exemplar_gen::validation::validate_model;
//!
//! let model = CodeModel::new("WidgetClient", ModelFamily::TypeScript);
//! assert!(validate_model(&model).is_ok());
//!
//! let python = CodeModel::new("WidgetClient", ModelFamily::Python);
//! assert!(validate_model(&python).is_err());
//! ```

use std::collections::{HashMap, HashSet};

use exemplar_define::{CodeModel, ModelFamily, ModelType};

use crate::errors::GeneratorError;
use crate::output::sample_path;

/// The only model family this generator accepts.
pub const EXPECTED_FAMILY: ModelFamily = ModelFamily::TypeScript;

/// Checks the model family.
///
/// ## Errors
///
/// Returns `GeneratorError::WrongModelKind` for any family other than
/// [`EXPECTED_FAMILY`].
pub fn ensure_family(model: &CodeModel) -> Result<(), GeneratorError> {
    if model.family != EXPECTED_FAMILY {
        return Err(GeneratorError::WrongModelKind {
            expected: EXPECTED_FAMILY,
            found: model.family,
        });
    }
    Ok(())
}

/// Validates a code model before sample generation.
///
/// ## Errors
///
/// - `GeneratorError::WrongModelKind` if the model is not a TypeScript model
/// - `GeneratorError::DuplicateProperty` if a composite repeats a logical
///   property name
/// - `GeneratorError::UnresolvedType` if a property or parameter references
///   an undefined enum or composite
/// - `GeneratorError::DuplicateSamplePath` if two operations share a sample
///   file, e.g. a group named `client` next to top-level operations
pub fn validate_model(model: &CodeModel) -> Result<(), GeneratorError> {
    ensure_family(model)?;

    for composite in &model.model_types {
        let mut seen = HashSet::new();
        for property in &composite.properties {
            if !seen.insert(property.name.as_str()) {
                return Err(GeneratorError::DuplicateProperty {
                    class_name: composite.class_name.clone(),
                    property: property.name.clone(),
                });
            }
            check_references(model, &composite.class_name, &property.model_type)?;
        }
    }

    let mut paths: HashMap<_, String> = HashMap::new();
    for (group, operation) in model.operations() {
        let path = sample_path(group, operation);
        let qualified = qualified_name(group.name.as_str(), &operation.name);
        if let Some(first) = paths.get(&path) {
            return Err(GeneratorError::DuplicateSamplePath {
                path: path.display().to_string(),
                first: first.clone(),
                second: qualified,
            });
        }
        paths.insert(path, qualified);

        for parameter in &operation.parameters {
            check_references(model, &operation.name, &parameter.model_type)?;
        }

        for transformation in &operation.transformations {
            if operation.parameter(&transformation.flattened_name).is_none() {
                tracing::warn!(
                    operation = %operation.name,
                    flattened = %transformation.flattened_name,
                    original = %transformation.original_name,
                    "Transformation does not name a formal parameter"
                );
            }
        }
    }

    Ok(())
}

fn qualified_name(group: &str, operation: &str) -> String {
    if group.is_empty() {
        operation.to_string()
    } else {
        format!("{group}.{operation}")
    }
}

fn check_references(model: &CodeModel, owner: &str, ty: &ModelType) -> Result<(), GeneratorError> {
    let mut missing = None;
    ty.for_each_reference(&mut |reference| {
        if missing.is_some() {
            return;
        }
        let defined = match reference {
            ModelType::Enum { name } => model.enum_type(name).is_some(),
            ModelType::Composite { name } => model.composite(name).is_some(),
            _ => true,
        };
        if !defined {
            missing = reference.class_name().map(str::to_string);
        }
    });

    match missing {
        Some(name) => Err(GeneratorError::UnresolvedType {
            owner: owner.to_string(),
            name,
        }),
        None => Ok(()),
    }
}
