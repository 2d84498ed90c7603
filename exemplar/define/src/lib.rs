//! Exemplar Model Library
//!
//! This crate provides the normalized, language-agnostic description of an
//! HTTP API that the `exemplar-gen` sample generator consumes. Models are
//! produced upstream (typically as JSON) and are read-only to the generator.
//!
//! ## Core Types
//!
//! - [`CodeModel`] - A complete API: named types plus operation groups
//! - [`ModelFamily`] - Language family the model was normalized for
//! - [`OperationGroup`] - Operations sharing a client property
//! - [`Operation`] - A single operation with formal parameters and examples
//! - [`Parameter`] - A formal parameter (logical name, wire name, type)
//! - [`ParameterTransformation`] - A parameter-flattening rule
//! - [`ReturnType`] - Response body / header type names
//! - [`Example`] - A recorded invocation keyed by wire parameter name
//! - [`ModelType`] - Primitive, enum, composite, sequence or dictionary reference
//! - [`CompositeType`], [`Property`], [`EnumType`], [`PrimitiveKind`]
//!
//! ## Examples
//!
//! ```
//! use exemplar_define::prelude::*;
//! use serde_json::json;
//!
//! let mut model = CodeModel::new("WidgetClient", ModelFamily::TypeScript);
//! model.model_types.push(CompositeType::new(
//!     "Widget",
//!     vec![
//!         Property::required("name", ModelType::string()),
//!         Property::optional("tags", ModelType::sequence(ModelType::string())),
//!     ],
//! ));
//!
//! let mut put = Operation::new(
//!     "putWidget",
//!     vec![Parameter::required("widgetBody", ModelType::composite("Widget"))],
//! );
//! put.examples.push(Example::new("Create", json!({ "widgetBody": { "name": "acme" } })));
//! model.operation_groups.push(OperationGroup::top_level(vec![put]));
//!
//! assert_eq!(model.operations().count(), 1);
//! ```

pub mod example;
pub mod model;
pub mod operation;
pub mod prelude;
pub mod types;

// Re-export main types at crate root
pub use example::Example;
pub use model::{CodeModel, ModelError, ModelFamily};
pub use operation::{Operation, OperationGroup, Parameter, ParameterTransformation, ReturnType};
pub use types::{CompositeType, EnumType, ModelType, PrimitiveKind, Property};
