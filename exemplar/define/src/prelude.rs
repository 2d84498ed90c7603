//! Convenient re-exports for building and consuming code models.
//!
//! ## Examples
//!
//! ```
//! use exemplar_define::prelude::*;
//!
//! let model = CodeModel::new("WidgetClient", ModelFamily::TypeScript);
//! assert!(model.operation_groups.is_empty());
//! ```

pub use crate::example::Example;
pub use crate::model::{CodeModel, ModelError, ModelFamily};
pub use crate::operation::{
    Operation, OperationGroup, Parameter, ParameterTransformation, ReturnType,
};
pub use crate::types::{CompositeType, EnumType, ModelType, PrimitiveKind, Property};
