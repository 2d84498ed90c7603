//! Type descriptors for operation parameters and model properties.
//!
//! This module provides the type vocabulary an API description is
//! normalized into:
//!
//! - [`ModelType`] - A reference to a primitive, enum, composite, sequence
//!   or dictionary type
//! - [`PrimitiveKind`] - The semantic kind of a scalar value
//! - [`CompositeType`] - An object type with ordered, named properties
//! - [`Property`] - A single property of a composite type
//! - [`EnumType`] - A closed set of string values
//!
//! Enum and composite types are referenced by class name and resolved
//! against the owning [`CodeModel`](crate::CodeModel), which keeps
//! recursive type graphs representable.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Semantic kind of a primitive value.
///
/// The kind decides how an example scalar is written as a source literal,
/// independent of the JSON type the example happens to use.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use exemplar_define::PrimitiveKind;
///
/// assert_eq!(PrimitiveKind::from_str("dateTime").unwrap(), PrimitiveKind::DateTime);
/// assert_eq!(PrimitiveKind::ByteArray.to_string(), "byteArray");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PrimitiveKind {
    String,
    Uuid,
    Int,
    Long,
    Double,
    Decimal,
    Boolean,
    Date,
    DateTime,
    DateTimeRfc1123,
    UnixTime,
    TimeSpan,
    ByteArray,
    Base64Url,
    Stream,
    /// Untyped JSON (`any` / `object`).
    Object,
}

impl PrimitiveKind {
    /// Returns `true` for kinds whose literal is a bare number.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Long | Self::Double | Self::Decimal)
    }
}

/// A type reference as it appears on a property or parameter.
///
/// ## Examples
///
/// ```
/// use exemplar_define::{ModelType, PrimitiveKind};
///
/// let tags = ModelType::sequence(ModelType::string());
/// assert_eq!(tags.class_name(), None);
///
/// let widget = ModelType::composite("Widget");
/// assert_eq!(widget.class_name(), Some("Widget"));
///
/// let json = serde_json::to_string(&ModelType::primitive(PrimitiveKind::Int)).unwrap();
/// assert_eq!(json, r#"{"type":"primitive","kind":"int"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ModelType {
    /// A scalar value.
    Primitive { kind: PrimitiveKind },
    /// A reference to an [`EnumType`] by class name.
    Enum { name: String },
    /// A reference to a [`CompositeType`] by class name.
    Composite { name: String },
    /// An array of `element`.
    Sequence { element: Box<ModelType> },
    /// A string-keyed map of `value`.
    Dictionary { value: Box<ModelType> },
}

impl ModelType {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive { kind }
    }

    pub fn string() -> Self {
        Self::primitive(PrimitiveKind::String)
    }

    pub fn int() -> Self {
        Self::primitive(PrimitiveKind::Int)
    }

    pub fn boolean() -> Self {
        Self::primitive(PrimitiveKind::Boolean)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum { name: name.into() }
    }

    pub fn composite(name: impl Into<String>) -> Self {
        Self::Composite { name: name.into() }
    }

    pub fn sequence(element: ModelType) -> Self {
        Self::Sequence {
            element: Box::new(element),
        }
    }

    pub fn dictionary(value: ModelType) -> Self {
        Self::Dictionary {
            value: Box::new(value),
        }
    }

    /// Class name of a referenced enum or composite type.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Enum { name } | Self::Composite { name } => Some(name),
            _ => None,
        }
    }

    /// Calls `f` for every enum/composite reference reachable without
    /// crossing into another composite's properties.
    pub fn for_each_reference<'a>(&'a self, f: &mut impl FnMut(&'a ModelType)) {
        match self {
            Self::Enum { .. } | Self::Composite { .. } => f(self),
            Self::Sequence { element } => element.for_each_reference(f),
            Self::Dictionary { value } => value.for_each_reference(f),
            Self::Primitive { .. } => {}
        }
    }
}

/// A property of a [`CompositeType`].
///
/// `name` is the identifier used in generated code; `serialized_name` is
/// the key used on the wire and in example payloads. Serialized names may
/// be dotted paths (`properties.name`) for client-flattened properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub serialized_name: String,
    pub model_type: ModelType,
    #[serde(default)]
    pub required: bool,
}

impl Property {
    /// Creates a required property whose wire name equals its logical name.
    ///
    /// ## Examples
    ///
    /// ```
    /// use exemplar_define::{ModelType, Property};
    ///
    /// let name = Property::required("name", ModelType::string());
    /// assert!(name.required);
    /// assert_eq!(name.serialized_name, "name");
    /// ```
    pub fn required(name: impl Into<String>, model_type: ModelType) -> Self {
        let name = name.into();
        Self {
            serialized_name: name.clone(),
            name,
            model_type,
            required: true,
        }
    }

    /// Creates an optional property whose wire name equals its logical name.
    pub fn optional(name: impl Into<String>, model_type: ModelType) -> Self {
        Self {
            required: false,
            ..Self::required(name, model_type)
        }
    }

    /// Overrides the wire name.
    pub fn with_serialized_name(mut self, serialized_name: impl Into<String>) -> Self {
        self.serialized_name = serialized_name.into();
        self
    }
}

/// An object type with a fixed, ordered set of properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeType {
    pub class_name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl CompositeType {
    pub fn new(class_name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            class_name: class_name.into(),
            properties,
        }
    }

    /// Class name without any namespace qualifier (`Models.SubResource` -> `SubResource`).
    pub fn short_name(&self) -> &str {
        self.class_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.class_name)
    }
}

/// A closed set of string values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub class_name: String,
    #[serde(default)]
    pub values: Vec<String>,
    /// Values outside `values` are tolerated on the wire.
    #[serde(default)]
    pub model_as_string: bool,
}

impl EnumType {
    pub fn new(class_name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            class_name: class_name.into(),
            values,
            model_as_string: false,
        }
    }
}
