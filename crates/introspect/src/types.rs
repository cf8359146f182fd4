//! Type definitions for GraphQL introspection responses.
//!
//! These types mirror the structure of GraphQL introspection query responses
//! and can be deserialized from JSON using serde. Only `kind`, `name`, `fields`,
//! `inputFields` and field `type` references are decoded; descriptions, arguments,
//! interfaces and the rest are ignored so that exports from different tools decode.

use serde::Deserialize;

/// Complete GraphQL schema information from introspection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub query_type: Option<IntrospectionTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<IntrospectionTypeRef>,
    #[serde(default)]
    pub subscription_type: Option<IntrospectionTypeRef>,
    pub types: Vec<IntrospectionType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionTypeRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum IntrospectionType {
    #[serde(rename = "SCALAR")]
    Scalar(IntrospectionNamedType),
    #[serde(rename = "OBJECT")]
    Object(IntrospectionObjectType),
    #[serde(rename = "INTERFACE")]
    Interface(IntrospectionObjectType),
    #[serde(rename = "UNION")]
    Union(IntrospectionNamedType),
    #[serde(rename = "ENUM")]
    Enum(IntrospectionNamedType),
    #[serde(rename = "INPUT_OBJECT")]
    InputObject(IntrospectionInputObjectType),
}

impl IntrospectionType {
    /// The type's name, whatever its kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(ty) | Self::Enum(ty) | Self::Union(ty) => &ty.name,
            Self::Object(ty) | Self::Interface(ty) => &ty.name,
            Self::InputObject(ty) => &ty.name,
        }
    }

    /// Whether this is one of the `__`-prefixed types every introspection result carries.
    #[must_use]
    pub fn is_introspection_type(&self) -> bool {
        self.name().starts_with("__")
    }
}

/// A scalar, enum or union: only the name matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionNamedType {
    pub name: String,
}

/// Object and interface types share the same shape.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionObjectType {
    pub name: String,
    pub fields: Vec<IntrospectionField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputObjectType {
    pub name: String,
    pub input_fields: Vec<IntrospectionInputValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRefFull,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionInputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRefFull,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRefFull {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRefFull>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl IntrospectionTypeRefFull {
    /// The innermost named type, with `LIST` and `NON_NULL` wrappers removed.
    ///
    /// Returns `None` when a wrapper has no `ofType` or the named type has no name,
    /// which only happens in a truncated dump.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphql_introspect::{IntrospectionTypeRefFull, TypeKind};
    /// let type_ref = IntrospectionTypeRefFull {
    ///     kind: TypeKind::NonNull,
    ///     name: None,
    ///     of_type: Some(Box::new(IntrospectionTypeRefFull {
    ///         kind: TypeKind::List,
    ///         name: None,
    ///         of_type: Some(Box::new(IntrospectionTypeRefFull {
    ///             kind: TypeKind::Object,
    ///             name: Some("User".to_string()),
    ///             of_type: None,
    ///         })),
    ///     })),
    /// };
    /// assert_eq!(type_ref.named_type(), Some("User"));
    /// ```
    #[must_use]
    pub fn named_type(&self) -> Option<&str> {
        match self.kind {
            TypeKind::NonNull | TypeKind::List => self.of_type.as_ref()?.named_type(),
            _ => self.name.as_deref(),
        }
    }
}
