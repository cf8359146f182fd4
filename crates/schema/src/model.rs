//! The normalized type/field registry.

use graphql_apollo_ext::OperationType;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// Names of the scalars every schema has, whether or not its source declares them.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum TypeKind {
    Object,
    Interface,
    Union,
    Enum,
    Scalar,
    InputObject,
}

impl TypeKind {
    /// Whether types of this kind declare fields.
    #[must_use]
    pub const fn has_fields(self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::InputObject)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Scalar => "scalar",
            Self::InputObject => "input",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldEntry {
    /// Named return type with list and non-null wrappers removed
    pub return_type: String,
}

/// One type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    name: String,
    kind: TypeKind,
    fields: BTreeMap<String, FieldEntry>,
}

impl TypeEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Add a field; returns `false` (leaving the entry unchanged) if the name is taken.
    pub(crate) fn insert_field(&mut self, name: String, return_type: String) -> bool {
        if self.fields.contains_key(&name) {
            return false;
        }
        self.fields.insert(name, FieldEntry { return_type });
        true
    }
}

/// Root operation type names declared by a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootOperationTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl RootOperationTypes {
    #[must_use]
    pub fn get(&self, operation: OperationType) -> Option<&str> {
        match operation {
            OperationType::Query => self.query.as_deref(),
            OperationType::Mutation => self.mutation.as_deref(),
            OperationType::Subscription => self.subscription.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, operation: OperationType) -> &mut Option<String> {
        match operation {
            OperationType::Query => &mut self.query,
            OperationType::Mutation => &mut self.mutation,
            OperationType::Subscription => &mut self.subscription,
        }
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.query.is_none() && self.mutation.is_none() && self.subscription.is_none()
    }
}

/// The normalized schema: every type by name, plus the root operation types.
///
/// Built once by [`crate::SchemaBuilder`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaModel {
    pub(crate) types: BTreeMap<String, TypeEntry>,
    pub(crate) roots: RootOperationTypes,
}

impl SchemaModel {
    #[must_use]
    pub fn lookup_type(&self, name: &str) -> Option<&TypeEntry> {
        self.types.get(name)
    }

    #[must_use]
    pub fn has_field(&self, type_name: &str, field_name: &str) -> bool {
        self.lookup_type(type_name)
            .is_some_and(|entry| entry.has_field(field_name))
    }

    /// The declared return type name of `type_name.field_name`.
    #[must_use]
    pub fn field_type(&self, type_name: &str, field_name: &str) -> Option<&str> {
        self.lookup_type(type_name)?
            .field(field_name)
            .map(|field| field.return_type.as_str())
    }

    /// Root type for an operation kind, or `None` when the schema has no such root.
    ///
    /// Conventional names are settled when the model is built, so this never guesses.
    #[must_use]
    pub fn root_operation_type(&self, operation: OperationType) -> Option<&str> {
        self.roots.get(operation)
    }

    #[must_use]
    pub const fn root_operation_types(&self) -> &RootOperationTypes {
        &self.roots
    }

    /// All types in name order.
    pub fn types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.values()
    }

    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Check that a search target names an existing type and field.
    pub fn check_target(&self, target: &FieldSignature) -> Result<(), TargetNotFoundError> {
        let entry = self
            .lookup_type(target.type_name())
            .ok_or_else(|| TargetNotFoundError::TypeNotFound(target.type_name().to_string()))?;

        if entry.has_field(target.field_name()) {
            Ok(())
        } else {
            Err(TargetNotFoundError::FieldNotFound {
                type_name: target.type_name().to_string(),
                field_name: target.field_name().to_string(),
            })
        }
    }
}

/// A `TypeName.fieldName` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSignature {
    type_name: String,
    field_name: String,
}

impl FieldSignature {
    #[must_use]
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
        }
    }

    /// Parse `TypeName.fieldName`.
    pub fn parse(path: &str) -> Result<Self, InvalidFieldPath> {
        let mut parts = path.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(type_name), Some(field_name), None)
                if !type_name.is_empty() && !field_name.is_empty() =>
            {
                Ok(Self::new(type_name, field_name))
            }
            _ => Err(InvalidFieldPath(path.to_string())),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    #[must_use]
    pub fn matches(&self, type_name: &str, field_name: &str) -> bool {
        self.type_name == type_name && self.field_name == field_name
    }
}

impl FromStr for FieldSignature {
    type Err = InvalidFieldPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FieldSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Field path must be in the form 'TypeName.fieldName', got `{0}`")]
pub struct InvalidFieldPath(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetNotFoundError {
    #[error("type `{0}` not found in schema")]
    TypeNotFound(String),

    #[error("field `{field_name}` not found in type `{type_name}`")]
    FieldNotFound {
        type_name: String,
        field_name: String,
    },
}
