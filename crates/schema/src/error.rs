use crate::TypeKind;
use graphql_apollo_ext::{format_parse_errors, OperationType, ParseError};
use graphql_introspect::IntrospectionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Why a schema could not be loaded. Every variant is fatal for a run.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to parse schema: {}", format_parse_errors(.errors))]
    Parse { errors: Vec<ParseError> },

    #[error("Failed to decode introspection schema: {0}")]
    Decode(#[from] IntrospectionError),

    #[error("Failed to merge schema: {0}")]
    Merge(#[from] MergeError),
}

/// Inconsistencies found while combining definitions into one model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("type `{0}` is defined more than once")]
    DuplicateType(String),

    #[error("field `{field_name}` is defined more than once on type `{type_name}`")]
    DuplicateField {
        type_name: String,
        field_name: String,
    },

    #[error("cannot extend undefined type `{0}`")]
    UndefinedExtension(String),

    #[error("cannot extend {actual} `{name}` as {expected}")]
    ExtensionKindMismatch {
        name: String,
        expected: TypeKind,
        actual: TypeKind,
    },

    #[error("built-in scalar `{name}` is redefined as {kind}")]
    BuiltinRedefined { name: String, kind: TypeKind },

    #[error("root {operation} type `{name}` is not defined")]
    UndefinedRoot {
        operation: OperationType,
        name: String,
    },

    #[error("root {operation} type is declared as both `{first}` and `{second}`")]
    ConflictingRoot {
        operation: OperationType,
        first: String,
        second: String,
    },
}
