//! Schema model for field-usage search.
//!
//! A [`SchemaModel`] answers three questions: does a type exist, does it declare a field, and
//! what named type does that field return. It is built from GraphQL SDL or from an
//! introspection query result, and both encodings of the same schema yield equal models.
//!
//! ```
//! use graphql_schema::{build_schema_model, SchemaFormat};
//!
//! let schema = build_schema_model(
//!     "type Query { user(id: ID!): User } type User { id: ID! friends: [User!]! }",
//!     SchemaFormat::Sdl,
//! )?;
//!
//! assert_eq!(schema.field_type("User", "friends"), Some("User"));
//! assert!(!schema.has_field("User", "email"));
//! # Ok::<(), graphql_schema::SchemaError>(())
//! ```

mod builder;
mod error;
mod format;
mod introspection;
mod model;
mod sdl;

pub use builder::SchemaBuilder;
pub use error::{MergeError, Result, SchemaError};
pub use format::SchemaFormat;
pub use graphql_apollo_ext::OperationType;
pub use model::{
    FieldEntry, FieldSignature, InvalidFieldPath, RootOperationTypes, SchemaModel,
    TargetNotFoundError, TypeEntry, TypeKind, BUILTIN_SCALARS,
};

/// Build a model from a single source.
pub fn build_schema_model(source: &str, format: SchemaFormat) -> Result<SchemaModel> {
    let mut builder = SchemaBuilder::new();
    builder.add_source(source, format)?;
    builder.build()
}
