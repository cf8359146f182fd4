//! Find where a schema field is selected.
//!
//! Given a [`SchemaModel`], a parsed [`OperationDocument`] and a `TypeName.fieldName` target,
//! [`locate_usages`] walks every operation, re-deriving the type each selection set is selected
//! on, and yields the dotted path to every selection of the target field.
//!
//! ```
//! use graphql_schema::{build_schema_model, FieldSignature, SchemaFormat};
//! use graphql_usage::{locate_usages, OperationDocument};
//!
//! let schema = build_schema_model(
//!     "type Query { a: Outer } type Outer { b: Enclosing } type Enclosing { targetField: Int }",
//!     SchemaFormat::Sdl,
//! )?;
//! let target = FieldSignature::parse("Enclosing.targetField")?;
//! let document = OperationDocument::parse("query Q { a { b { targetField } } }")?;
//!
//! let paths: Vec<_> = locate_usages(&schema, &document, &target).collect::<Result<_, _>>()?;
//! assert_eq!(paths, vec!["Q.a.b.targetField"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Path segments are the operation name (or its keyword when anonymous), then the response key
//! of each enclosing field and the name of each expanded fragment spread. Inline fragments add
//! no segment.

mod document;
mod error;
mod path;
mod walker;

pub use document::OperationDocument;
pub use error::{OperationParseError, OperationStructureError};
pub use path::UsagePath;
pub use walker::{UsageLocator, Usages};

use graphql_schema::{FieldSignature, SchemaModel};

/// Lazily locate `target` in the operations of `document`.
#[must_use]
pub fn locate_usages<'a>(
    schema: &'a SchemaModel,
    document: &OperationDocument,
    target: &'a FieldSignature,
) -> Usages<'a> {
    UsageLocator::new(schema, target).locate(document)
}

/// Parse `source` and collect every usage, discarding partial results on a structure error.
#[tracing::instrument(skip(locator, source), fields(field = %locator.target()))]
pub fn find_usages_in_source(
    locator: &UsageLocator<'_>,
    source: &str,
) -> Result<Vec<UsagePath>, FindUsagesError> {
    let document = OperationDocument::parse(source)?;
    let usages = locator.locate(&document).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = usages.len(), "Searched document");
    Ok(usages)
}

/// Why one document produced no results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FindUsagesError {
    #[error(transparent)]
    Parse(#[from] OperationParseError),

    #[error(transparent)]
    Structure(#[from] OperationStructureError),
}
