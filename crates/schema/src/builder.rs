use crate::model::{RootOperationTypes, BUILTIN_SCALARS};
use crate::{MergeError, Result, SchemaFormat, SchemaModel, TypeEntry, TypeKind};
use graphql_apollo_ext::OperationType;
use std::collections::BTreeMap;

/// Fields contributed to an existing type by an `extend` definition.
#[derive(Debug)]
struct TypeExtension {
    name: String,
    kind: TypeKind,
    fields: Vec<(String, String)>,
}

/// Accumulates schema sources and merges them into one [`SchemaModel`].
///
/// Type extensions are applied in [`SchemaBuilder::build`], so an extension may come before its
/// base type, even from another source.
///
/// ```
/// use graphql_schema::SchemaBuilder;
///
/// let mut builder = SchemaBuilder::new();
/// builder.add_sdl("type Query { me: User }")?;
/// builder.add_sdl("type User { id: ID! } extend type Query { users: [User!]! }")?;
/// let schema = builder.build()?;
///
/// assert_eq!(schema.field_type("Query", "users"), Some("User"));
/// assert!(schema.lookup_type("String").is_some());
/// # Ok::<(), graphql_schema::SchemaError>(())
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: BTreeMap<String, TypeEntry>,
    extensions: Vec<TypeExtension>,
    roots: RootOperationTypes,
    sources: usize,
}

impl SchemaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source in the given format.
    pub fn add_source(&mut self, source: &str, format: SchemaFormat) -> Result<&mut Self> {
        match format {
            SchemaFormat::Sdl => self.add_sdl(source),
            SchemaFormat::Introspection => self.add_introspection(source),
        }
    }

    /// Add SDL source text.
    #[tracing::instrument(skip(self, source), fields(size = source.len()))]
    pub fn add_sdl(&mut self, source: &str) -> Result<&mut Self> {
        crate::sdl::load(self, source)?;
        self.sources += 1;
        Ok(self)
    }

    /// Add an introspection JSON payload.
    #[tracing::instrument(skip(self, json), fields(size = json.len()))]
    pub fn add_introspection(&mut self, json: &str) -> Result<&mut Self> {
        crate::introspection::load(self, json)?;
        self.sources += 1;
        Ok(self)
    }

    /// Apply extensions, merge in the built-in scalars and settle the root types.
    #[tracing::instrument(skip(self), fields(sources = self.sources, types = self.types.len()))]
    pub fn build(mut self) -> Result<SchemaModel> {
        for extension in std::mem::take(&mut self.extensions) {
            self.apply_extension(extension)?;
        }

        for name in BUILTIN_SCALARS {
            match self.types.get(name).map(TypeEntry::kind) {
                None => {
                    self.types
                        .insert(name.to_string(), TypeEntry::new(name, TypeKind::Scalar));
                }
                Some(TypeKind::Scalar) => {}
                Some(kind) => {
                    return Err(MergeError::BuiltinRedefined {
                        name: name.to_string(),
                        kind,
                    }
                    .into());
                }
            }
        }

        if self.roots.is_empty() {
            for operation in [
                OperationType::Query,
                OperationType::Mutation,
                OperationType::Subscription,
            ] {
                let name = operation.root_type_name();
                if self.types.contains_key(name) {
                    *self.roots.slot_mut(operation) = Some(name.to_string());
                }
            }
        }

        for operation in [
            OperationType::Query,
            OperationType::Mutation,
            OperationType::Subscription,
        ] {
            if let Some(name) = self.roots.get(operation) {
                if !self.types.contains_key(name) {
                    return Err(MergeError::UndefinedRoot {
                        operation,
                        name: name.to_string(),
                    }
                    .into());
                }
            }
        }

        tracing::debug!(types = self.types.len(), "Schema model built");
        Ok(SchemaModel {
            types: self.types,
            roots: self.roots,
        })
    }

    pub(crate) fn define_type(
        &mut self,
        name: String,
        kind: TypeKind,
        fields: Vec<(String, String)>,
    ) -> std::result::Result<(), MergeError> {
        if self.types.contains_key(&name) {
            return Err(MergeError::DuplicateType(name));
        }

        let mut entry = TypeEntry::new(name.clone(), kind);
        for (field_name, return_type) in fields {
            if !entry.insert_field(field_name.clone(), return_type) {
                return Err(MergeError::DuplicateField {
                    type_name: name,
                    field_name,
                });
            }
        }

        tracing::trace!(name = %name, kind = %kind, "Defined type");
        self.types.insert(name, entry);
        Ok(())
    }

    pub(crate) fn extend_type(&mut self, name: String, kind: TypeKind, fields: Vec<(String, String)>) {
        self.extensions.push(TypeExtension { name, kind, fields });
    }

    pub(crate) fn declare_root(
        &mut self,
        operation: OperationType,
        name: String,
    ) -> std::result::Result<(), MergeError> {
        let slot = self.roots.slot_mut(operation);
        if let Some(existing) = slot.as_deref() {
            if existing != name {
                return Err(MergeError::ConflictingRoot {
                    operation,
                    first: existing.to_string(),
                    second: name,
                });
            }
        }
        *slot = Some(name);
        Ok(())
    }

    fn apply_extension(&mut self, extension: TypeExtension) -> std::result::Result<(), MergeError> {
        let TypeExtension { name, kind, fields } = extension;
        let Some(entry) = self.types.get_mut(&name) else {
            return Err(MergeError::UndefinedExtension(name));
        };

        if entry.kind() != kind {
            return Err(MergeError::ExtensionKindMismatch {
                name,
                expected: kind,
                actual: entry.kind(),
            });
        }

        for (field_name, return_type) in fields {
            if !entry.insert_field(field_name.clone(), return_type) {
                return Err(MergeError::DuplicateField {
                    type_name: name,
                    field_name,
                });
            }
        }
        Ok(())
    }
}
