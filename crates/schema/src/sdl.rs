//! SDL → schema model.

use crate::{MergeError, Result, SchemaBuilder, SchemaError, TypeKind};
use apollo_parser::cst;
use graphql_apollo_ext::{parse_errors, NameExt, OperationType, TypeExt};

pub(crate) fn load(builder: &mut SchemaBuilder, source: &str) -> Result<()> {
    let tree = apollo_parser::Parser::new(source).parse();
    let errors = parse_errors(&tree);
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "SDL has syntax errors");
        return Err(SchemaError::Parse { errors });
    }

    for definition in tree.document().definitions() {
        match definition {
            cst::Definition::ObjectTypeDefinition(obj) => {
                if let Some(name) = obj.name_text() {
                    let fields = field_definitions(obj.fields_definition());
                    builder.define_type(name, TypeKind::Object, fields)?;
                }
            }
            cst::Definition::InterfaceTypeDefinition(iface) => {
                if let Some(name) = iface.name_text() {
                    let fields = field_definitions(iface.fields_definition());
                    builder.define_type(name, TypeKind::Interface, fields)?;
                }
            }
            cst::Definition::InputObjectTypeDefinition(input) => {
                if let Some(name) = input.name_text() {
                    let fields = input_field_definitions(input.input_fields_definition());
                    builder.define_type(name, TypeKind::InputObject, fields)?;
                }
            }
            cst::Definition::UnionTypeDefinition(union) => {
                if let Some(name) = union.name_text() {
                    builder.define_type(name, TypeKind::Union, Vec::new())?;
                }
            }
            cst::Definition::EnumTypeDefinition(enum_def) => {
                if let Some(name) = enum_def.name_text() {
                    builder.define_type(name, TypeKind::Enum, Vec::new())?;
                }
            }
            cst::Definition::ScalarTypeDefinition(scalar) => {
                if let Some(name) = scalar.name_text() {
                    builder.define_type(name, TypeKind::Scalar, Vec::new())?;
                }
            }
            cst::Definition::SchemaDefinition(schema) => {
                declare_roots(builder, schema.root_operation_type_definitions())?;
            }
            cst::Definition::SchemaExtension(ext) => {
                declare_roots(builder, ext.root_operation_type_definitions())?;
            }
            cst::Definition::ObjectTypeExtension(ext) => {
                if let Some(name) = ext.name_text() {
                    let fields = field_definitions(ext.fields_definition());
                    builder.extend_type(name, TypeKind::Object, fields);
                }
            }
            cst::Definition::InterfaceTypeExtension(ext) => {
                if let Some(name) = ext.name_text() {
                    let fields = field_definitions(ext.fields_definition());
                    builder.extend_type(name, TypeKind::Interface, fields);
                }
            }
            cst::Definition::InputObjectTypeExtension(ext) => {
                if let Some(name) = ext.name_text() {
                    let fields = input_field_definitions(ext.input_fields_definition());
                    builder.extend_type(name, TypeKind::InputObject, fields);
                }
            }
            cst::Definition::UnionTypeExtension(ext) => {
                if let Some(name) = ext.name_text() {
                    builder.extend_type(name, TypeKind::Union, Vec::new());
                }
            }
            cst::Definition::EnumTypeExtension(ext) => {
                if let Some(name) = ext.name_text() {
                    builder.extend_type(name, TypeKind::Enum, Vec::new());
                }
            }
            cst::Definition::ScalarTypeExtension(ext) => {
                if let Some(name) = ext.name_text() {
                    builder.extend_type(name, TypeKind::Scalar, Vec::new());
                }
            }
            cst::Definition::DirectiveDefinition(_)
            | cst::Definition::OperationDefinition(_)
            | cst::Definition::FragmentDefinition(_) => {
                tracing::trace!("Skipping definition without type information");
            }
        }
    }

    Ok(())
}

/// `(name, named return type)` for each field of an object or interface.
fn field_definitions(fields: Option<cst::FieldsDefinition>) -> Vec<(String, String)> {
    fields
        .into_iter()
        .flat_map(|fields| fields.field_definitions())
        .filter_map(|field| Some((field.name_text()?, field.ty()?.named_type_name()?)))
        .collect()
}

fn input_field_definitions(fields: Option<cst::InputFieldsDefinition>) -> Vec<(String, String)> {
    fields
        .into_iter()
        .flat_map(|fields| fields.input_value_definitions())
        .filter_map(|field| Some((field.name_text()?, field.ty()?.named_type_name()?)))
        .collect()
}

fn declare_roots(
    builder: &mut SchemaBuilder,
    definitions: impl Iterator<Item = cst::RootOperationTypeDefinition>,
) -> std::result::Result<(), MergeError> {
    for definition in definitions {
        let (Some(op_type), Some(name)) = (
            definition.operation_type(),
            definition.named_type().and_then(|named| named.name_text()),
        ) else {
            continue;
        };
        builder.declare_root(OperationType::from_cst(&op_type), name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{SchemaBuilder, SchemaError, TypeKind};
    use graphql_apollo_ext::OperationType;

    fn build(sdl: &str) -> Result<crate::SchemaModel, SchemaError> {
        let mut builder = SchemaBuilder::new();
        builder.add_sdl(sdl)?;
        builder.build()
    }

    #[test]
    fn test_object_interface_and_input_fields() {
        let schema = build(
            r"
            interface Node { id: ID! }
            type User implements Node { id: ID! name: String posts: [Post!]! }
            type Post implements Node { id: ID! author: User }
            input UserFilter { ids: [ID!] name: String }
            ",
        )
        .unwrap();

        let user = schema.lookup_type("User").unwrap();
        assert_eq!(user.kind(), TypeKind::Object);
        assert_eq!(user.field_names().collect::<Vec<_>>(), vec!["id", "name", "posts"]);
        assert_eq!(schema.field_type("User", "posts"), Some("Post"));
        assert_eq!(schema.lookup_type("Node").unwrap().kind(), TypeKind::Interface);
        assert_eq!(schema.field_type("UserFilter", "ids"), Some("ID"));
        assert_eq!(
            schema.lookup_type("UserFilter").unwrap().kind(),
            TypeKind::InputObject
        );
    }

    #[test]
    fn test_types_without_fields() {
        let schema = build(
            r"
            union SearchResult = User | Post
            enum Role { ADMIN MEMBER }
            scalar DateTime
            type User { id: ID! }
            type Post { id: ID! }
            ",
        )
        .unwrap();

        for (name, kind) in [
            ("SearchResult", TypeKind::Union),
            ("Role", TypeKind::Enum),
            ("DateTime", TypeKind::Scalar),
        ] {
            let entry = schema.lookup_type(name).unwrap();
            assert_eq!(entry.kind(), kind);
            assert_eq!(entry.field_names().count(), 0);
        }
    }

    #[test]
    fn test_explicit_builtin_scalar_is_accepted() {
        let schema = build("scalar String type Query { a: String }").unwrap();
        assert_eq!(schema.lookup_type("String").unwrap().kind(), TypeKind::Scalar);
    }

    #[test]
    fn test_syntax_error() {
        let err = build("type Query { a: String").unwrap_err();
        let SchemaError::Parse { errors } = &err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert!(!errors.is_empty());
        assert!(err.to_string().starts_with("Failed to parse schema:"));
    }

    #[test]
    fn test_schema_definition_roots() {
        let schema = build(
            r"
            schema { query: RootQuery mutation: RootMutation }
            type RootQuery { a: Int }
            type RootMutation { b: Int }
            type Query { unused: Int }
            ",
        )
        .unwrap();

        assert_eq!(schema.root_operation_type(OperationType::Query), Some("RootQuery"));
        assert_eq!(schema.root_operation_type(OperationType::Mutation), Some("RootMutation"));
        assert_eq!(schema.root_operation_types().subscription, None);
    }

    #[test]
    fn test_schema_extension_adds_root() {
        let schema = build(
            r"
            schema { query: Q }
            extend schema { subscription: S }
            type Q { a: Int }
            type S { tick: Int }
            ",
        )
        .unwrap();

        assert_eq!(schema.root_operation_type(OperationType::Subscription), Some("S"));
    }

    #[test]
    fn test_type_extensions() {
        let schema = build(
            r"
            type Query { me: User }
            type User { id: ID! }
            extend type User { email: String }
            interface Node { id: ID! }
            extend interface Node { createdAt: String }
            input Filter { a: Int }
            extend input Filter { b: [String] }
            ",
        )
        .unwrap();

        assert!(schema.has_field("User", "email"));
        assert!(schema.has_field("Node", "createdAt"));
        assert_eq!(schema.field_type("Filter", "b"), Some("String"));
    }

    #[test]
    fn test_extension_duplicate_field() {
        let err = build("type User { id: ID! } extend type User { id: ID }").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to merge schema: field `id` is defined more than once on type `User`"
        );
    }

    #[test]
    fn test_duplicate_type_across_sources() {
        let mut builder = SchemaBuilder::new();
        builder.add_sdl("type User { id: ID! }").unwrap();
        let err = builder.add_sdl("type User { name: String }").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to merge schema: type `User` is defined more than once"
        );
    }

    #[test]
    fn test_directive_definitions_are_ignored() {
        let schema = build(
            r#"
            directive @auth(requires: String = "USER") on FIELD_DEFINITION
            type Query { secret: String @auth }
            "#,
        )
        .unwrap();
        assert!(schema.has_field("Query", "secret"));
    }
}
