//! Introspection JSON → schema model.

use crate::{Result, SchemaBuilder, TypeKind};
use graphql_apollo_ext::OperationType;
use graphql_introspect::{
    parse_introspection, IntrospectionError, IntrospectionField, IntrospectionInputValue,
    IntrospectionType, IntrospectionTypeRefFull,
};

pub(crate) fn load(builder: &mut SchemaBuilder, json: &str) -> Result<()> {
    let schema = parse_introspection(json)?;

    for (operation, root) in [
        (OperationType::Query, &schema.query_type),
        (OperationType::Mutation, &schema.mutation_type),
        (OperationType::Subscription, &schema.subscription_type),
    ] {
        if let Some(root) = root {
            builder.declare_root(operation, root.name.clone())?;
        }
    }

    let mut skipped = 0usize;
    for ty in &schema.types {
        if ty.is_introspection_type() {
            skipped += 1;
            continue;
        }

        match ty {
            IntrospectionType::Object(obj) => {
                let fields = output_fields(&obj.name, &obj.fields)?;
                builder.define_type(obj.name.clone(), TypeKind::Object, fields)?;
            }
            IntrospectionType::Interface(iface) => {
                let fields = output_fields(&iface.name, &iface.fields)?;
                builder.define_type(iface.name.clone(), TypeKind::Interface, fields)?;
            }
            IntrospectionType::InputObject(input) => {
                let fields = input_fields(&input.name, &input.input_fields)?;
                builder.define_type(input.name.clone(), TypeKind::InputObject, fields)?;
            }
            IntrospectionType::Union(union) => {
                builder.define_type(union.name.clone(), TypeKind::Union, Vec::new())?;
            }
            IntrospectionType::Enum(enum_type) => {
                builder.define_type(enum_type.name.clone(), TypeKind::Enum, Vec::new())?;
            }
            IntrospectionType::Scalar(scalar) => {
                builder.define_type(scalar.name.clone(), TypeKind::Scalar, Vec::new())?;
            }
        }
    }

    tracing::debug!(
        types = schema.types.len(),
        skipped,
        "Loaded introspection types"
    );
    Ok(())
}

fn output_fields(type_name: &str, fields: &[IntrospectionField]) -> Result<Vec<(String, String)>> {
    fields
        .iter()
        .map(|field| {
            named_type(type_name, &field.name, &field.type_ref).map(|ty| (field.name.clone(), ty))
        })
        .collect()
}

fn input_fields(
    type_name: &str,
    fields: &[IntrospectionInputValue],
) -> Result<Vec<(String, String)>> {
    fields
        .iter()
        .map(|field| {
            named_type(type_name, &field.name, &field.type_ref).map(|ty| (field.name.clone(), ty))
        })
        .collect()
}

fn named_type(
    type_name: &str,
    field_name: &str,
    type_ref: &IntrospectionTypeRefFull,
) -> Result<String> {
    let Some(name) = type_ref.named_type() else {
        return Err(IntrospectionError::Invalid(format!(
            "field `{field_name}` on type `{type_name}` has no named type"
        ))
        .into());
    };
    Ok(name.to_string())
}
