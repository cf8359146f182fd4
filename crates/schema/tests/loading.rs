use graphql_schema::{
    build_schema_model, FieldSignature, MergeError, OperationType, SchemaBuilder, SchemaError,
    SchemaFormat, TargetNotFoundError, TypeKind, BUILTIN_SCALARS,
};
use graphql_test_utils::fixtures::{STOREFRONT_INTROSPECTION, STOREFRONT_SDL};

#[test]
fn sdl_and_introspection_produce_equal_models() {
    let from_sdl = build_schema_model(STOREFRONT_SDL, SchemaFormat::Sdl).unwrap();
    let from_json =
        build_schema_model(STOREFRONT_INTROSPECTION, SchemaFormat::Introspection).unwrap();

    assert_eq!(from_sdl, from_json);
    assert_eq!(from_sdl.type_count(), 16);
}

#[test]
fn storefront_model_contents() {
    let schema = build_schema_model(STOREFRONT_SDL, SchemaFormat::Sdl).unwrap();

    assert_eq!(schema.field_type("Query", "search"), Some("SearchResult"));
    assert_eq!(schema.field_type("Customer", "orders"), Some("Order"));
    assert_eq!(schema.field_type("Customer", "email"), Some("String"));
    assert_eq!(schema.field_type("OrderInput", "productIds"), Some("ID"));
    assert_eq!(
        schema.lookup_type("SearchResult").map(|t| t.kind()),
        Some(TypeKind::Union)
    );
    assert_eq!(
        schema.lookup_type("OrderStatus").map(|t| t.kind()),
        Some(TypeKind::Enum)
    );
    assert_eq!(schema.root_operation_type(OperationType::Mutation), Some("Mutation"));
    assert_eq!(schema.root_operation_types().subscription, None);
    assert!(schema.types().all(|t| !t.name().starts_with("__")));
}

#[test]
fn base_scalars_present_after_sdl_load() {
    let schema = build_schema_model("type Query { ok: Boolean }", SchemaFormat::Sdl).unwrap();
    for name in BUILTIN_SCALARS {
        assert_eq!(
            schema.lookup_type(name).map(|t| t.kind()),
            Some(TypeKind::Scalar),
            "{name} should be present"
        );
    }
}

#[test]
fn duplicate_type_is_merge_error() {
    let err = build_schema_model(
        "type Query { a: Int } type Thing { a: Int } enum Thing { A }",
        SchemaFormat::Sdl,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Merge(MergeError::DuplicateType(ref name)) if name == "Thing"
    ));
}

#[test]
fn custom_root_names_are_honored() {
    let schema = build_schema_model(
        r"
        schema { query: Root subscription: Events }
        type Root { ping: Boolean }
        type Events { tick: Int }
        ",
        SchemaFormat::Sdl,
    )
    .unwrap();

    assert_eq!(schema.root_operation_type(OperationType::Query), Some("Root"));
    assert_eq!(schema.root_operation_type(OperationType::Subscription), Some("Events"));
    assert_eq!(schema.root_operation_type(OperationType::Mutation), None);
}

#[test]
fn conventional_roots_only_when_types_exist() {
    let schema = build_schema_model(
        "type Query { a: Int } type Subscription { b: Int }",
        SchemaFormat::Sdl,
    )
    .unwrap();

    let roots = schema.root_operation_types();
    assert_eq!(roots.query.as_deref(), Some("Query"));
    assert_eq!(roots.mutation, None);
    assert_eq!(roots.subscription.as_deref(), Some("Subscription"));
}

#[test]
fn duplicate_root_operation_is_merge_error() {
    let err = build_schema_model(
        r"
        schema { query: A }
        extend schema { query: B }
        type A { a: Int }
        type B { b: Int }
        ",
        SchemaFormat::Sdl,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Merge(MergeError::ConflictingRoot { operation: OperationType::Query, .. })
    ));
}

#[test]
fn extension_across_sources() {
    let mut builder = SchemaBuilder::new();
    builder
        .add_source(STOREFRONT_INTROSPECTION, SchemaFormat::Introspection)
        .unwrap()
        .add_source("extend type Product { sku: String }", SchemaFormat::Sdl)
        .unwrap();
    let schema = builder.build().unwrap();

    assert_eq!(schema.field_type("Product", "sku"), Some("String"));
    assert!(schema.has_field("Product", "reviews"));
}

#[test]
fn redefinition_across_sources_is_merge_error() {
    let mut builder = SchemaBuilder::new();
    builder.add_sdl(STOREFRONT_SDL).unwrap();
    let err = builder.add_introspection(STOREFRONT_INTROSPECTION).unwrap_err();
    assert!(matches!(err, SchemaError::Merge(MergeError::DuplicateType(_))));
}

#[test]
fn parse_error_reports_offsets() {
    let err = build_schema_model("type Query { a: }", SchemaFormat::Sdl).unwrap_err();
    let SchemaError::Parse { errors } = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert!(!errors.is_empty());
    assert!(err.to_string().contains("(at offset"));
}

#[test]
fn decode_error_for_missing_keys() {
    // OBJECT types must carry `fields`
    let err = build_schema_model(
        r#"{ "__schema": { "types": [ { "kind": "OBJECT", "name": "Query" } ] } }"#,
        SchemaFormat::Introspection,
    )
    .unwrap_err();
    assert!(matches!(err, SchemaError::Decode(_)));
    assert!(err.to_string().starts_with("Failed to decode introspection schema:"));
}

#[test]
fn target_checks_against_loaded_schema() {
    let schema = build_schema_model(STOREFRONT_SDL, SchemaFormat::Sdl).unwrap();

    let target = FieldSignature::parse("Customer.email").unwrap();
    assert_eq!(schema.check_target(&target), Ok(()));

    let missing_type = FieldSignature::parse("Shopper.email").unwrap();
    assert_eq!(
        schema.check_target(&missing_type),
        Err(TargetNotFoundError::TypeNotFound("Shopper".to_string()))
    );

    let missing_field = FieldSignature::parse("Customer.phone").unwrap();
    assert!(matches!(
        schema.check_target(&missing_field),
        Err(TargetNotFoundError::FieldNotFound { .. })
    ));
}

#[test]
fn schema_model_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<graphql_schema::SchemaModel>();
}
