//! GraphQL introspection response decoding.
//!
//! This crate decodes the JSON a server returns for the standard introspection query (or a
//! schema dump exported by other tooling) into typed structures.
//!
//! # Example
//!
//! ```
//! use graphql_introspect::{parse_introspection, IntrospectionType};
//!
//! let json = r#"{
//!   "data": {
//!     "__schema": {
//!       "queryType": { "name": "Query" },
//!       "types": [
//!         {
//!           "kind": "OBJECT",
//!           "name": "Query",
//!           "fields": [
//!             { "name": "hello", "type": { "kind": "SCALAR", "name": "String" } }
//!           ]
//!         }
//!       ]
//!     }
//!   }
//! }"#;
//!
//! let schema = parse_introspection(json)?;
//! assert_eq!(schema.types.len(), 1);
//! assert!(matches!(schema.types[0], IntrospectionType::Object(_)));
//! # Ok::<(), graphql_introspect::IntrospectionError>(())
//! ```

mod error;
mod types;

pub use error::{IntrospectionError, Result};
pub use types::*;

use serde::Deserialize;

/// Decodes an introspection payload.
///
/// Accepts both the full response shape (`{"data": {"__schema": ...}}`) and the bare
/// `{"__schema": ...}` object that several tools export.
#[tracing::instrument(skip(json), fields(size = json.len()))]
pub fn parse_introspection(json: &str) -> Result<IntrospectionSchema> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let schema = value
        .get("data")
        .and_then(|data| data.get("__schema"))
        .or_else(|| value.get("__schema"));

    let Some(schema) = schema else {
        if let Some(errors) = value.get("errors") {
            return Err(IntrospectionError::Invalid(format!(
                "response contains errors: {errors}"
            )));
        }
        return Err(IntrospectionError::Invalid(
            "missing `__schema` (expected `data.__schema` or a top-level `__schema`)".to_string(),
        ));
    };

    let schema = IntrospectionSchema::deserialize(schema)?;
    tracing::debug!(types = schema.types.len(), "Decoded introspection schema");
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = r#"{
      "__schema": {
        "queryType": { "name": "Root" },
        "mutationType": null,
        "subscriptionType": null,
        "types": [
          {
            "kind": "OBJECT",
            "name": "Root",
            "description": null,
            "fields": [
              {
                "name": "users",
                "args": [],
                "type": {
                  "kind": "NON_NULL",
                  "name": null,
                  "ofType": {
                    "kind": "LIST",
                    "name": null,
                    "ofType": { "kind": "OBJECT", "name": "User", "ofType": null }
                  }
                },
                "isDeprecated": false,
                "deprecationReason": null
              }
            ],
            "inputFields": null,
            "interfaces": [],
            "enumValues": null,
            "possibleTypes": null
          },
          {
            "kind": "SCALAR",
            "name": "String",
            "fields": null,
            "inputFields": null,
            "interfaces": null,
            "enumValues": null,
            "possibleTypes": null
          },
          {
            "kind": "ENUM",
            "name": "__TypeKind",
            "fields": null,
            "enumValues": [{ "name": "SCALAR", "isDeprecated": false }]
          }
        ]
      }
    }"#;

    #[test]
    fn test_parse_bare_schema() {
        let schema = parse_introspection(BARE).unwrap();
        assert_eq!(schema.query_type.as_ref().map(|t| t.name.as_str()), Some("Root"));
        assert!(schema.mutation_type.is_none());
        assert_eq!(schema.types.len(), 3);

        let IntrospectionType::Object(root) = &schema.types[0] else {
            panic!("expected OBJECT, got {:?}", schema.types[0]);
        };
        assert_eq!(root.fields[0].type_ref.named_type(), Some("User"));
        assert!(schema.types[2].is_introspection_type());
    }

    #[test]
    fn test_parse_wrapped_response() {
        let wrapped = format!(r#"{{ "data": {BARE} }}"#);
        let schema = parse_introspection(&wrapped).unwrap();
        assert_eq!(schema.types.len(), 3);
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_introspection("{ not json").unwrap_err();
        assert!(matches!(err, IntrospectionError::Parse(_)));
    }

    #[test]
    fn test_missing_schema_key() {
        let err = parse_introspection(r#"{ "data": {} }"#).unwrap_err();
        assert!(matches!(err, IntrospectionError::Invalid(_)));
    }

    #[test]
    fn test_error_response() {
        let err = parse_introspection(r#"{ "errors": [{ "message": "nope" }] }"#).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_object_without_fields_is_rejected() {
        let json = r#"{ "__schema": { "types": [ { "kind": "OBJECT", "name": "Query" } ] } }"#;
        let err = parse_introspection(json).unwrap_err();
        assert!(matches!(err, IntrospectionError::Parse(_)));
        assert!(err.to_string().contains("fields"));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{ "__schema": { "types": [ { "kind": "WIDGET", "name": "Query" } ] } }"#;
        assert!(parse_introspection(json).is_err());
    }

    #[test]
    fn test_unread_keys_are_ignored() {
        let json = r#"{ "__schema": { "types": [
            { "kind": "UNION", "name": "SearchResult", "description": "Hits",
              "possibleTypes": [{ "kind": "OBJECT", "name": "User" }] },
            { "kind": "INTERFACE", "name": "Node", "description": null,
              "interfaces": [], "possibleTypes": [{ "kind": "OBJECT", "name": "User" }],
              "fields": [
                { "name": "id", "isDeprecated": true, "deprecationReason": "old",
                  "type": { "kind": "SCALAR", "name": "ID" } }
              ] }
        ] } }"#;
        let schema = parse_introspection(json).unwrap();
        assert_eq!(schema.types[0].name(), "SearchResult");
        assert!(matches!(schema.types[0], IntrospectionType::Union(_)));
        let IntrospectionType::Interface(node) = &schema.types[1] else {
            panic!("expected INTERFACE");
        };
        assert_eq!(node.fields[0].type_ref.named_type(), Some("ID"));
    }

    #[test]
    fn test_input_object_fields() {
        let json = r#"{ "__schema": { "types": [
            { "kind": "INPUT_OBJECT", "name": "UserFilter", "inputFields": [
                { "name": "ids", "type": { "kind": "LIST", "ofType": { "kind": "SCALAR", "name": "ID" } } }
            ] }
        ] } }"#;
        let schema = parse_introspection(json).unwrap();
        let IntrospectionType::InputObject(input) = &schema.types[0] else {
            panic!("expected INPUT_OBJECT");
        };
        assert_eq!(input.input_fields[0].type_ref.named_type(), Some("ID"));
    }
}
