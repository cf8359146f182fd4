//! Name extraction utilities for GraphQL CST nodes.
//!
//! Extension traits that turn `node.name().map(|n| n.text().to_string())` chains into a single
//! call, plus the response-key and type-condition accessors the usage walker needs.

use apollo_parser::cst;

/// Extension trait for extracting names from CST nodes.
pub trait NameExt {
    /// Get the name text as a String, if available.
    fn name_text(&self) -> Option<String>;
}

macro_rules! impl_name_ext {
    ($($node:ty),* $(,)?) => {
        $(
            impl NameExt for $node {
                fn name_text(&self) -> Option<String> {
                    self.name().map(|n| n.text().to_string())
                }
            }
        )*
    };
}

impl_name_ext!(
    cst::OperationDefinition,
    cst::Field,
    cst::NamedType,
    cst::ObjectTypeDefinition,
    cst::InterfaceTypeDefinition,
    cst::UnionTypeDefinition,
    cst::EnumTypeDefinition,
    cst::ScalarTypeDefinition,
    cst::InputObjectTypeDefinition,
    cst::FieldDefinition,
    cst::InputValueDefinition,
    cst::ObjectTypeExtension,
    cst::InterfaceTypeExtension,
    cst::UnionTypeExtension,
    cst::EnumTypeExtension,
    cst::ScalarTypeExtension,
    cst::InputObjectTypeExtension,
);

impl NameExt for cst::FragmentDefinition {
    fn name_text(&self) -> Option<String> {
        self.fragment_name()
            .and_then(|n| n.name())
            .map(|n| n.text().to_string())
    }
}

impl NameExt for cst::FragmentSpread {
    fn name_text(&self) -> Option<String> {
        self.fragment_name()
            .and_then(|n| n.name())
            .map(|n| n.text().to_string())
    }
}

/// Access to the `on Type` condition of fragments.
pub trait TypeConditionExt {
    /// Name of the type in the fragment's type condition, if one is written.
    fn type_condition_name(&self) -> Option<String>;
}

impl TypeConditionExt for cst::FragmentDefinition {
    fn type_condition_name(&self) -> Option<String> {
        self.type_condition()
            .and_then(|tc| tc.named_type())
            .and_then(|named| named.name_text())
    }
}

impl TypeConditionExt for cst::InlineFragment {
    fn type_condition_name(&self) -> Option<String> {
        self.type_condition()
            .and_then(|tc| tc.named_type())
            .and_then(|named| named.name_text())
    }
}

/// Field-specific accessors.
pub trait FieldExt {
    /// The key under which the field appears in a response: the alias if present,
    /// otherwise the field name.
    fn response_key(&self) -> Option<String>;
}

impl FieldExt for cst::Field {
    fn response_key(&self) -> Option<String> {
        self.alias()
            .and_then(|alias| alias.name())
            .map(|n| n.text().to_string())
            .or_else(|| self.name_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentExt;
    use apollo_parser::Parser;

    fn first_field(source: &str) -> cst::Field {
        let tree = Parser::new(source).parse();
        let op = tree.operations().next().unwrap();
        op.selection_set()
            .unwrap()
            .selections()
            .find_map(|selection| match selection {
                cst::Selection::Field(field) => Some(field),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_operation_name() {
        let tree = Parser::new("query GetUser { user { id } }").parse();
        let op = tree.operations().next().unwrap();
        assert_eq!(op.name_text(), Some("GetUser".to_string()));
    }

    #[test]
    fn test_anonymous_operation_has_no_name() {
        let tree = Parser::new("{ user { id } }").parse();
        let op = tree.operations().next().unwrap();
        assert_eq!(op.name_text(), None);
    }

    #[test]
    fn test_fragment_names() {
        let tree = Parser::new("fragment UserFields on User { name }").parse();
        let frag = tree.fragments().next().unwrap();
        assert_eq!(frag.name_text(), Some("UserFields".to_string()));
        assert_eq!(frag.type_condition_name(), Some("User".to_string()));
    }

    #[test]
    fn test_response_key_prefers_alias() {
        let field = first_field("query { me: viewer { id } }");
        assert_eq!(field.name_text(), Some("viewer".to_string()));
        assert_eq!(field.response_key(), Some("me".to_string()));
    }

    #[test]
    fn test_response_key_without_alias() {
        let field = first_field("query { viewer { id } }");
        assert_eq!(field.response_key(), Some("viewer".to_string()));
    }

    #[test]
    fn test_inline_fragment_without_condition() {
        let tree = Parser::new("query { ... @include(if: true) { id } ... on User { name } }")
            .parse();
        let op = tree.operations().next().unwrap();
        let conditions: Vec<_> = op
            .selection_set()
            .unwrap()
            .selections()
            .filter_map(|selection| match selection {
                cst::Selection::InlineFragment(inline) => Some(inline.type_condition_name()),
                _ => None,
            })
            .collect();
        assert_eq!(conditions, vec![None, Some("User".to_string())]);
    }
}
