use crate::OperationParseError;
use apollo_parser::{cst, SyntaxTree};
use graphql_apollo_ext::{parse_errors, DocumentExt};

/// A parsed operation document.
///
/// Only documents without syntax errors are constructed, so every operation and fragment in
/// the tree has the parts the walker reads.
pub struct OperationDocument {
    source: String,
    tree: SyntaxTree,
}

impl OperationDocument {
    /// Parse operation source text.
    pub fn parse(source: impl Into<String>) -> Result<Self, OperationParseError> {
        let source = source.into();
        let tree = apollo_parser::Parser::new(&source).parse();
        let errors = parse_errors(&tree);
        if !errors.is_empty() {
            return Err(OperationParseError { errors });
        }
        Ok(Self { source, tree })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Operation definitions in document order.
    pub fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition> + '_ {
        self.tree.operations()
    }

    /// Fragment definitions in document order.
    pub fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition> + '_ {
        self.tree.fragments()
    }
}

impl std::fmt::Debug for OperationDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationDocument")
            .field("len", &self.source.len())
            .field("operations", &self.operations().count())
            .field("fragments", &self.fragments().count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let doc = OperationDocument::parse(
            "query A { a } mutation B { b } fragment F on T { c }",
        )
        .unwrap();
        assert_eq!(doc.operations().count(), 2);
        assert_eq!(doc.fragments().count(), 1);
        assert!(doc.source().starts_with("query A"));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = OperationDocument::parse("query { user { id }").unwrap_err();
        assert!(!err.errors.is_empty());
        assert!(err.to_string().starts_with("Failed to parse document:"));
    }
}
