//! Syntax diagnostics reported by `apollo-parser`.

use apollo_parser::SyntaxTree;

/// A parse error with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Byte offset where the error occurred
    pub offset: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at offset {})", self.message, self.offset)
    }
}

/// Collect the syntax errors of a parsed tree, in source order.
#[must_use]
pub fn parse_errors(tree: &SyntaxTree) -> Vec<ParseError> {
    tree.errors()
        .map(|error| ParseError {
            message: error.message().to_string(),
            offset: error.index(),
        })
        .collect()
}

/// Join parse errors into one line each, for error messages.
#[must_use]
pub fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
