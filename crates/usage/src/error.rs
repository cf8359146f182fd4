use graphql_apollo_ext::{format_parse_errors, ParseError};
use thiserror::Error;

/// A document that is not valid GraphQL. The document is skipped; other documents still run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse document: {}", format_parse_errors(.errors))]
pub struct OperationParseError {
    pub errors: Vec<ParseError>,
}

/// A parsed document whose fragments cannot be expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationStructureError {
    #[error("fragment cycle detected: {}", .chain.join(" -> "))]
    FragmentCycle {
        /// Fragment names from the first repeated fragment back to itself
        chain: Vec<String>,
    },

    #[error("fragment `{0}` is not defined")]
    UndefinedFragment(String),

    #[error("fragment `{0}` is defined more than once")]
    DuplicateFragment(String),
}
