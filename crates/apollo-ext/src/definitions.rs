//! Definition filtering utilities for GraphQL documents.
//!
//! # Example
//!
//! ```
//! use graphql_apollo_ext::{DocumentExt, OperationExt, OperationType};
//! use apollo_parser::Parser;
//!
//! let source = r"
//!     query GetUser { user { id } }
//!     mutation UpdateUser { updateUser { id } }
//!     fragment UserFields on User { name }
//! ";
//! let tree = Parser::new(source).parse();
//!
//! let kinds: Vec<_> = tree.operations().map(|op| op.operation_kind()).collect();
//! assert_eq!(kinds, vec![OperationType::Query, OperationType::Mutation]);
//! assert_eq!(tree.fragments().count(), 1);
//! ```

use apollo_parser::cst;
use apollo_parser::SyntaxTree;

/// Extension trait for convenient access to executable definitions.
pub trait DocumentExt {
    /// Iterate over all operation definitions in the document.
    fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition>;

    /// Iterate over all fragment definitions in the document.
    fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition>;
}

impl DocumentExt for SyntaxTree {
    fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition> {
        self.document().definitions().filter_map(|def| {
            if let cst::Definition::OperationDefinition(op) = def {
                Some(op)
            } else {
                None
            }
        })
    }

    fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition> {
        self.document().definitions().filter_map(|def| {
            if let cst::Definition::FragmentDefinition(frag) = def {
                Some(frag)
            } else {
                None
            }
        })
    }
}

/// Operation type (query, mutation, subscription).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// Conventional root type name used when a schema declares none.
    #[must_use]
    pub const fn root_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }

    /// The keyword that introduces this kind of operation.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// Map a CST operation type token to an operation type.
    #[must_use]
    pub fn from_cst(op_type: &cst::OperationType) -> Self {
        if op_type.mutation_token().is_some() {
            Self::Mutation
        } else if op_type.subscription_token().is_some() {
            Self::Subscription
        } else {
            Self::Query
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Extension trait for operation definitions.
pub trait OperationExt {
    /// Get the operation type. The `{ ... }` shorthand is a query.
    fn operation_kind(&self) -> OperationType;
}

impl OperationExt for cst::OperationDefinition {
    fn operation_kind(&self) -> OperationType {
        self.operation_type()
            .map_or(OperationType::Query, |op_type| OperationType::from_cst(&op_type))
    }
}
