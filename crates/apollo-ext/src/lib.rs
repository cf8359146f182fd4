//! Extensions for `apollo-parser`: name extraction, definition iteration and type unwrapping.
//!
//! **Note**: This crate is specifically tied to `apollo-parser`'s CST types. Both the schema
//! loader and the usage walker read CST nodes through these helpers instead of repeating the
//! `Option` chains the raw CST requires.
//!
//! # Example
//!
//! ```
//! use graphql_apollo_ext::{DocumentExt, NameExt, TypeConditionExt};
//!
//! let source = "query GetUser { user { ...UserFields } } fragment UserFields on User { name }";
//! let tree = apollo_parser::Parser::new(source).parse();
//!
//! let ops: Vec<_> = tree.operations().filter_map(|op| op.name_text()).collect();
//! assert_eq!(ops, vec!["GetUser"]);
//!
//! let fragment = tree.fragments().next().unwrap();
//! assert_eq!(fragment.type_condition_name().as_deref(), Some("User"));
//! ```

mod definitions;
mod errors;
mod names;
mod types;

pub use definitions::*;
pub use errors::*;
pub use names::*;
pub use types::*;
