//! # GraphQL Test Utilities
//!
//! Shared fixtures for the schema, usage and CLI tests.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::doc_markdown)]
//!
//! ## Quick Start
//!
//! ```
//! use graphql_test_utils::fixtures::{STOREFRONT_INTROSPECTION, STOREFRONT_SDL};
//!
//! assert!(STOREFRONT_SDL.contains("type Query"));
//! assert!(STOREFRONT_INTROSPECTION.contains("\"__schema\""));
//! ```
//!
//! ## Modules
//!
//! - [`fixtures`] - Common schema and document fixtures
//! - [`assertions`] - Formatting helpers for readable snapshots

pub mod assertions;
pub mod fixtures;

pub use assertions::format_usages;
