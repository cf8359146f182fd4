//! GraphQL project configuration.
//!
//! Reads the `schema` and `documents` entries of a `.graphqlrc` (or `graphql.config.*`) file,
//! in YAML or JSON, for single-project and multi-project layouts.

mod config;
mod error;
mod loader;

pub use config::{DocumentsConfig, GraphQLConfig, ProjectConfig, SchemaConfig};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILES};
