//! Where the schema and the documents to search come from.
//!
//! Flags win. Whatever the flags leave out is read from the GraphQL config file given with
//! `--config`, or found by walking up from the current directory.

use crate::exit_code::{ExitCode, Fatal, OrExit};
use anyhow::{anyhow, Context};
use graphql_config::{find_config, load_config};
use std::path::{Path, PathBuf};

/// Schema files and document patterns for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInputs {
    pub schema_paths: Vec<PathBuf>,
    pub patterns: Vec<String>,
}

impl SearchInputs {
    /// Fill in missing schema paths and patterns from the project config.
    #[tracing::instrument(skip(schema_paths, patterns, config_path, project_name), fields(project = ?project_name))]
    pub fn resolve(
        schema_paths: Vec<PathBuf>,
        patterns: Vec<String>,
        config_path: Option<&Path>,
        project_name: Option<&str>,
    ) -> Result<Self, Fatal> {
        if !schema_paths.is_empty() && !patterns.is_empty() {
            tracing::debug!("Using schema and documents from the command line");
            return Ok(Self {
                schema_paths,
                patterns,
            });
        }

        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                let current_dir = std::env::current_dir().or_exit(ExitCode::IoError)?;
                find_config(&current_dir)
                    .context("Failed to search for config")
                    .or_exit(ExitCode::UsageError)?
                    .ok_or_else(|| {
                        anyhow!("No GraphQL config file found; pass --schema-path and PATHS")
                    })
                    .or_exit(ExitCode::UsageError)?
            }
        };

        let config = load_config(&config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))
            .or_exit(ExitCode::UsageError)?;
        let (name, project) = config
            .select_project(project_name)
            .or_exit(ExitCode::UsageError)?;
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
        tracing::debug!(project = name, base = %base_dir.display(), "Selected project");

        let schema_paths = if schema_paths.is_empty() {
            project
                .schema_paths(base_dir)
                .into_iter()
                .map(PathBuf::from)
                .collect()
        } else {
            schema_paths
        };

        let patterns = if patterns.is_empty() {
            project.document_patterns(base_dir)
        } else {
            patterns
        };
        if patterns.is_empty() {
            return Err(anyhow!(
                "Project '{name}' has no documents; pass PATHS or set `documents` in the config"
            ))
            .or_exit(ExitCode::UsageError);
        }

        Ok(Self {
            schema_paths,
            patterns,
        })
    }
}
