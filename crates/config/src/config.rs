use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Top-level GraphQL configuration.
/// Either a single project or multiple named projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphQLConfig {
    /// Multi-project configuration
    Multi {
        projects: HashMap<String, ProjectConfig>,
    },
    /// Single project configuration
    Single(Box<ProjectConfig>),
}

impl GraphQLConfig {
    /// Get all projects as an iterator.
    /// For single project configs, yields a single item with name "default".
    #[must_use]
    pub fn projects(&self) -> Box<dyn Iterator<Item = (&str, &ProjectConfig)> + '_> {
        match self {
            Self::Single(config) => Box::new(std::iter::once(("default", config.as_ref()))),
            Self::Multi { projects } => Box::new(
                projects
                    .iter()
                    .map(|(name, config)| (name.as_str(), config)),
            ),
        }
    }

    /// Get a specific project by name.
    /// For single project configs, returns the project if name is "default".
    #[must_use]
    pub fn get_project(&self, name: &str) -> Option<&ProjectConfig> {
        match self {
            Self::Single(config) if name == "default" => Some(config),
            Self::Single(_) => None,
            Self::Multi { projects } => projects.get(name),
        }
    }

    /// Check if this is a multi-project configuration
    #[must_use]
    pub const fn is_multi_project(&self) -> bool {
        matches!(self, Self::Multi { .. })
    }

    /// Get the number of projects
    #[must_use]
    pub fn project_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi { projects } => projects.len(),
        }
    }

    /// Project names in sorted order
    #[must_use]
    pub fn project_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.projects().map(|(name, _)| name.to_string()).collect();
        names.sort();
        names
    }

    /// Pick the project to search.
    ///
    /// Without a name, a single-project config yields its only project; a multi-project config
    /// yields its `default` project or its only project, and otherwise asks for a name.
    pub fn select_project(&self, name: Option<&str>) -> Result<(&str, &ProjectConfig)> {
        if let Some(name) = name {
            return self
                .projects()
                .find(|(project, _)| *project == name)
                .ok_or_else(|| ConfigError::ProjectNotFound {
                    name: name.to_string(),
                    available: self.project_names(),
                });
        }

        match self {
            Self::Single(config) => Ok(("default", config.as_ref())),
            Self::Multi { projects } => {
                if let Some((project, config)) = projects.get_key_value("default") {
                    return Ok((project.as_str(), config));
                }
                let mut iter = projects.iter();
                match (iter.next(), iter.next()) {
                    (Some((project, config)), None) => Ok((project.as_str(), config)),
                    _ => Err(ConfigError::ProjectRequired {
                        available: self.project_names(),
                    }),
                }
            }
        }
    }
}

/// Configuration for a single GraphQL project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Schema source(s)
    pub schema: SchemaConfig,

    /// Document patterns (queries, mutations, fragments)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentsConfig>,
}

impl ProjectConfig {
    /// Schema paths resolved against `base`, usually the config file's directory.
    #[must_use]
    pub fn schema_paths(&self, base: &Path) -> Vec<String> {
        self.schema.paths().into_iter().map(|path| resolve(base, path)).collect()
    }

    /// Document glob patterns resolved against `base`.
    #[must_use]
    pub fn document_patterns(&self, base: &Path) -> Vec<String> {
        self.documents
            .as_ref()
            .map(|documents| {
                documents
                    .patterns()
                    .into_iter()
                    .map(|pattern| resolve(base, pattern))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn resolve(base: &Path, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() || base.as_os_str().is_empty() {
        pattern.to_string()
    } else {
        base.join(pattern).to_string_lossy().into_owned()
    }
}

/// Schema source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaConfig {
    /// Single file path
    Path(String),
    /// Multiple file paths
    Paths(Vec<String>),
    /// A remote endpoint, given as `{ url: ... }`
    Remote { url: String },
}

impl SchemaConfig {
    /// All schema paths. Remote configs have none.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::Path(path) => vec![path.as_str()],
            Self::Paths(paths) => paths.iter().map(String::as_str).collect(),
            Self::Remote { .. } => vec![],
        }
    }

    /// The first HTTP(S) location this config points at, if any.
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            Self::Remote { url } => Some(url),
            _ => self
                .paths()
                .into_iter()
                .find(|p| p.starts_with("http://") || p.starts_with("https://")),
        }
    }
}

/// Documents source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentsConfig {
    /// Single pattern
    Pattern(String),
    /// Multiple patterns
    Patterns(Vec<String>),
}

impl DocumentsConfig {
    /// Get all document patterns
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::Pattern(pattern) => vec![pattern.as_str()],
            Self::Patterns(patterns) => patterns.iter().map(String::as_str).collect(),
        }
    }
}
