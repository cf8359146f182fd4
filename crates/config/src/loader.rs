use crate::{ConfigError, GraphQLConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
pub const CONFIG_FILES: &[&str] = &[
    ".graphqlrc.yml",
    ".graphqlrc.yaml",
    ".graphqlrc.json",
    ".graphqlrc",
    "graphql.config.yml",
    "graphql.config.yaml",
    "graphql.config.json",
];

/// Find the nearest config file, looking in `start_dir` and then in each of its ancestors.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    for (depth, dir) in start_dir.ancestors().enumerate() {
        let found = CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file());
        if let Some(path) = found {
            tracing::debug!(path = %path.display(), depth, "Found config file");
            return Ok(Some(path));
        }
    }

    tracing::debug!("No config file found");
    Ok(None)
}

/// Read and validate the config at `path`; the file name decides the format.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<GraphQLConfig> {
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::debug!(
        projects = config.project_count(),
        multi_project = config.is_multi_project(),
        "Config loaded"
    );
    Ok(config)
}

/// Parse and validate config text. `path` picks the format and labels errors.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<GraphQLConfig> {
    let config = match ConfigFormat::from_path(path)? {
        ConfigFormat::Yaml => ConfigFormat::Yaml.parse(contents, path)?,
        ConfigFormat::Json => ConfigFormat::Json.parse(contents, path)?,
        // Bare `.graphqlrc` may hold either
        ConfigFormat::Either => ConfigFormat::Yaml
            .parse(contents, path)
            .or_else(|_| ConfigFormat::Json.parse(contents, path))?,
    };

    validate_config(&config, path)?;
    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Json,
    Either,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str());
        let file_name = path.file_name().and_then(|name| name.to_str());
        tracing::trace!(?extension, ?file_name, "Detecting config format");

        match (extension, file_name) {
            (Some("yml" | "yaml"), _) => Ok(Self::Yaml),
            (Some("json"), _) => Ok(Self::Json),
            (None, Some(".graphqlrc")) => Ok(Self::Either),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse(self, contents: &str, path: &Path) -> Result<GraphQLConfig> {
        let parsed: std::result::Result<GraphQLConfig, String> = match self {
            Self::Json => {
                serde_json::from_str(contents).map_err(|e| format!("JSON parse error: {e}"))
            }
            Self::Yaml | Self::Either => {
                serde_saphyr::from_str(contents).map_err(|e| format!("YAML parse error: {e}"))
            }
        };
        parsed.map_err(|message| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        })
    }
}

/// Reject remote schemas and blank schema or document entries.
#[tracing::instrument(skip(config, path), fields(path = %path.display(), projects = config.project_count()))]
fn validate_config(config: &GraphQLConfig, path: &Path) -> Result<()> {
    for (project_name, project_config) in config.projects() {
        if let Some(url) = project_config.schema.remote_url() {
            return Err(ConfigError::RemoteSchema {
                project: project_name.to_string(),
                url: url.to_string(),
            });
        }

        let invalid = |message: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        };

        check_entries(project_name, "schema", "schema path", &project_config.schema.paths())
            .map_err(invalid)?;
        if let Some(documents) = &project_config.documents {
            check_entries(project_name, "documents", "document pattern", &documents.patterns())
                .map_err(invalid)?;
        }
    }

    Ok(())
}

fn check_entries(
    project: &str,
    section: &str,
    entry: &str,
    entries: &[&str],
) -> std::result::Result<(), String> {
    if entries.is_empty() {
        Err(format!("Project '{project}' has empty {section} configuration"))
    } else if entries.iter().any(|value| value.trim().is_empty()) {
        Err(format!("Project '{project}' has empty {entry}"))
    } else {
        Ok(())
    }
}
