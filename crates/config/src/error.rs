use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config in {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Project '{project}' loads its schema from {url}; remote schemas are not supported")]
    RemoteSchema { project: String, url: String },

    #[error("Project '{name}' not found in config (available: {})", .available.join(", "))]
    ProjectNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Config defines several projects; choose one with --project (available: {})", .available.join(", "))]
    ProjectRequired { available: Vec<String> },
}
