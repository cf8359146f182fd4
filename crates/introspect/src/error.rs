use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

/// Why an introspection payload could not be decoded.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    /// Not JSON, or JSON that does not fit the introspection shape
    #[error("Failed to parse introspection response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed JSON that is not a usable schema
    #[error("Invalid introspection response: {0}")]
    Invalid(String),
}
