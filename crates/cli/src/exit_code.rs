//! Exit codes for the usage search.
//!
//! Each failure class gets its own code so scripts and CI jobs can tell a bad invocation from a
//! broken schema or a document that could not be searched.

/// Exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every document was searched
    Success = 0,
    /// At least one document could not be read, parsed or walked
    DocumentsSkipped = 1,
    /// Bad arguments, config or target field
    UsageError = 2,
    /// The schema could not be parsed, decoded or merged
    SchemaError = 3,
    /// A schema file or search path could not be read
    IoError = 4,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::DocumentsSkipped => write!(f, "documents skipped"),
            Self::UsageError => write!(f, "usage error"),
            Self::SchemaError => write!(f, "schema load error"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

/// An error that ends the run before any result is printed.
#[derive(Debug)]
pub struct Fatal {
    pub code: ExitCode,
    pub error: anyhow::Error,
}

impl std::fmt::Display for Fatal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.error)
    }
}

/// Attach an exit code to a failed result.
pub trait OrExit<T> {
    fn or_exit(self, code: ExitCode) -> Result<T, Fatal>;
}

impl<T, E: Into<anyhow::Error>> OrExit<T> for Result<T, E> {
    fn or_exit(self, code: ExitCode) -> Result<T, Fatal> {
        self.map_err(|error| Fatal {
            code,
            error: error.into(),
        })
    }
}
