use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    // Caller supplied something we refuse to work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation cancelled by user")]
    UserAborted,

    // Standard library errors with automatic conversion
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ScaffoldError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error. Declining the overwrite prompt is a
    /// clean termination, everything else is fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UserAborted => 0,
            _ => 1,
        }
    }

    pub fn is_user_aborted(&self) -> bool {
        matches!(self, ScaffoldError::UserAborted)
    }
}

impl From<config::ConfigError> for ScaffoldError {
    fn from(err: config::ConfigError) -> Self {
        ScaffoldError::Configuration(err.to_string())
    }
}
