use thiserror::Error;

/// Failures talking to the preference storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Failures loading the runtime site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site configuration: {0}")]
    Malformed(String),

    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}
