use thiserror::Error;

/// Unified error type for channel-bump operations
#[derive(Error, Debug)]
pub enum ChannelBumpError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Version overflow: {0}")]
    VersionOverflow(String),

    #[error("External update failed: {0}")]
    ExternalUpdateFailure(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in channel-bump
pub type Result<T> = std::result::Result<T, ChannelBumpError>;

impl ChannelBumpError {
    /// Create an invalid version format error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        ChannelBumpError::InvalidVersionFormat(msg.into())
    }

    /// Create a version overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        ChannelBumpError::VersionOverflow(msg.into())
    }

    /// Create an external update failure with context
    pub fn update(msg: impl Into<String>) -> Self {
        ChannelBumpError::ExternalUpdateFailure(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ChannelBumpError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChannelBumpError::Config(msg.into())
    }
}
