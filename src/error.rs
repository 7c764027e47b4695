use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FolioError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::InvalidCatalog(_) => "invalid_catalog",
            Self::NotFound(_) => "not_found",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Terminal(_) => "terminal",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
