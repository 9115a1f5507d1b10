use thiserror::Error;

#[derive(Debug, Error)]
pub enum MuError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open result sink '{file}': {source}")]
    SinkOpen {
        source: std::io::Error,
        file: String,
    },

    #[error("Failed to parse manifest file '{file}': {source}")]
    ManifestParse {
        source: toml::de::Error,
        file: String,
    },

    #[error("Invalid worker configuration: {reason}")]
    InvalidWorkerCount { reason: String },
}

pub type MuResult<T> = Result<T, MuError>;
