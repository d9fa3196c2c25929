use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read selectors file {path}: {source}")]
    SelectorsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse selectors file: {0}")]
    SelectorsFileParse(#[from] serde_yaml::Error),

    #[error("invalid selector config: {0}")]
    Validation(String),
}
