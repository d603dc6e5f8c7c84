use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("environment variable {key} has an invalid value '{value}': {reason}")]
    EnvError {
        key: String,
        value: String,
        reason: String,
    },
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}
