#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid request timeout: {0}")]
    InvalidTimeout(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
