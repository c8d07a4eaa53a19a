//! Client runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! transport. Reading process-wide environment variables during request
//! handling leads to inconsistent behaviour in multi-threaded runtimes and
//! test harnesses, so the parsers here are pure functions over the *values*
//! of environment variables; only the binaries call `std::env::var`.

use crate::error::{ConfigError, ConfigResult};
use std::time::Duration;

/// Default API base URL when `HMS_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default request timeout when `HMS_REQUEST_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a new `ClientConfig`.
    ///
    /// The base URL must be an absolute `http`/`https` URL. A trailing slash
    /// is stripped so endpoint paths can always be joined with a leading `/`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ConfigResult<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_owned(),
            timeout,
        })
    }

    /// The API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Resolve the API base URL from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_BASE_URL`].
pub fn base_url_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}

/// Parse the request timeout (in whole seconds) from an optional environment
/// value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_TIMEOUT`].
pub fn timeout_from_env_value(value: Option<String>) -> ConfigResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_TIMEOUT),
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::InvalidTimeout(raw)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let cfg = ClientConfig::new("http://localhost:8080/api/", DEFAULT_TIMEOUT)
            .expect("ClientConfig::new should succeed");
        assert_eq!(cfg.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_new_rejects_non_http_url() {
        let err = ClientConfig::new("ftp://localhost/api", DEFAULT_TIMEOUT)
            .expect_err("non-http scheme should fail");
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_base_url_from_env_value_defaults_when_unset() {
        assert_eq!(base_url_from_env_value(None), DEFAULT_BASE_URL);
        assert_eq!(base_url_from_env_value(Some("  ".into())), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_from_env_value_uses_override() {
        assert_eq!(
            base_url_from_env_value(Some("http://hospital.example:8000/api".into())),
            "http://hospital.example:8000/api"
        );
    }

    #[test]
    fn test_timeout_from_env_value_defaults_when_unset() {
        assert_eq!(timeout_from_env_value(None).unwrap(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_timeout_from_env_value_rejects_zero_and_garbage() {
        assert!(timeout_from_env_value(Some("0".into())).is_err());
        assert!(timeout_from_env_value(Some("soon".into())).is_err());
    }

    #[test]
    fn test_timeout_from_env_value_parses_seconds() {
        assert_eq!(
            timeout_from_env_value(Some("5".into())).unwrap(),
            Duration::from_secs(5)
        );
    }
}
