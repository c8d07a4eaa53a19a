//! The uniform fault type for transport and resource-client calls.

/// A failed API call.
///
/// Network failure, timeout, non-2xx status and body decode failure all
/// surface through this one type so views can treat any failure as a single
/// human-readable message.
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    #[error("network error: {0}")]
    Network(reqwest::Error),
    #[error("request timed out")]
    Timeout,
    /// The server rejected the session. The transport has already purged the
    /// stored token and requested navigation to `/login` by the time this
    /// reaches the caller.
    #[error("unauthorized")]
    Unauthorized,
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Fault {
    /// Classify a reqwest error, separating timeouts from other transport
    /// failures.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Fault::Timeout
        } else {
            Fault::Network(err)
        }
    }

    /// The HTTP status carried by this fault, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Fault::Status { status, .. } => Some(*status),
            Fault::Unauthorized => Some(401),
            _ => None,
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, Fault>;
