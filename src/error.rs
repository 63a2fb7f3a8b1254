use thiserror::Error;

/// What can go wrong on a single API call. The repository collapses all of
/// these into an absent result; callers that need the distinction (tests,
/// diagnostics) get it here.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else {
            ApiError::Transport(err)
        }
    }

    /// HTTP status of the failed call, when the failure was a non-2xx reply.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
