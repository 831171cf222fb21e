use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("content store request timed out: {0}")]
    Timeout(String),

    #[error("content store connection failed: {0}")]
    Connection(String),

    #[error("content store unavailable ({status}): {message}")]
    Unavailable { status: u16, message: String },

    #[error("insufficient storage balance: {0}")]
    InsufficientBalance(String),

    #[error("content rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid content store response: {0}")]
    InvalidResponse(String),

    #[error("failed to serialize metadata: {0}")]
    Serialization(String),
}

impl PublishError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PublishError::Timeout(_) | PublishError::Connection(_) | PublishError::Unavailable { .. }
        )
    }

    /// Maps a non-success upload status to a failure class.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            402 => PublishError::InsufficientBalance(message),
            408 | 429 | 500..=599 => PublishError::Unavailable { status, message },
            _ => PublishError::Rejected { status, message },
        }
    }
}

impl From<reqwest::Error> for PublishError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PublishError::Timeout(err.to_string())
        } else if err.is_decode() {
            PublishError::InvalidResponse(err.to_string())
        } else {
            PublishError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PublishError {
    fn from(err: serde_json::Error) -> Self {
        PublishError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(matches!(
            PublishError::from_status(402, "top up".into()),
            PublishError::InsufficientBalance(msg) if msg == "top up"
        ));
        assert!(PublishError::from_status(503, String::new()).is_transient());
        assert!(PublishError::from_status(429, String::new()).is_transient());
        assert!(!PublishError::from_status(413, String::new()).is_transient());
        assert!(!PublishError::from_status(402, String::new()).is_transient());
    }
}
