use std::fmt;

/// Result type for tictactoe-client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single API call.
///
/// Call failures come in two kinds only. The UI renders both as one message and
/// does not branch on which kind it got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, DNS, timeout, body read)
    Transport(String),

    /// The server answered with a non-2xx status
    Http {
        status: u16,
        /// Machine-readable code from a structured error body, if any
        code: Option<String>,
        message: String,
    },

    /// The configured base URL cannot be used to build request URLs
    InvalidBaseUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::InvalidBaseUrl(_) => None,
        }
    }

    /// Message suitable for the visible error region.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http {
                status, message, ..
            } => write!(f, "HTTP {}: {}", status, message),
            ApiError::InvalidBaseUrl(msg) => write!(f, "Invalid base URL: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::Http {
            status: 409,
            code: Some("cell_occupied".into()),
            message: "Cell already taken".into(),
        };
        assert_eq!(err.to_string(), "HTTP 409: Cell already taken");
        assert_eq!(err.user_message(), "Cell already taken");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_transport_message() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message(), "Network error: connection refused");
        assert_eq!(err.status(), None);
    }
}
