use std::fmt;

/// Custom error type for Flowdock operations
#[derive(Debug)]
pub enum FlowdockError {
    /// HTTP request failed before a response arrived (connection, TLS, timeout)
    Http(reqwest::Error),
    /// API returned a non-success status code
    Api { status: u16, message: String },
    /// No API key in any source
    MissingCredentials(String),
    /// An audit record carried an `accessed_at` value that is not RFC 3339
    MalformedTimestamp { value: String, reason: String },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Request attempted after the session was closed
    SessionClosed,
}

impl fmt::Display for FlowdockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowdockError::Http(e) => write!(f, "HTTP request failed: {}", e),
            FlowdockError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            FlowdockError::MissingCredentials(msg) => write!(f, "{}", msg),
            FlowdockError::MalformedTimestamp { value, reason } => {
                write!(f, "Malformed accessed_at timestamp '{}': {}", value, reason)
            }
            FlowdockError::Json(msg) => write!(f, "JSON error: {}", msg),
            FlowdockError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FlowdockError::SessionClosed => write!(f, "Flowdock session is already closed"),
        }
    }
}

impl std::error::Error for FlowdockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowdockError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FlowdockError {
    fn from(err: reqwest::Error) -> Self {
        // A body that fails to deserialize is a decode problem, not a transport one
        if err.is_decode() {
            return FlowdockError::Json(err.to_string());
        }
        FlowdockError::Http(err)
    }
}

impl From<serde_json::Error> for FlowdockError {
    fn from(err: serde_json::Error) -> Self {
        FlowdockError::Json(err.to_string())
    }
}

/// Result type alias for Flowdock operations
pub type Result<T> = std::result::Result<T, FlowdockError>;
