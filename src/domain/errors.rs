use derive_more::Display;

/// Network-related failures
#[derive(Debug, Clone, PartialEq, Display)]
pub enum NetworkError {
    #[display(fmt = "request failed: {}", _0)]
    RequestFailed(String),
    #[display(fmt = "HTTP {} {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
    #[display(fmt = "request timed out after {} ms", _0)]
    Timeout(u32),
}

impl NetworkError {
    /// Transport failures, timeouts, 429 and 5xx are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::RequestFailed(_) | NetworkError::Timeout(_) => true,
            NetworkError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        }
    }
}

/// Root error type for the application
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Network Error: {}", _0)]
    Network(NetworkError),
    #[display(fmt = "Parse Error: {}", _0)]
    Parse(String),
    #[display(fmt = "Storage Error: {}", _0)]
    Storage(String),
    #[display(fmt = "Wallet Error: {}", _0)]
    Wallet(String),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
}

impl std::error::Error for AppError {}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Parse(error.to_string())
    }
}

impl AppError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Network(e) if e.is_retryable())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_classification() {
        let rate_limited = AppError::from(NetworkError::HttpStatus { status: 429, status_text: "Too Many Requests".into() });
        let not_found = AppError::from(NetworkError::HttpStatus { status: 404, status_text: "Not Found".into() });
        assert!(rate_limited.is_retryable());
        assert!(!not_found.is_retryable());
        assert!(AppError::from(NetworkError::Timeout(15_000)).is_retryable());
        assert!(!AppError::Parse("expected array".into()).is_retryable());
    }

    #[test]
    fn display_messages() {
        let err = AppError::from(NetworkError::HttpStatus { status: 503, status_text: "Service Unavailable".into() });
        assert_eq!(err.to_string(), "Network Error: HTTP 503 Service Unavailable");
    }
}
