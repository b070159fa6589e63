use thiserror::Error;

/// Failure talking to the backend or a SaaS endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_includes_status() {
        let err = ApiError::Http { status: 500, body: "boom".to_string() };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert!(!err.is_unauthorized());
        assert!(ApiError::Http { status: 401, body: String::new() }.is_unauthorized());
    }
}
