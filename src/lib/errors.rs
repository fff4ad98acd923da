use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    /// The server rejected the Basic credentials (HTTP 401).
    Unauthorized,
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    /// Input rejected before any request was made.
    Validation(String),
}

impl AppError {
    /// True when the failure means the held credentials are no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Unauthorized => write!(formatter, "Unauthorized"),
            AppError::Http { status, .. } => write!(formatter, "Request failed: {status}"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Validation(message) => write!(formatter, "Invalid input: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn unauthorized_is_distinct_from_other_statuses() {
        assert_eq!(AppError::Unauthorized.to_string(), "Unauthorized");
        assert!(AppError::Unauthorized.is_unauthorized());

        let forbidden = AppError::Http {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(forbidden.to_string(), "Request failed: 403");
        assert!(!forbidden.is_unauthorized());
    }

    #[test]
    fn validation_errors_read_as_input_problems() {
        let err = AppError::Validation("Message content cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: Message content cannot be empty");
    }
}
