use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("Company name required")]
    EmptyCompanyName,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Unexpected response shape: {message}")]
    UnexpectedShape { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl LogoError {
    /// Configuration problems are the operator's to fix; everything else
    /// either rejects the input or degrades to the next source.
    pub fn is_config_error(&self) -> bool {
        matches!(self, LogoError::InvalidConfigValue { .. })
    }
}

pub type Result<T> = std::result::Result<T, LogoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_company_name_message() {
        assert_eq!(
            LogoError::EmptyCompanyName.to_string(),
            "Company name required"
        );
    }

    #[test]
    fn test_config_error_classification() {
        let err = LogoError::InvalidConfigValue {
            field: "request_timeout".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 60".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!LogoError::EmptyCompanyName.is_config_error());
        assert!(!LogoError::UnexpectedStatus { status: 404 }.is_config_error());
    }
}
