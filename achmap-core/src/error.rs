use std::fmt;

/// Custom error type for achievement mapper operations
#[derive(Debug)]
pub enum AchMapError {
    /// HTTP transport errors
    Http(reqwest::Error),
    /// Non-success HTTP status while fetching the dataset
    Status(String),
    /// CSV parsing errors
    Csv(csv::Error),
    /// File and stream I/O errors
    Io(std::io::Error),
    /// JSON serialization errors
    Json(serde_json::Error),
    /// YAML parsing errors
    Yaml(serde_yaml::Error),
    /// Configuration errors
    Config(String),
    /// Generic errors with message
    Generic(String),
}

impl fmt::Display for AchMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AchMapError::Http(err) => write!(f, "HTTP error: {}", err),
            AchMapError::Status(status) => write!(f, "Unexpected HTTP status: {}", status),
            AchMapError::Csv(err) => write!(f, "CSV error: {}", err),
            AchMapError::Io(err) => write!(f, "I/O error: {}", err),
            AchMapError::Json(err) => write!(f, "JSON error: {}", err),
            AchMapError::Yaml(err) => write!(f, "YAML error: {}", err),
            AchMapError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AchMapError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AchMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AchMapError::Http(err) => Some(err),
            AchMapError::Csv(err) => Some(err),
            AchMapError::Io(err) => Some(err),
            AchMapError::Json(err) => Some(err),
            AchMapError::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AchMapError {
    fn from(err: reqwest::Error) -> Self {
        AchMapError::Http(err)
    }
}

impl From<csv::Error> for AchMapError {
    fn from(err: csv::Error) -> Self {
        AchMapError::Csv(err)
    }
}

impl From<std::io::Error> for AchMapError {
    fn from(err: std::io::Error) -> Self {
        AchMapError::Io(err)
    }
}

impl From<serde_json::Error> for AchMapError {
    fn from(err: serde_json::Error) -> Self {
        AchMapError::Json(err)
    }
}

impl From<serde_yaml::Error> for AchMapError {
    fn from(err: serde_yaml::Error) -> Self {
        AchMapError::Yaml(err)
    }
}

impl From<regex::Error> for AchMapError {
    fn from(err: regex::Error) -> Self {
        AchMapError::Generic(err.to_string())
    }
}

impl From<anyhow::Error> for AchMapError {
    fn from(err: anyhow::Error) -> Self {
        AchMapError::Config(format!("{:#}", err))
    }
}

/// Result type alias for achievement mapper operations
pub type Result<T> = std::result::Result<T, AchMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_status_line() {
        let err = AchMapError::Status("404 Not Found".to_string());
        assert_eq!(err.to_string(), "Unexpected HTTP status: 404 Not Found");
    }

    #[test]
    fn anyhow_errors_become_config_errors_with_context_chain() {
        let err: AchMapError = anyhow::anyhow!("bad url").context("ACHMAP_URL").into();
        match err {
            AchMapError::Config(msg) => assert_eq!(msg, "ACHMAP_URL: bad url"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
