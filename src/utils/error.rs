use std::fmt;
use thiserror::Error;

/// Write operations rejected by the read-only catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "Create",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{operation} not supported in static mode")]
    Unsupported { operation: Operation },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    pub fn unsupported(operation: Operation) -> Self {
        CatalogError::Unsupported { operation }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, CatalogError::Unsupported { .. })
    }

    /// True when the document could not be retrieved or decoded.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CatalogError::Http(_)
                | CatalogError::HttpStatus { .. }
                | CatalogError::Io(_)
                | CatalogError::Parse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_messages() {
        assert_eq!(
            CatalogError::unsupported(Operation::Create).to_string(),
            "Create not supported in static mode"
        );
        assert_eq!(
            CatalogError::unsupported(Operation::Update).to_string(),
            "Update not supported in static mode"
        );
        assert_eq!(
            CatalogError::unsupported(Operation::Delete).to_string(),
            "Delete not supported in static mode"
        );
    }

    #[test]
    fn test_error_classification() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = CatalogError::from(parse_err);
        assert!(err.is_transport());
        assert!(!err.is_unsupported());

        let err = CatalogError::unsupported(Operation::Delete);
        assert!(err.is_unsupported());
        assert!(!err.is_transport());

        let err = CatalogError::Config {
            message: "missing".to_string(),
        };
        assert!(!err.is_transport());
    }
}
