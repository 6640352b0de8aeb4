//! Error types for aws-blocks.
//!
//! Blocks never interpret the failures of the AWS call they wrap: whatever the
//! client returns travels out of [`Block::on_event`](crate::blocks::Block::on_event)
//! untouched. The variants below exist so that the client layer can describe
//! those failures faithfully, and so that the catalog can report local problems
//! (unknown block, malformed input) before a request is ever built.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for aws-blocks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error reported by an AWS service for one API call.
///
/// The fields are copied from the service response as-is: `code` is the
/// service's error code (`ResourceNotFoundException`, `DBInstanceNotFound`,
/// `WAFStaleDataException`, ...) and `message` its human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// Service identifier (`eks`, `rds`, `waf`)
    pub service: String,
    /// Error code reported by the service
    pub code: String,
    /// Error message reported by the service
    pub message: String,
    /// HTTP status code of the response
    pub status: u16,
    /// Request id assigned by AWS, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ServiceError {
    pub fn new(
        service: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
        status: u16,
    ) -> Self {
        Self {
            service: service.into(),
            code: code.into(),
            message: message.into(),
            status,
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} returned {} (HTTP {}): {}",
            self.service, self.code, self.status, self.message
        )?;
        if let Some(ref request_id) = self.request_id {
            write!(f, " [request id {}]", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

/// The main error type for aws-blocks.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Catalog Errors
    // ========================================================================
    /// No block registered under the given id or name.
    #[error("Block '{0}' not found")]
    BlockNotFound(String),

    /// A required input field is absent.
    #[error("Missing required parameter '{parameter}' for block '{block}'")]
    MissingParameter {
        /// Block id
        block: String,
        /// Dotted path of the missing field
        parameter: String,
    },

    /// An input field has the wrong type or an unusable value.
    #[error("Invalid input for block '{block}': {message}")]
    InvalidInput {
        /// Block id
        block: String,
        /// Error message
        message: String,
    },

    // ========================================================================
    // AWS Errors
    // ========================================================================
    /// Error response from an AWS service, passed through unmodified.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The HTTP exchange with the service failed before a response arrived.
    #[error("Transport error calling {service}: {source}")]
    Transport {
        /// Service identifier
        service: String,
        /// Underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a body that could not be decoded.
    #[error("Failed to decode {service} response: {message}")]
    Decode {
        /// Service identifier
        service: String,
        /// Error message
        message: String,
    },

    /// Request signing failed.
    #[error("Request signing failed: {0}")]
    Signing(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid endpoint override.
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Error message
        message: String,
    },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // ========================================================================
    // IO and Serialization Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Creates a new missing parameter error.
    pub fn missing_parameter(block: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            block: block.into(),
            parameter: parameter.into(),
        }
    }

    /// Creates a new invalid input error.
    pub fn invalid_input(block: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            block: block.into(),
            message: message.into(),
        }
    }

    /// Creates a new decode error.
    pub fn decode(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Returns the service error if this error came from an AWS response.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Error::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the error code for CLI exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Service(_) => 2,
            Error::Transport { .. } | Error::Decode { .. } => 3,
            Error::MissingParameter { .. } | Error::InvalidInput { .. } => 4,
            Error::BlockNotFound(_) => 5,
            Error::Config(_) | Error::InvalidEndpoint { .. } => 6,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::new("eks", "ResourceNotFoundException", "No cluster found", 404)
            .with_request_id("abc-123");
        assert_eq!(
            err.to_string(),
            "eks returned ResourceNotFoundException (HTTP 404): No cluster found [request id abc-123]"
        );
    }

    #[test]
    fn test_service_error_is_transparent() {
        let inner = ServiceError::new("rds", "DBInstanceNotFound", "DBInstance db1 not found.", 404);
        let err: Error = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.as_service_error(), Some(&inner));
    }

    #[test]
    fn test_service_errors_share_one_exit_code() {
        for (code, status) in [
            ("ThrottlingException", 400),
            ("AccessDeniedException", 403),
            ("TooManyRequestsException", 429),
            ("InvalidParameterException", 400),
        ] {
            let err = Error::Service(ServiceError::new("eks", code, "x", status));
            assert_eq!(err.exit_code(), 2);
            assert_eq!(err.as_service_error().map(|e| e.code.as_str()), Some(code));
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::BlockNotFound("x".into()).exit_code(), 5);
        assert_eq!(Error::missing_parameter("eks.deleteAddon", "region").exit_code(), 4);
        assert_eq!(
            Error::Service(ServiceError::new("eks", "X", "y", 400)).exit_code(),
            2
        );
    }
}
