//! Error types and handling for `wxjson`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main error type for the `wxjson` library
#[derive(Error, Debug)]
pub enum WxJsonError {
    /// Malformed or type-mismatched JSON input
    #[error("Decoding error: {message}")]
    Decoding { message: String },

    /// Value that JSON cannot represent
    #[error("Encoding error: {message}")]
    Encoding { message: String },

    /// Connection failure or non-2xx response
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WxJsonError {
    /// Create a new decoding error
    pub fn decoding<S: Into<String>>(message: S) -> Self {
        Self::Decoding {
            message: message.into(),
        }
    }

    /// Create a new encoding error
    pub fn encoding<S: Into<String>>(message: S) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Create a new transport error without an HTTP status
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            status: None,
        }
    }

    /// Create a transport error for a non-success HTTP status
    pub fn status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Transport {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WxJsonError::Decoding { message } => format!("Received invalid JSON: {message}"),
            WxJsonError::Encoding { .. } => "Unable to encode the payload as JSON.".to_string(),
            WxJsonError::Transport {
                status: Some(status),
                ..
            } => format!("The weather server answered with HTTP status {status}."),
            WxJsonError::Transport { status: None, .. } => {
                "Unable to reach the weather server. Is it running?".to_string()
            }
            WxJsonError::Config { message } => format!("Configuration error: {message}"),
            WxJsonError::Io { .. } => {
                "I/O operation failed. Please check the address and permissions.".to_string()
            }
        }
    }

    /// HTTP status used when this error ends a request on the server side
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            WxJsonError::Decoding { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for WxJsonError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::status(status.as_u16(), err.to_string()),
            None => Self::transport(err.to_string()),
        }
    }
}

impl IntoResponse for WxJsonError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let decoding_err = WxJsonError::decoding("expected f64");
        assert!(matches!(decoding_err, WxJsonError::Decoding { .. }));

        let transport_err = WxJsonError::transport("connection refused");
        assert!(matches!(
            transport_err,
            WxJsonError::Transport { status: None, .. }
        ));

        let status_err = WxJsonError::status(503, "unavailable");
        assert!(matches!(
            status_err,
            WxJsonError::Transport {
                status: Some(503),
                ..
            }
        ));
    }

    #[test]
    fn test_user_messages() {
        let decoding_err = WxJsonError::decoding("bad input");
        assert!(decoding_err.user_message().contains("bad input"));

        let transport_err = WxJsonError::transport("test");
        assert!(transport_err.user_message().contains("Unable to reach"));

        let status_err = WxJsonError::status(404, "test");
        assert!(status_err.user_message().contains("404"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WxJsonError::decoding("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WxJsonError::encoding("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: WxJsonError = io_err.into();
        assert!(matches!(err, WxJsonError::Io { .. }));
    }
}
