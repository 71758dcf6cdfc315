//! Error types for the iPaymu client

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Result type alias for iPaymu operations
pub type Result<T> = std::result::Result<T, IpaymuError>;

/// Main error type for iPaymu operations
#[derive(Error, Debug)]
pub enum IpaymuError {
    /// HTTP transport error (network failure, DNS failure, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Domain-level failure reported by the gateway
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl IpaymuError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Return the gateway failure if this is a domain-level error
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure reported in the gateway's response envelope.
///
/// The gateway can answer a transport-successful POST with a non-200
/// `Status`. The decoded response body is retained here because failed
/// replies may still carry a meaningful payload (a failed transaction's
/// detail, for instance), so callers check the error but can keep reading
/// the response. This mirrors the upstream API contract and is intentional.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ApiError {
    /// Envelope status code (anything other than 200)
    pub status: u16,
    /// Human-readable message from the envelope
    pub message: String,
    /// Complete decoded response body
    pub body: Value,
}

impl ApiError {
    /// Re-decode the retained response body into a typed value
    pub fn decode<T: DeserializeOwned>(&self) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_display_is_gateway_message() {
        let err = ApiError {
            status: 402,
            message: "Insufficient balance".to_string(),
            body: Value::Null,
        };
        assert_eq!(err.to_string(), "Insufficient balance");

        let wrapped: IpaymuError = err.into();
        assert_eq!(wrapped.to_string(), "Insufficient balance");
        assert_eq!(wrapped.as_api().unwrap().status, 402);
    }

    #[test]
    fn test_api_error_body_redecodes() {
        #[derive(serde::Deserialize)]
        struct Envelope {
            #[serde(rename = "Status")]
            status: u16,
        }

        let err = ApiError {
            status: 403,
            message: "Forbidden".to_string(),
            body: json!({"Status": 403, "Message": "Forbidden", "Data": null}),
        };
        let envelope: Envelope = err.decode().unwrap();
        assert_eq!(envelope.status, 403);
    }

    #[test]
    fn test_config_error() {
        let err = IpaymuError::config("base URL must be absolute");
        assert!(err.to_string().contains("base URL must be absolute"));
        assert!(err.as_api().is_none());
    }
}
