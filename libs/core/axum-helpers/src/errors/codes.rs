//! Type-safe error codes for API responses.
//!
//! Single source of truth for the error vocabulary: each code carries a
//! SCREAMING_SNAKE_CASE identifier for clients, an integer code for logs and
//! metrics, and a default human-readable message.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
///
/// Integer codes are grouped into ranges:
/// - 1000-1999: client errors
/// - 2000-2999: storage errors
/// - 4000-4999: I/O errors
/// - 5000-5999: serialization errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request validation failed
    ValidationError,

    /// Invalid UUID format in a path or query parameter
    InvalidUuid,

    /// JSON extraction from the request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    /// Storage connection or query error
    DatabaseError,

    /// File system I/O error
    IoError,

    /// JSON serialization/deserialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// String identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for structured logs and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::ServiceUnavailable => 1006,
            Self::DatabaseError => 2001,
            Self::IoError => 4001,
            Self::SerdeJsonError => 5001,
        }
    }

    /// Default message when the caller has nothing more specific to say.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::JsonExtraction => "Invalid JSON in request body",
            Self::NotFound => "Requested resource was not found",
            Self::InternalError => "An unexpected error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "A storage error occurred",
            Self::IoError => "An I/O error occurred",
            Self::SerdeJsonError => "JSON processing failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_and_codes_line_up() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::DatabaseError.code(), 2001);
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::InvalidUuid).unwrap();
        assert_eq!(json, "\"INVALID_UUID\"");
    }
}
