//! Error type for reference retrieval.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`InvalidConfig`](RefError::InvalidConfig) | configuration rejected at construction or load |
//! | [`MissingDataId`](RefError::MissingDataId) | the data reference lacks a required key |
//! | [`InvalidDataId`](RefError::InvalidDataId) | a `key=value` data id entry cannot be parsed |
//! | [`Connection`](RefError::Connection) | the database location cannot be parsed or reached |
//! | [`Query`](RefError::Query) | a SQL statement or row fetch fails |
//! | [`RowDecode`](RefError::RowDecode) | a result row does not hold `(i64, f64, f64)` |
//! | [`ExposureNotFound`](RefError::ExposureNotFound) | no footprint polygon for the exposure id |
//! | [`Coordinate`](RefError::Coordinate) | a row's RA/Dec fails validation |
//!
//! None of these are retried locally; they propagate to the caller with the
//! driver's diagnostic text attached.

use skyref_core::CoreError;
use thiserror::Error;

use crate::ExposureId;

#[derive(Error, Debug)]
pub enum RefError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Data reference has no '{key}' value")]
    MissingDataId { key: String },

    #[error("Invalid data id entry '{entry}': {message}")]
    InvalidDataId { entry: String, message: String },

    #[error("Cannot connect to {location}: {message}")]
    Connection { location: String, message: String },

    #[error("Query failed during {operation}: {message}")]
    Query { operation: String, message: String },

    #[error("Malformed result row: {message}")]
    RowDecode { message: String },

    #[error("No footprint polygon for exposure {0}")]
    ExposureNotFound(ExposureId),

    #[error("Catalog source {object_id} has an invalid position: {source}")]
    Coordinate {
        object_id: i64,
        #[source]
        source: CoreError,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for `Result<T, RefError>`.
pub type RefResult<T> = Result<T, RefError>;

impl RefError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn missing_data_id(key: &str) -> Self {
        Self::MissingDataId {
            key: key.to_string(),
        }
    }

    pub fn connection(location: &str, error: impl std::fmt::Display) -> Self {
        Self::Connection {
            location: location.to_string(),
            message: error.to_string(),
        }
    }

    pub fn query(operation: &str, error: impl std::fmt::Display) -> Self {
        Self::Query {
            operation: operation.to_string(),
            message: error.to_string(),
        }
    }

    pub fn row_decode(error: impl std::fmt::Display) -> Self {
        Self::RowDecode {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_names_operation() {
        let err = RefError::query("footprint lookup", "Table 'Science_Ccd_Exposure' doesn't exist");
        let msg = err.to_string();
        assert!(msg.contains("footprint lookup"));
        assert!(msg.contains("doesn't exist"));
    }

    #[test]
    fn test_exposure_not_found_message() {
        let err = RefError::ExposureNotFound(ExposureId(12345));
        assert_eq!(err.to_string(), "No footprint polygon for exposure 12345");
    }

    #[test]
    fn test_coordinate_error_keeps_source() {
        let err = RefError::Coordinate {
            object_id: 7,
            source: CoreError::not_finite("validate_declination"),
        };
        assert!(err.to_string().contains("Catalog source 7"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<RefError>();
        _assert_sync::<RefError>();
    }
}
