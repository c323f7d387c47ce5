//! Domain error types
//!
//! This module defines the error hierarchy for Vitals. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Vitals error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VitalsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Export document decoding errors
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Bulk load errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Database-related errors (generic)
    #[error("Database error: {0}")]
    Database(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while decoding an export document
///
/// Any decode error invalidates the entire batch: the decoder never emits a
/// partial record set. Each variant carries enough context to diagnose the
/// offending input without re-running the import.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The document is not well-formed XML or does not have the expected
    /// root/child shape
    #[error("malformed export document: {0}")]
    Structure(String),

    /// A Record element is missing one of its required attributes
    #[error("Record element is missing required attribute `{attribute}`")]
    MissingAttribute {
        /// Name of the missing attribute
        attribute: String,
    },

    /// A timestamp attribute matched none of the known formats
    #[error("unrecognized timestamp in `{attribute}`: {value:?}")]
    Timestamp {
        /// Name of the timestamp attribute
        attribute: String,
        /// The raw attribute text that failed to parse
        value: String,
    },

    /// An attribute that must be an integer could not be parsed as one
    #[error("attribute `{attribute}` is not an integer: {value:?}")]
    InvalidValue {
        /// Name of the attribute
        attribute: String,
        /// The raw attribute text
        value: String,
    },
}

/// Errors raised while bulk-loading a record batch
///
/// Every variant is fatal to the transaction: the loader rolls back and no
/// partial data is persisted.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The destination store was unreachable or a transaction could not be
    /// opened
    #[error("could not open a transaction on the destination store: {0}")]
    Connection(String),

    /// The bulk channel could not be opened (destination table or column
    /// mismatch)
    #[error("bulk channel rejected by the destination store: {0}")]
    Schema(String),

    /// The store rejected a record mid-stream
    #[error("record {index} rejected by the destination store: {reason}")]
    RecordRejected {
        /// Zero-based position of the rejected record in the batch
        index: usize,
        /// Store-reported reason
        reason: String,
    },

    /// Finalizing the bulk channel or committing the transaction failed
    #[error("failed to finalize the transaction: {0}")]
    Commit(String),
}

/// Adapter-level store failure
///
/// Store implementations report failures through this type; the loader maps
/// them onto the [`LoadError`] taxonomy based on which pipeline step failed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Create a store error from any displayable cause
    pub fn new(cause: impl std::fmt::Display) -> Self {
        StoreError(cause.to_string())
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for VitalsError {
    fn from(err: std::io::Error) -> Self {
        VitalsError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VitalsError {
    fn from(err: toml::de::Error) -> Self {
        VitalsError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vitals_error_display() {
        let err = VitalsError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_decode_error_conversion() {
        let decode_err = DecodeError::MissingAttribute {
            attribute: "unit".to_string(),
        };
        let err: VitalsError = decode_err.into();
        assert!(matches!(err, VitalsError::Decode(_)));
    }

    #[test]
    fn test_load_error_conversion() {
        let load_err = LoadError::RecordRejected {
            index: 7,
            reason: "value out of range".to_string(),
        };
        let err: VitalsError = load_err.into();
        assert!(matches!(err, VitalsError::Load(_)));
        assert!(err.to_string().contains("record 7"));
    }

    #[test]
    fn test_timestamp_error_carries_raw_value() {
        let err = DecodeError::Timestamp {
            attribute: "startDate".to_string(),
            value: "not a date".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("startDate"));
        assert!(rendered.contains("not a date"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: VitalsError = io_err.into();
        assert!(matches!(err, VitalsError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: VitalsError = toml_err.into();
        assert!(matches!(err, VitalsError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = VitalsError::Database("test".to_string());
        let _: &dyn std::error::Error = &err;

        let err = DecodeError::Structure("test".to_string());
        let _: &dyn std::error::Error = &err;

        let err = LoadError::Connection("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
