//! Error types for the pathmap core library
//!
//! Every failure raised while decomposing keys, resolving source paths or
//! writing destination structures is a variant of [`Error`]. Failures are
//! never downgraded internally: the first one aborts the whole mapping call.

use std::fmt;
use thiserror::Error;

/// Main error type for pathmap operations
#[derive(Error, Debug)]
pub enum Error {
    /// A mapping-table key is of an unsupported kind
    #[error("Invalid key spec: {message}")]
    InvalidKeySpec { message: String },

    /// A source path segment could not be resolved under strict mode
    #[error("{segment} key not found; full path {path}{}", detail_suffix(.detail))]
    KeyMissing {
        segment: String,
        path: String,
        detail: Option<String>,
    },

    /// A destination path tried to descend through a non-container value
    #[error("Invalid destination structure: {message} (key {key} in {path})")]
    InvalidDestinationStructure {
        key: String,
        path: String,
        message: String,
    },

    /// A destination leaf already holds a value and override was not requested
    #[error("Key {key} already assigned in {path} for {snapshot} structure")]
    AlreadyAssignedValue {
        key: String,
        path: String,
        snapshot: String,
    },

    /// A fallible computed extractor reported a failure
    #[error("Computed extractor failed: {message}")]
    Extractor {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Class tag of an [`Error`], for hosts that dispatch on the failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidKeySpec,
    KeyMissing,
    InvalidDestinationStructure,
    AlreadyAssignedValue,
    Extractor,
}

impl Error {
    /// Build a `KeyMissing` error from the offending segment and the full path
    pub(crate) fn key_missing(
        segment: impl fmt::Display,
        full_path: &[crate::Key],
        detail: Option<String>,
    ) -> Self {
        Error::KeyMissing {
            segment: segment.to_string(),
            path: crate::value::join_path(full_path),
            detail,
        }
    }

    /// The class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidKeySpec { .. } => ErrorKind::InvalidKeySpec,
            Error::KeyMissing { .. } => ErrorKind::KeyMissing,
            Error::InvalidDestinationStructure { .. } => ErrorKind::InvalidDestinationStructure,
            Error::AlreadyAssignedValue { .. } => ErrorKind::AlreadyAssignedValue,
            Error::Extractor { .. } => ErrorKind::Extractor,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("; {}", detail),
        None => String::new(),
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Extractor {
            message: err.to_string(),
            source: err,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidKeySpec => write!(f, "InvalidKeySpec"),
            ErrorKind::KeyMissing => write!(f, "KeyMissing"),
            ErrorKind::InvalidDestinationStructure => write!(f, "InvalidDestinationStructure"),
            ErrorKind::AlreadyAssignedValue => write!(f, "AlreadyAssignedValue"),
            ErrorKind::Extractor => write!(f, "Extractor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Key;

    #[test]
    fn test_key_missing_display() {
        let err = Error::key_missing("c", &[Key::str("a"), Key::str("c")], None);
        assert_eq!(err.to_string(), "c key not found; full path a.c");
        assert_eq!(err.kind(), ErrorKind::KeyMissing);
    }

    #[test]
    fn test_key_missing_display_with_detail() {
        let err = Error::key_missing(
            "median",
            &[Key::str("scores"), Key::str("median")],
            Some("sequences do not support median".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "median key not found; full path scores.median; sequences do not support median"
        );
    }

    #[test]
    fn test_extractor_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("payments missing").into();
        assert_eq!(err.kind(), ErrorKind::Extractor);
        assert!(err.to_string().contains("payments missing"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::AlreadyAssignedValue.to_string(), "AlreadyAssignedValue");
        assert_eq!(ErrorKind::InvalidKeySpec.to_string(), "InvalidKeySpec");
    }
}
