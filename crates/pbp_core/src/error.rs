//! Crate-wide error types.
//!
//! Validation never fails a call. The checkers return plain `Vec`s of the
//! error enums below and the caller decides what a problem costs. Only
//! loading raises, through [`LoadError`], because there is nothing useful
//! to hand back when the bytes do not parse.

use std::error::Error;
use std::fmt;

use crate::models::document::{DocumentConsistencyError, UnsupportedFormatError};
use crate::models::play::PlayShapeError;
use crate::models::rules::ConfigurationError;

/// One finding from [`crate::models::document::GameDocument::validate`],
/// tagged with the layer that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Configuration(ConfigurationError),
    PlayShape {
        play_index: usize,
        error: PlayShapeError,
    },
    DocumentConsistency(DocumentConsistencyError),
    UnsupportedFormat(UnsupportedFormatError),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Configuration(error) => write!(f, "Configuration: {}", error),
            ValidationError::PlayShape { play_index, error } => {
                write!(f, "Play {}: {}", play_index, error)
            }
            ValidationError::DocumentConsistency(error) => write!(f, "Document: {}", error),
            ValidationError::UnsupportedFormat(error) => write!(f, "{}", error),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ValidationError::Configuration(error) => Some(error),
            ValidationError::PlayShape { error, .. } => Some(error),
            ValidationError::DocumentConsistency(error) => Some(error),
            ValidationError::UnsupportedFormat(error) => Some(error),
        }
    }
}

impl From<ConfigurationError> for ValidationError {
    fn from(error: ConfigurationError) -> Self {
        ValidationError::Configuration(error)
    }
}

impl From<DocumentConsistencyError> for ValidationError {
    fn from(error: DocumentConsistencyError) -> Self {
        ValidationError::DocumentConsistency(error)
    }
}

impl From<UnsupportedFormatError> for ValidationError {
    fn from(error: UnsupportedFormatError) -> Self {
        ValidationError::UnsupportedFormat(error)
    }
}

/// Why a chart could not be loaded from JSON.
#[derive(Debug)]
pub enum LoadError {
    Json(serde_json::Error),
    UnsupportedFormat(UnsupportedFormatError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Json(error) => write!(f, "Malformed chart JSON: {}", error),
            LoadError::UnsupportedFormat(error) => write!(f, "{}", error),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Json(error) => Some(error),
            LoadError::UnsupportedFormat(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        LoadError::Json(error)
    }
}

impl From<UnsupportedFormatError> for LoadError {
    fn from(error: UnsupportedFormatError) -> Self {
        LoadError::UnsupportedFormat(error)
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
