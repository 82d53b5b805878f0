use thiserror::Error;

use crate::models::document::UnsupportedFormatError;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted archive")]
    Corrupted,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Archive version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("{0}")]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid archive slot: {slot}")]
    InvalidSlot { slot: String },

    #[error("Archive too large: {size} plays")]
    DataTooLarge { size: usize },
}

impl ArchiveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            ArchiveError::Io(_) => true,
            ArchiveError::FileNotFound { .. } => true,
            ArchiveError::VersionMismatch { .. } => true, // newer build can read it
            ArchiveError::InvalidSlot { .. } => false,
            ArchiveError::Corrupted => false,
            ArchiveError::ChecksumMismatch => false,
            _ => false,
        }
    }
}
