use super::error::ArchiveError;
use super::ARCHIVE_VERSION;
use crate::models::document::GameDocument;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// On-disk container: one chart plus archive bookkeeping
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameArchive {
    /// Archive format version, independent of the chart's own marker
    pub version: u32,

    /// Archive timestamp (unix milliseconds)
    pub timestamp: u64,

    /// The charted game
    pub document: GameDocument,
}

impl Default for GameArchive {
    fn default() -> Self {
        Self::new(GameDocument::default())
    }
}

impl GameArchive {
    pub fn new(document: GameDocument) -> Self {
        Self {
            version: ARCHIVE_VERSION,
            timestamp: current_timestamp(),
            document,
        }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    /// Structural sanity checks before the bytes leave the process. Chart
    /// content problems stay with [`GameDocument::validate`]; this only
    /// refuses archives no reader could make sense of.
    pub fn validate(&self) -> Result<(), ArchiveError> {
        self.document.format_standard.check()?;

        if self.document.plays.len() > 10_000 {
            return Err(ArchiveError::DataTooLarge {
                size: self.document.plays.len(),
            });
        }

        // A line score charting the same quarter twice is unreadable
        let mut quarters = std::collections::HashSet::new();
        for entry in &self.document.score.by_quarter {
            if !quarters.insert(entry.quarter) {
                return Err(ArchiveError::Corrupted);
            }
        }

        Ok(())
    }
}

/// Serialize and compress a chart archive
pub fn serialize_and_compress(archive: &GameArchive) -> Result<Vec<u8>, ArchiveError> {
    // Validate before serialization
    archive.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(archive).map_err(ArchiveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize a chart archive
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<GameArchive, ArchiveError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(ArchiveError::Corrupted);
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    // Verify checksum
    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(ArchiveError::ChecksumMismatch);
    }

    // Decompress
    let msgpack = decompress_size_prepended(payload).map_err(|_| ArchiveError::Decompression)?;

    // Deserialize
    let archive: GameArchive = from_slice(&msgpack).map_err(ArchiveError::Deserialization)?;

    // Validate archive version
    if archive.version > ARCHIVE_VERSION {
        return Err(ArchiveError::VersionMismatch {
            found: archive.version,
            expected: ARCHIVE_VERSION,
        });
    }

    // Validate the chart's own format marker
    archive.document.format_standard.check()?;

    Ok(archive)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
