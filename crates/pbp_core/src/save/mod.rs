// Archive pipeline for charted games
// MessagePack + LZ4 compression with versioning and integrity checks

pub mod error;
pub mod format;
pub mod manager;

pub use error::ArchiveError;
pub use format::{decompress_and_deserialize, serialize_and_compress, GameArchive};
pub use manager::{ArchiveManager, ArchiveSlotInfo};

pub const ARCHIVE_VERSION: u32 = 1;
