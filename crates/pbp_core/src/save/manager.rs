use super::error::ArchiveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, GameArchive};

use once_cell::sync::Lazy;
use std::fs::{read_dir, remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::models::document::GameDocument;

// The document currently being charted, shared across the process
static CURRENT_DOCUMENT: Lazy<Mutex<Option<GameDocument>>> = Lazy::new(|| Mutex::new(None));

const SLOT_PREFIX: &str = "chart_";
const SLOT_EXTENSION: &str = "pbp";
const AUTO_SAVE_NAME: &str = "autosave.pbp";
const MAX_SLOT_LEN: usize = 64;

/// Archives charts under a root directory, one file per named slot.
pub struct ArchiveManager {
    root: PathBuf,
}

impl ArchiveManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the document currently being charted (thread-safe)
    pub fn current_document() -> Option<GameDocument> {
        CURRENT_DOCUMENT.lock().unwrap().clone()
    }

    /// Replace the document currently being charted
    pub fn set_current_document(document: GameDocument) {
        *CURRENT_DOCUMENT.lock().unwrap() = Some(document);
    }

    /// Clear the current charting session
    pub fn clear_current_document() {
        *CURRENT_DOCUMENT.lock().unwrap() = None;
    }

    /// Archive a chart under a named slot
    pub fn save_to_slot(&self, slot: &str, document: &GameDocument) -> Result<(), ArchiveError> {
        validate_slot(slot)?;

        let archive = GameArchive::new(document.clone());
        self.save_to_path(&self.slot_path(slot), &archive)?;

        log::info!("Chart archived to slot '{}'", slot);
        Ok(())
    }

    /// Load a chart from a named slot. The caller decides whether the
    /// result becomes the current document.
    pub fn load_from_slot(&self, slot: &str) -> Result<GameDocument, ArchiveError> {
        validate_slot(slot)?;

        let archive = self.load_from_path(&self.slot_path(slot))?;

        log::info!("Chart loaded from slot '{}'", slot);
        Ok(archive.document)
    }

    /// Write the auto-save file
    pub fn auto_save(&self, document: &GameDocument) -> Result<(), ArchiveError> {
        let archive = GameArchive::new(document.clone());
        self.save_to_path(&self.auto_save_path(), &archive)?;

        log::debug!("Auto-save completed");
        Ok(())
    }

    /// Load the auto-save file
    pub fn load_auto_save(&self) -> Result<GameDocument, ArchiveError> {
        let archive = self.load_from_path(&self.auto_save_path())?;

        log::info!("Auto-save loaded");
        Ok(archive.document)
    }

    /// Check if a slot exists on disk
    pub fn slot_exists(&self, slot: &str) -> bool {
        if validate_slot(slot).is_err() {
            return false;
        }
        self.slot_path(slot).exists()
    }

    pub fn auto_save_exists(&self) -> bool {
        self.auto_save_path().exists()
    }

    /// Delete an archived slot
    pub fn delete_slot(&self, slot: &str) -> Result<(), ArchiveError> {
        validate_slot(slot)?;

        let path = self.slot_path(slot);
        if path.exists() {
            remove_file(&path)?;
            log::info!("Deleted archive slot '{}'", slot);
        }

        Ok(())
    }

    /// Summary of one archived slot for list displays
    pub fn slot_info(&self, slot: &str) -> Result<Option<ArchiveSlotInfo>, ArchiveError> {
        validate_slot(slot)?;

        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let archive = self.load_from_path(&path)?;
        Ok(Some(ArchiveSlotInfo::from_archive(slot, &archive)))
    }

    /// All archived slots under the root, most recent first. Unreadable
    /// files are skipped rather than failing the listing.
    pub fn list_slots(&self) -> Vec<ArchiveSlotInfo> {
        let mut slots = Vec::new();

        let entries = match read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return slots,
        };
        let suffix = format!(".{}", SLOT_EXTENSION);
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let name = match file_name.to_str() {
                Some(name) => name,
                None => continue,
            };
            let slot = match name
                .strip_prefix(SLOT_PREFIX)
                .and_then(|rest| rest.strip_suffix(suffix.as_str()))
            {
                Some(slot) => slot,
                None => continue,
            };
            if let Ok(Some(info)) = self.slot_info(slot) {
                slots.push(info);
            }
        }

        slots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)); // Most recent first
        slots
    }

    // Private helper methods

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root
            .join(format!("{}{}.{}", SLOT_PREFIX, slot, SLOT_EXTENSION))
    }

    fn auto_save_path(&self) -> PathBuf {
        self.root.join(AUTO_SAVE_NAME)
    }

    fn save_to_path(&self, path: &Path, archive: &GameArchive) -> Result<(), ArchiveError> {
        // Ensure the archive directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serialize_and_compress(archive)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::debug!("Archived {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load_from_path(&self, path: &Path) -> Result<GameArchive, ArchiveError> {
        if !path.exists() {
            return Err(ArchiveError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let archive = decompress_and_deserialize(&data)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(archive)
    }
}

/// Slot names become file names, so only a conservative character set is
/// accepted.
fn validate_slot(slot: &str) -> Result<(), ArchiveError> {
    let ok = !slot.is_empty()
        && slot.len() <= MAX_SLOT_LEN
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !ok {
        return Err(ArchiveError::InvalidSlot {
            slot: slot.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ArchiveSlotInfo {
    pub slot: String,
    pub timestamp: u64,
    pub version: u32,
    pub league_id: String,
    pub home_team: String,
    pub away_team: String,
    pub play_count: usize,
    pub game_is_finished: bool,
}

impl ArchiveSlotInfo {
    fn from_archive(slot: &str, archive: &GameArchive) -> Self {
        Self {
            slot: slot.to_string(),
            timestamp: archive.timestamp,
            version: archive.version,
            league_id: archive.document.game_info.league_id.clone(),
            home_team: archive.document.home_team.name.clone(),
            away_team: archive.document.away_team.name.clone(),
            play_count: archive.document.plays.len(),
            game_is_finished: archive.document.game_info.game_is_finished,
        }
    }

    pub fn format_timestamp(&self) -> String {
        use time::{format_description::well_known::Rfc3339, OffsetDateTime};

        let timestamp =
            OffsetDateTime::from_unix_timestamp_nanos((self.timestamp * 1_000_000) as i128)
                .unwrap_or_else(|_| OffsetDateTime::now_utc());

        timestamp.format(&Rfc3339).unwrap_or_else(|_| "Unknown".to_string())
    }

    pub fn display_text(&self) -> String {
        format!(
            "{}: {} at {} ({} plays)",
            self.slot, self.away_team, self.home_team, self.play_count
        )
    }
}
