//! # pbp_core - Football Play-by-Play Charting Core
//!
//! This library provides the domain model for charting American-football
//! games play by play, across rule variants from the NFL to high school.
//!
//! ## Features
//! - Tagged play union sharing one flattened situation base
//! - Rules configuration built from league templates plus overrides
//! - Validation as data: typed error lists, no panics
//! - Pure score-derivation helpers
//! - Compressed, checksummed chart archives

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Large enum variants - boxing would require API changes
#![allow(clippy::large_enum_variant)]

pub mod error;
pub mod models;
pub mod save;
pub mod scoring;

// Re-export the document model
pub use models::document::{FormatStandard, GameDocument};

// Re-export the play union
pub use models::play::{Play, PlayBase, TeamSide};

// Re-export the rules system
pub use models::rules::{
    build_config, BaseRuleset, ConfigOverride, OvertimeProcedure, RulesConfiguration,
};

// Re-export validation and loading errors
pub use error::{LoadError, LoadResult, ValidationError};

// Re-export the archive system
pub use save::{ArchiveError, ArchiveManager, GameArchive};

// Re-export score derivation
pub use scoring::{points_scored, score_after, stamp_post_scores, ScoreDelta};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name every chart writes into its format marker
pub const FORMAT_NAME: &str = "sdv_football_pbp";

/// Newest chart format version this build writes and reads
pub const FORMAT_VERSION: &str = "0.1";
