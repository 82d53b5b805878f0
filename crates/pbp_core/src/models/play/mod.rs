//! Play records: one tagged union over every way a down can unfold.
//!
//! Each variant wraps a layout struct that flattens the shared
//! [`PlayBase`] situation block to the top level of its JSON object, next
//! to a `play_type` tag. Charting code builds a draft with a constructor,
//! fills in what was observed, and asks [`validate_play`] what is wrong;
//! nothing in this module panics on bad data.
//!
//! ```
//! use pbp_core::models::play::{validate_play, Play, PlayBase, TeamSide};
//! use pbp_core::models::rules::{build_config, BaseRuleset};
//!
//! let cfg = build_config(BaseRuleset::Nfl, &[]);
//! let play = Play::pass().with_base(
//!     PlayBase::new()
//!         .with_possession(TeamSide::Home)
//!         .with_situation(1, 10, 25),
//! );
//! assert!(validate_play(&play, &cfg).is_empty());
//! ```

pub mod base;
pub mod records;
pub mod validation;
pub mod variants;

pub use base::{PlayBase, QbLocation, StartingHash, TeamSide};
pub use records::{
    ForcedFumbleRecord, FumbleRecoveryRecord, InjuryRecord, PenaltyRecord, PlayerReference,
    TacklerRecord,
};
pub use validation::{validate_play, PlayShapeError};
pub use variants::{
    ConversionAttemptPlay, FairCatchKickPlay, FieldGoalPlay, KickoffPlay, MissedFgReason,
    PassDirection, PassPlay, Play, PuntPlay, RunDirection, RushPlay, XpPlay,
};
