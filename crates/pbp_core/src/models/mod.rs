pub mod document;
pub mod play;
pub mod rules;

#[cfg(test)]
pub mod proptest_gen;

#[cfg(test)]
pub mod snapshot_tests;

pub use document::{
    CoinToss, DriveSummary, FormatStandard, GameDocument, GameInfo, QuarterScore, ScoreSheet,
    StatRow, Statistician, TeamInfo,
};
pub use play::{
    validate_play, Play, PlayBase, PlayShapeError, PlayerReference, TeamSide,
};
pub use rules::{
    build_config, BaseRuleset, ConfigOverride, ConfigRow, ConfigurationError, OvertimeProcedure,
    RulesConfiguration,
};
