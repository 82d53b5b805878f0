use std::fmt;

use super::base::PlayBase;
use super::variants::{MissedFgReason, Play};
use crate::models::rules::RulesConfiguration;

/// One structural finding on a single play.
///
/// Validation reports, it never rejects: draft plays may be invalid while
/// the statistician is still typing, so every check returns findings
/// instead of failing construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayShapeError {
    /// A completed pass has to name who caught it.
    CompletedPassWithoutReceiver,
    /// Fumble recoveries recorded with no fumble flag explaining them.
    RecoveryWithoutFumbleFlag { recoveries: usize },
    /// A made kick cannot also carry a miss reason.
    MadeKickWithMissReason { reason: MissedFgReason },
    /// Conversion flag set without the matching down flag.
    ConversionWithoutDownFlag { down: u8 },
    /// Conversion flag set but the charted gain falls short of the distance.
    ConversionShortOfDistance { down: u8, needed: u32, gained: i32 },
    /// Conversion flag set but distance or yardlines were not charted.
    ConversionMissingYardage { down: u8 },
    /// Conversion attempts are declared for 1, 2, or 3 points.
    ConversionPointsOutOfRange { points: u8 },
    /// The play uses a mechanic the attached ruleset disables.
    DisallowedByRules { detail: String },
}

impl fmt::Display for PlayShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayShapeError::CompletedPassWithoutReceiver => {
                write!(f, "Completed pass has no receiver")
            }
            PlayShapeError::RecoveryWithoutFumbleFlag { recoveries } => {
                write!(
                    f,
                    "{} fumble recovery record(s) but no fumble flag set on the play",
                    recoveries
                )
            }
            PlayShapeError::MadeKickWithMissReason { reason } => {
                write!(f, "Kick marked made but carries miss reason {:?}", reason)
            }
            PlayShapeError::ConversionWithoutDownFlag { down } => {
                write!(
                    f,
                    "Down {} marked converted without the down flag set",
                    down
                )
            }
            PlayShapeError::ConversionShortOfDistance {
                down,
                needed,
                gained,
            } => {
                write!(
                    f,
                    "Down {} marked converted but gained {} of {} needed",
                    down, gained, needed
                )
            }
            PlayShapeError::ConversionMissingYardage { down } => {
                write!(
                    f,
                    "Down {} marked converted without distance and yardlines charted",
                    down
                )
            }
            PlayShapeError::ConversionPointsOutOfRange { points } => {
                write!(f, "Conversion attempt declared for {} points", points)
            }
            PlayShapeError::DisallowedByRules { detail } => {
                write!(f, "Play disallowed by rules: {}", detail)
            }
        }
    }
}

impl std::error::Error for PlayShapeError {}

/// Checks one play's cross-field invariants and its legality under the
/// attached rules configuration. Pure; returns an empty list for a
/// well-formed play.
pub fn validate_play(play: &Play, cfg: &RulesConfiguration) -> Vec<PlayShapeError> {
    let mut errors = Vec::new();

    check_base(play.base(), &mut errors);

    match play {
        Play::Pass(p) => {
            if p.is_completed_pass && p.receiver.is_none() {
                errors.push(PlayShapeError::CompletedPassWithoutReceiver);
            }
        }
        Play::Rush(_) => {}
        Play::Punt(p) => {
            if !cfg.punting_enabled {
                errors.push(disallowed("Punt charted while punting_enabled is false"));
            }
            if p.is_onside_punt && !cfg.onside_punt_enabled {
                errors.push(disallowed(
                    "Onside punt flagged while onside_punt_enabled is false",
                ));
            }
            if p.is_fair_catch && !cfg.fair_catch_enabled {
                errors.push(disallowed(
                    "Fair catch flagged while fair_catch_enabled is false",
                ));
            }
            if p.is_rouge && !cfg.rouges_enabled {
                errors.push(disallowed("Rouge flagged while rouges_enabled is false"));
            }
        }
        Play::FieldGoal(p) => {
            check_kick_outcome(p.is_fg_made, p.missed_fg_reason, &mut errors);
            if p.is_drop_kick && !cfg.drop_kick_enabled {
                errors.push(disallowed(
                    "Drop kick flagged while drop_kick_enabled is false",
                ));
            }
        }
        Play::Xp(p) => {
            check_kick_outcome(p.is_fg_made, p.missed_fg_reason, &mut errors);
            if p.is_drop_kick && !cfg.drop_kick_enabled {
                errors.push(disallowed(
                    "Drop kick flagged while drop_kick_enabled is false",
                ));
            }
        }
        Play::ConversionAttempt(p) => {
            match p.points_attempted {
                Some(points) if !(1..=3).contains(&points) => {
                    errors.push(PlayShapeError::ConversionPointsOutOfRange { points });
                }
                Some(3) if cfg.conversion_yardline_3pt.is_none() => {
                    errors.push(disallowed(
                        "3-point conversion attempted without a conversion_yardline_3pt",
                    ));
                }
                _ => {}
            }
        }
        Play::Kickoff(p) | Play::SafetyKickoff(p) => {
            if !cfg.kickoffs_enabled {
                errors.push(disallowed(
                    "Kickoff charted while kickoffs_enabled is false",
                ));
            }
            if p.is_fair_catch && !cfg.fair_catch_enabled {
                errors.push(disallowed(
                    "Fair catch flagged while fair_catch_enabled is false",
                ));
            }
            if p.is_rouge && !cfg.rouges_enabled {
                errors.push(disallowed("Rouge flagged while rouges_enabled is false"));
            }
        }
        Play::FairCatchKick(p) => {
            check_kick_outcome(p.is_fg_made, p.missed_fg_reason, &mut errors);
            if !cfg.fair_catch_enabled {
                errors.push(disallowed(
                    "Fair catch kick charted while fair_catch_enabled is false",
                ));
            }
        }
    }

    errors
}

fn disallowed(detail: &str) -> PlayShapeError {
    PlayShapeError::DisallowedByRules {
        detail: detail.to_string(),
    }
}

fn check_kick_outcome(
    is_fg_made: bool,
    missed_fg_reason: Option<MissedFgReason>,
    errors: &mut Vec<PlayShapeError>,
) {
    if is_fg_made {
        if let Some(reason) = missed_fg_reason {
            errors.push(PlayShapeError::MadeKickWithMissReason { reason });
        }
    }
}

fn check_base(base: &PlayBase, errors: &mut Vec<PlayShapeError>) {
    let fumble_flagged = base.is_fumble || base.is_bad_snap || base.is_qb_fumble;
    if !base.fumble_recoveries.is_empty() && !fumble_flagged {
        errors.push(PlayShapeError::RecoveryWithoutFumbleFlag {
            recoveries: base.fumble_recoveries.len(),
        });
    }

    check_conversion(base, 3, base.is_third_down, base.is_third_down_converted, errors);
    check_conversion(
        base,
        4,
        base.is_fourth_down,
        base.is_fourth_down_converted,
        errors,
    );
}

fn check_conversion(
    base: &PlayBase,
    down: u8,
    down_flag: bool,
    converted: bool,
    errors: &mut Vec<PlayShapeError>,
) {
    if !converted {
        return;
    }
    if !down_flag {
        errors.push(PlayShapeError::ConversionWithoutDownFlag { down });
    }
    match (base.distance, base.yards_gained()) {
        (Some(needed), Some(gained)) => {
            if gained < needed as i32 {
                errors.push(PlayShapeError::ConversionShortOfDistance {
                    down,
                    needed,
                    gained,
                });
            }
        }
        _ => errors.push(PlayShapeError::ConversionMissingYardage { down }),
    }
}
