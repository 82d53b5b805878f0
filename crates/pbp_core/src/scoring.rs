//! Pure score arithmetic over single plays.
//!
//! Charts carry pre-snap and post-play scores on every play. The helpers
//! here derive the post-play side from the charted outcome flags and the
//! active [`RulesConfiguration`], without touching game state. Feed a play
//! in, get points out; [`stamp_post_scores`] returns a stamped copy and
//! leaves the input alone.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::play::{Play, TeamSide};
use crate::models::rules::RulesConfiguration;

/// Points one play awards, split by side. Almost always one-sided; both
/// fields are zero for non-scoring plays.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
pub struct ScoreDelta {
    pub home: u32,
    pub away: u32,
}

impl ScoreDelta {
    pub fn credit(side: TeamSide, points: u32) -> Self {
        match side {
            TeamSide::Home => Self {
                home: points,
                away: 0,
            },
            TeamSide::Away => Self {
                home: 0,
                away: points,
            },
        }
    }

    pub fn is_zero(&self) -> bool {
        self.home == 0 && self.away == 0
    }
}

/// Which side a touchdown on this play belongs to.
///
/// A punt hands the ball to the return side, so an untouched punt
/// touchdown is the defense's and a turnover hands it back. Kickoffs
/// already chart the receiving team as `pos_team`, so the scrimmage rule
/// covers them.
fn touchdown_team(play: &Play) -> TeamSide {
    let base = play.base();
    match play {
        Play::Punt(_) => {
            if base.is_double_turnover {
                base.def_team
            } else if base.is_turnover {
                base.pos_team
            } else {
                base.def_team
            }
        }
        _ => {
            if base.is_double_turnover {
                base.pos_team
            } else if base.is_turnover {
                base.def_team
            } else {
                base.pos_team
            }
        }
    }
}

/// Points awarded by one play under `cfg`.
///
/// Safeties outrank the rest: the conversion-safety point goes to the
/// converting team, a live-ball safety to the defense. Kick plays credit
/// their kicking team, and the rouge follows it, which on a kickoff means
/// `def_team`.
pub fn points_scored(play: &Play, cfg: &RulesConfiguration) -> ScoreDelta {
    let base = play.base();

    if base.is_safety {
        return match play {
            Play::Xp(_) | Play::ConversionAttempt(_) => {
                ScoreDelta::credit(base.pos_team, cfg.pat_safety_points as u32)
            }
            _ => ScoreDelta::credit(base.def_team, cfg.safety_points as u32),
        };
    }
    if base.is_touchdown {
        return ScoreDelta::credit(touchdown_team(play), cfg.touchdown_points as u32);
    }

    match play {
        Play::FieldGoal(p) => {
            if p.is_fg_made {
                ScoreDelta::credit(base.pos_team, cfg.field_goal_points as u32)
            } else {
                ScoreDelta::default()
            }
        }
        Play::FairCatchKick(p) => {
            if p.is_fg_made {
                ScoreDelta::credit(base.pos_team, cfg.field_goal_points as u32)
            } else {
                ScoreDelta::default()
            }
        }
        Play::Xp(p) => {
            if p.is_fg_made {
                ScoreDelta::credit(base.pos_team, cfg.pat_kick_points as u32)
            } else {
                ScoreDelta::default()
            }
        }
        Play::ConversionAttempt(p) => {
            if p.is_successful {
                let points = p.points_attempted.unwrap_or(2);
                ScoreDelta::credit(base.pos_team, points as u32)
            } else if p.is_defensive_return {
                ScoreDelta::credit(base.def_team, cfg.pat_defense_points as u32)
            } else {
                ScoreDelta::default()
            }
        }
        Play::Punt(p) => {
            if p.is_rouge {
                ScoreDelta::credit(base.pos_team, cfg.rouge_points as u32)
            } else {
                ScoreDelta::default()
            }
        }
        Play::Kickoff(p) | Play::SafetyKickoff(p) => {
            if p.is_rouge {
                ScoreDelta::credit(base.def_team, cfg.rouge_points as u32)
            } else {
                ScoreDelta::default()
            }
        }
        Play::Pass(_) | Play::Rush(_) => ScoreDelta::default(),
    }
}

/// Absolute score after the play, `(home, away)`.
pub fn score_after(play: &Play, cfg: &RulesConfiguration) -> (u32, u32) {
    let base = play.base();
    let delta = points_scored(play, cfg);
    (base.home_score + delta.home, base.away_score + delta.away)
}

/// Returns a copy of `play` with all four post-play score columns filled
/// in from the charted outcome.
pub fn stamp_post_scores(play: &Play, cfg: &RulesConfiguration) -> Play {
    let (home_post, away_post) = score_after(play, cfg);

    let mut stamped = play.clone();
    let base = stamped.base_mut();
    base.home_score_post = home_post;
    base.away_score_post = away_post;
    match base.pos_team {
        TeamSide::Home => {
            base.posteam_score_post = home_post;
            base.defteam_score_post = away_post;
        }
        TeamSide::Away => {
            base.posteam_score_post = away_post;
            base.defteam_score_post = home_post;
        }
    }
    stamped
}
