use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::base::{PlayBase, TeamSide};
use super::records::PlayerReference;

/// Why a kick attempt failed. Shared by field goals, extra points, and
/// fair-catch kicks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MissedFgReason {
    WideLeft,
    WideRight,
    /// Hit the upright or crossbar and bounced out.
    Doink,
    Block,
    Short,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PassDirection {
    Left,
    Middle,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RunDirection {
    LeftEnd,
    LeftTackle,
    LeftGuard,
    Middle,
    RightGuard,
    RightTackle,
    RightEnd,
}

/// Forward pass from scrimmage, including sacks and scrambles off a
/// called pass.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct PassPlay {
    #[serde(flatten)]
    pub base: PlayBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passer: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<PlayerReference>,
    pub is_completed_pass: bool,
    pub is_interception: bool,
    pub is_sack: bool,
    pub is_qb_scramble: bool,
    pub is_throw_away: bool,
    pub is_spike: bool,
    /// Depth of the throw past the line of scrimmage, negative behind it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_yards: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yards_after_catch: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_direction: Option<PassDirection>,
}

/// Designed run from scrimmage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct RushPlay {
    #[serde(flatten)]
    pub base: PlayBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rusher: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_direction: Option<RunDirection>,
    pub is_qb_kneel: bool,
    pub is_broken_tackle_run: bool,
}

/// Punt from scrimmage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct PuntPlay {
    #[serde(flatten)]
    pub base: PlayBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punter: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returner: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punt_distance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_yards: Option<i32>,
    pub is_blocked: bool,
    pub is_touchback: bool,
    pub is_fair_catch: bool,
    pub is_downed: bool,
    pub is_out_of_bounds: bool,
    pub is_onside_punt: bool,
    pub is_rouge: bool,
}

/// Field-goal attempt from scrimmage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct FieldGoalPlay {
    #[serde(flatten)]
    pub base: PlayBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kicker: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_attempt_distance: Option<u32>,
    pub is_fg_made: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_fg_reason: Option<MissedFgReason>,
    pub is_drop_kick: bool,
}

/// Kicked point-after try. Reuses the field-goal outcome vocabulary,
/// including the miss reasons.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct XpPlay {
    #[serde(flatten)]
    pub base: PlayBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kicker: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_attempt_distance: Option<u32>,
    pub is_fg_made: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_fg_reason: Option<MissedFgReason>,
    pub is_drop_kick: bool,
}

/// Scrimmage try for one, two, or three points after a touchdown.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct ConversionAttemptPlay {
    #[serde(flatten)]
    pub base: PlayBase,
    /// 1, 2, or 3; which tiers exist comes from the rules configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_attempted: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passer: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rusher: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<PlayerReference>,
    pub is_successful: bool,
    pub is_pass_attempt: bool,
    /// Defense took the failed try the other way for its own points.
    pub is_defensive_return: bool,
}

/// Free kick opening a half or following a score.
///
/// Charted with inverted possession: `base.pos_team` is the RECEIVING
/// team and `base.def_team` the kicking team. The safety kickoff after a
/// conceded safety shares this exact layout under its own tag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct KickoffPlay {
    #[serde(flatten)]
    pub base: PlayBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kicker: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returner: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kick_distance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_yards: Option<i32>,
    pub is_touchback: bool,
    pub is_out_of_bounds: bool,
    pub is_onside_attempt: bool,
    pub is_onside_recovered: bool,
    /// Kicking team came up with its own kick without an onside call.
    pub is_own_kickoff_recovery: bool,
    pub is_fair_catch: bool,
    pub is_rouge: bool,
}

/// Free kick for goal after a fair catch. A rarity kept for rulesets
/// that allow it; reuses the field-goal outcome vocabulary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct FairCatchKickPlay {
    #[serde(flatten)]
    pub base: PlayBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kicker: Option<PlayerReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_attempt_distance: Option<u32>,
    pub is_fg_made: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_fg_reason: Option<MissedFgReason>,
}

/// One charted play. The `play_type` tag selects the layout; nine tags
/// cover eight layouts because `safety_kickoff` reuses [`KickoffPlay`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(tag = "play_type", rename_all = "snake_case")]
pub enum Play {
    Pass(PassPlay),
    Rush(RushPlay),
    Punt(PuntPlay),
    FieldGoal(FieldGoalPlay),
    Xp(XpPlay),
    ConversionAttempt(ConversionAttemptPlay),
    Kickoff(KickoffPlay),
    SafetyKickoff(KickoffPlay),
    FairCatchKick(FairCatchKickPlay),
}

// Draft constructors. All scalars neutral, all collections empty;
// validation only ever happens through validate_play.
impl Play {
    pub fn pass() -> Self {
        Play::Pass(PassPlay::default())
    }

    pub fn rush() -> Self {
        Play::Rush(RushPlay::default())
    }

    pub fn punt() -> Self {
        Play::Punt(PuntPlay::default())
    }

    pub fn field_goal() -> Self {
        Play::FieldGoal(FieldGoalPlay::default())
    }

    pub fn xp() -> Self {
        Play::Xp(XpPlay::default())
    }

    pub fn conversion_attempt() -> Self {
        Play::ConversionAttempt(ConversionAttemptPlay::default())
    }

    /// The safety flag swaps the tag, not the layout.
    pub fn kickoff(is_safety_kickoff: bool) -> Self {
        if is_safety_kickoff {
            Play::SafetyKickoff(KickoffPlay::default())
        } else {
            Play::Kickoff(KickoffPlay::default())
        }
    }

    pub fn fair_catch_kick() -> Self {
        Play::FairCatchKick(FairCatchKickPlay::default())
    }

    pub fn with_base(mut self, base: PlayBase) -> Self {
        *self.base_mut() = base;
        self
    }
}

// Play utility methods
impl Play {
    pub fn base(&self) -> &PlayBase {
        match self {
            Play::Pass(p) => &p.base,
            Play::Rush(p) => &p.base,
            Play::Punt(p) => &p.base,
            Play::FieldGoal(p) => &p.base,
            Play::Xp(p) => &p.base,
            Play::ConversionAttempt(p) => &p.base,
            Play::Kickoff(p) => &p.base,
            Play::SafetyKickoff(p) => &p.base,
            Play::FairCatchKick(p) => &p.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut PlayBase {
        match self {
            Play::Pass(p) => &mut p.base,
            Play::Rush(p) => &mut p.base,
            Play::Punt(p) => &mut p.base,
            Play::FieldGoal(p) => &mut p.base,
            Play::Xp(p) => &mut p.base,
            Play::ConversionAttempt(p) => &mut p.base,
            Play::Kickoff(p) => &mut p.base,
            Play::SafetyKickoff(p) => &mut p.base,
            Play::FairCatchKick(p) => &mut p.base,
        }
    }

    /// The wire tag for this play's shape.
    pub fn play_type(&self) -> &'static str {
        match self {
            Play::Pass(_) => "pass",
            Play::Rush(_) => "rush",
            Play::Punt(_) => "punt",
            Play::FieldGoal(_) => "field_goal",
            Play::Xp(_) => "xp",
            Play::ConversionAttempt(_) => "conversion_attempt",
            Play::Kickoff(_) => "kickoff",
            Play::SafetyKickoff(_) => "safety_kickoff",
            Play::FairCatchKick(_) => "fair_catch_kick",
        }
    }

    pub fn is_scrimmage_play(&self) -> bool {
        matches!(
            self,
            Play::Pass(_) | Play::Rush(_) | Play::ConversionAttempt(_)
        )
    }

    pub fn is_kicking_play(&self) -> bool {
        matches!(
            self,
            Play::Punt(_)
                | Play::FieldGoal(_)
                | Play::Xp(_)
                | Play::Kickoff(_)
                | Play::SafetyKickoff(_)
                | Play::FairCatchKick(_)
        )
    }

    /// Side that kicked the ball, for kicking plays.
    ///
    /// Kickoffs chart the receiving team as `pos_team`, so the kicker is
    /// `def_team` there and `pos_team` everywhere else.
    pub fn kicking_team(&self) -> Option<TeamSide> {
        match self {
            Play::Punt(_) | Play::FieldGoal(_) | Play::Xp(_) | Play::FairCatchKick(_) => {
                Some(self.base().pos_team)
            }
            Play::Kickoff(_) | Play::SafetyKickoff(_) => Some(self.base().def_team),
            _ => None,
        }
    }

    /// Side fielding the kick, where one exists (punts and kickoffs).
    pub fn receiving_team(&self) -> Option<TeamSide> {
        match self {
            Play::Punt(_) => Some(self.base().def_team),
            Play::Kickoff(_) | Play::SafetyKickoff(_) => Some(self.base().pos_team),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_produce_matching_tags() {
        assert_eq!(Play::pass().play_type(), "pass");
        assert_eq!(Play::rush().play_type(), "rush");
        assert_eq!(Play::punt().play_type(), "punt");
        assert_eq!(Play::field_goal().play_type(), "field_goal");
        assert_eq!(Play::xp().play_type(), "xp");
        assert_eq!(Play::conversion_attempt().play_type(), "conversion_attempt");
        assert_eq!(Play::kickoff(false).play_type(), "kickoff");
        assert_eq!(Play::kickoff(true).play_type(), "safety_kickoff");
        assert_eq!(Play::fair_catch_kick().play_type(), "fair_catch_kick");
    }

    #[test]
    fn test_safety_kickoff_shares_the_kickoff_shape() {
        let kickoff = serde_json::to_value(Play::kickoff(false)).unwrap();
        let safety = serde_json::to_value(Play::kickoff(true)).unwrap();

        let mut kickoff_map = kickoff.as_object().unwrap().clone();
        let mut safety_map = safety.as_object().unwrap().clone();

        assert_eq!(
            kickoff_map.remove("play_type"),
            Some(serde_json::json!("kickoff"))
        );
        assert_eq!(
            safety_map.remove("play_type"),
            Some(serde_json::json!("safety_kickoff"))
        );
        // Identical fields once the tag is off.
        assert_eq!(kickoff_map, safety_map);
    }

    #[test]
    fn test_play_type_tag_roundtrip() {
        let plays = vec![
            Play::pass(),
            Play::rush(),
            Play::punt(),
            Play::field_goal(),
            Play::xp(),
            Play::conversion_attempt(),
            Play::kickoff(false),
            Play::kickoff(true),
            Play::fair_catch_kick(),
        ];

        for play in plays {
            let json = serde_json::to_string(&play).unwrap();
            assert!(json.contains(&format!("\"play_type\":\"{}\"", play.play_type())));
            let back: Play = serde_json::from_str(&json).unwrap();
            assert_eq!(play, back);
        }
    }

    #[test]
    fn test_kickoff_possession_inversion() {
        let mut play = Play::kickoff(false);
        play.base_mut().pos_team = TeamSide::Home;
        play.base_mut().def_team = TeamSide::Away;

        // Home receives, away kicks.
        assert_eq!(play.kicking_team(), Some(TeamSide::Away));
        assert_eq!(play.receiving_team(), Some(TeamSide::Home));

        let mut punt = Play::punt();
        punt.base_mut().pos_team = TeamSide::Home;
        punt.base_mut().def_team = TeamSide::Away;

        // On a punt the possessing team kicks.
        assert_eq!(punt.kicking_team(), Some(TeamSide::Home));
        assert_eq!(punt.receiving_team(), Some(TeamSide::Away));
    }

    #[test]
    fn test_base_mut_reaches_every_variant() {
        let mut play = Play::fair_catch_kick();
        play.base_mut().quarter_num = 4;
        assert_eq!(play.base().quarter_num, 4);

        let mut conversion = Play::conversion_attempt();
        conversion.base_mut().is_scoring_play = true;
        assert!(conversion.base().is_scoring_play);
    }

    #[test]
    fn test_scrimmage_and_kicking_partitions() {
        assert!(Play::pass().is_scrimmage_play());
        assert!(!Play::pass().is_kicking_play());
        assert!(Play::punt().is_kicking_play());
        assert!(!Play::punt().is_scrimmage_play());
        assert!(Play::kickoff(true).is_kicking_play());
        assert!(Play::conversion_attempt().is_scrimmage_play());
    }

    #[test]
    fn test_flattened_base_fields_sit_at_top_level() {
        let mut play = Play::pass();
        play.base_mut().quarter_num = 2;

        let value = serde_json::to_value(&play).unwrap();
        assert_eq!(value["quarter_num"], serde_json::json!(2));
        assert!(value.get("base").is_none());
    }
}
