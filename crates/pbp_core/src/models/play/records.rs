use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A player attributed to an action on a play.
///
/// This is a charting-time snapshot owned by the play (or sub-record) that
/// references it. There is no back-link to a roster entity; the roster may
/// change between games without touching archived plays.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct PlayerReference {
    pub player_id: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_num: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_football_name: Option<String>,
}

impl PlayerReference {
    pub fn new(player_id: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            team_id: team_id.into(),
            player_num: None,
            player_full_name: None,
            player_football_name: None,
        }
    }

    pub fn with_number(mut self, num: u16) -> Self {
        self.player_num = Some(num);
        self
    }

    pub fn with_full_name(mut self, name: String) -> Self {
        self.player_full_name = Some(name);
        self
    }

    /// Short name as it appears on a scoreboard or broadcast graphic.
    pub fn with_football_name(mut self, name: String) -> Self {
        self.player_football_name = Some(name);
        self
    }
}

/// One flag thrown during a play. Zero or more per play.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct PenaltyRecord {
    /// Monotonic per game, in the order the flags were thrown.
    pub penalty_seq_num: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_id: Option<String>,
    pub penalty_name: String,
    pub offensive: bool,
    pub accepted: bool,
    pub personal_foul: bool,
    pub player_ejected: bool,
    pub team_penalty: bool,
    /// Absent for unattributed or bench/team penalties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerReference>,
}

impl PenaltyRecord {
    pub fn new(penalty_seq_num: u32, penalty_name: String) -> Self {
        Self { penalty_seq_num, penalty_name, ..Self::default() }
    }

    pub fn with_penalty_id(mut self, id: String) -> Self {
        self.penalty_id = Some(id);
        self
    }

    pub fn with_player(mut self, player: PlayerReference) -> Self {
        self.player = Some(player);
        self
    }
}

/// A player hurt on the play, with a free-text description of the injury.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct InjuryRecord {
    pub player: PlayerReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_type: Option<String>,
}

impl InjuryRecord {
    pub fn new(player: PlayerReference) -> Self {
        Self { player, injury_type: None }
    }

    pub fn with_injury_type(mut self, injury_type: String) -> Self {
        self.injury_type = Some(injury_type);
        self
    }
}

/// A credited tackler. Order in the owning play's `tacklers` list is the
/// credited-tackle order; the primary tackler comes first on solo tackles.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct TacklerRecord {
    pub player: PlayerReference,
    /// Tackle for loss.
    pub is_tfl: bool,
    pub is_sack: bool,
    pub is_sack_fumble: bool,
}

impl TacklerRecord {
    pub fn new(player: PlayerReference) -> Self {
        Self { player, is_tfl: false, is_sack: false, is_sack_fumble: false }
    }
}

/// A defender credited with knocking the ball loose.
///
/// `fumble_seq_num` shares one sequence per play with
/// [`FumbleRecoveryRecord`] so multi-fumble plays stay ordered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct ForcedFumbleRecord {
    pub fumble_seq_num: u32,
    pub player: PlayerReference,
    /// Yardline where the ball came out, offense-direction coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forced_at: Option<i32>,
}

impl ForcedFumbleRecord {
    pub fn new(fumble_seq_num: u32, player: PlayerReference) -> Self {
        Self { fumble_seq_num, player, forced_at: None }
    }

    pub fn with_forced_at(mut self, yardline: i32) -> Self {
        self.forced_at = Some(yardline);
        self
    }
}

/// Who came up with a loose ball and what they did with it.
///
/// A recovery may only appear on a play whose fumble flags (`is_fumble`,
/// `is_bad_snap`, `is_qb_fumble`) explain where the loose ball came from;
/// `validate_play` rejects orphaned recoveries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct FumbleRecoveryRecord {
    pub fumble_seq_num: u32,
    pub player: PlayerReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovered_at: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_to: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_yards: Option<i32>,
    pub scored_touchdown: bool,
    /// The recovering player pitched the ball before being downed.
    pub player_lateraled: bool,
}

impl FumbleRecoveryRecord {
    pub fn new(fumble_seq_num: u32, player: PlayerReference) -> Self {
        Self {
            fumble_seq_num,
            player,
            recovered_at: None,
            returned_to: None,
            return_yards: None,
            scored_touchdown: false,
            player_lateraled: false,
        }
    }

    pub fn with_return(mut self, recovered_at: i32, returned_to: i32) -> Self {
        self.recovered_at = Some(recovered_at);
        self.returned_to = Some(returned_to);
        self.return_yards = Some(returned_to - recovered_at);
        self
    }
}
