use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::play::{PlayerReference, TeamSide};

/// Who charted the game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct Statistician {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl Statistician {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Opening coin toss result. `won_by` stays unset until charted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct CoinToss {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub won_by: Option<TeamSide>,
    pub winner_deferred: bool,
}

/// Administrative facts about the game. Everything past the league id is
/// optional; charts from partial sources fill in what they have.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(default)]
pub struct GameInfo {
    pub game_id: String,
    pub league_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stadium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referee: Option<String>,
    /// Points laid by the favorite, always non-negative as charted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_under: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<TeamSide>,
    pub game_is_finished: bool,
}

impl GameInfo {
    pub fn new(league_id: impl Into<String>) -> Self {
        Self {
            game_id: Uuid::new_v4().to_string(),
            league_id: league_id.into(),
            league_name: None,
            season: None,
            week: None,
            game_date: None,
            stadium: None,
            attendance: None,
            referee: None,
            spread: None,
            over_under: None,
            favorite: None,
            game_is_finished: false,
        }
    }
}

impl Default for GameInfo {
    fn default() -> Self {
        Self::new("default-league")
    }
}

/// One team's identity and roster for the game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct TeamInfo {
    pub team_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roster: Vec<RosterEntry>,
}

impl TeamInfo {
    pub fn new(team_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct RosterEntry {
    pub player: PlayerReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub is_starter: bool,
}

/// Line-score entry for one period.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct QuarterScore {
    pub quarter: u8,
    pub quarter_name: String,
    pub home: u32,
    pub away: u32,
}

impl QuarterScore {
    /// Names regulation periods `Q1`..`Q4` and anything later `OT1`, `OT2`
    /// and so on. Charts for leagues with other period counts can rename.
    pub fn new(quarter: u8, home: u32, away: u32) -> Self {
        let quarter_name = if quarter <= 4 {
            format!("Q{}", quarter)
        } else {
            format!("OT{}", quarter - 4)
        };
        Self {
            quarter,
            quarter_name,
            home,
            away,
        }
    }
}

/// Running totals plus the line score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct ScoreSheet {
    pub home_team_score: u32,
    pub away_team_score: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub by_quarter: Vec<QuarterScore>,
}

/// Drive-level rollup kept alongside the play list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct DriveSummary {
    pub drive_num: u32,
    pub pos_team: TeamSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub play_count: u32,
    pub yards: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_yardline: Option<i32>,
}

/// One player's line in a stat table. Column names are the table's own;
/// the chart does not fix a stat vocabulary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct StatRow {
    pub player: PlayerReference,
    pub columns: BTreeMap<String, i64>,
}

impl StatRow {
    pub fn new(player: PlayerReference) -> Self {
        Self {
            player,
            columns: BTreeMap::new(),
        }
    }

    pub fn with_column(mut self, name: impl Into<String>, value: i64) -> Self {
        self.columns.insert(name.into(), value);
        self
    }
}
