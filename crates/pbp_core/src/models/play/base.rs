use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::records::{
    ForcedFumbleRecord, FumbleRecoveryRecord, InjuryRecord, PenaltyRecord, TacklerRecord,
};

/// Which bench a team-valued field refers to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Lateral spot of the ball at the snap.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StartingHash {
    Left,
    Middle,
    Right,
}

/// Where the quarterback lined up at the snap.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QbLocation {
    UnderCenter,
    Shotgun,
    Pistol,
    Wildcat,
}

/// Fields shared by every play shape.
///
/// Yardlines (`yardline_start`, `yardline_end`) are measured from the
/// offense's own goal line toward the opponent's, so the charted gain is
/// always `yardline_end - yardline_start` no matter which side has the
/// ball. Scores come in two views: absolute (`home_score`/`away_score`)
/// and relative to possession (`posteam_score`/`defteam_score`), each with
/// a `_post` twin holding the value after the play resolved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct PlayBase {
    // Clock state at the snap, seconds remaining.
    pub quarter_time_left: u32,
    pub half_time_left: u32,
    pub game_time_left: u32,

    // Score going into the play and after it resolved.
    pub home_score: u32,
    pub away_score: u32,
    pub home_score_post: u32,
    pub away_score_post: u32,
    pub posteam_score: u32,
    pub defteam_score: u32,
    pub posteam_score_post: u32,
    pub defteam_score_post: u32,

    /// Possessing side. On kickoff and safety-kickoff plays this is the
    /// RECEIVING team and `def_team` the kicking team; archived charts
    /// rely on that inverted convention, so it is kept as charted.
    pub pos_team: TeamSide,
    pub def_team: TeamSide,

    /// Absent on untimed or down-less plays (kickoffs, conversions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
    pub is_goal_to_go: bool,

    // Position of the play inside the game.
    pub drive_num: u32,
    pub half_num: u32,
    pub quarter_num: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yardline_start: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yardline_end: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_hash: Option<StartingHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qb_location: Option<QbLocation>,

    // Tempo and dead-ball flags.
    pub is_no_huddle: bool,
    pub is_motion: bool,
    pub is_no_play: bool,

    // Outcome flags shared across play shapes.
    pub is_scoring_play: bool,
    pub is_touchdown: bool,
    pub is_turnover: bool,
    /// The defense took the ball away and then gave it straight back.
    pub is_double_turnover: bool,
    pub is_safety: bool,
    pub is_bad_snap: bool,
    pub is_fumble: bool,
    pub is_qb_fumble: bool,

    // Down-conversion bookkeeping.
    pub is_third_down: bool,
    pub is_third_down_converted: bool,
    pub is_fourth_down: bool,
    pub is_fourth_down_converted: bool,

    /// When false the first entry in `tacklers` is the solo tackler.
    pub is_assisted_tackle: bool,

    pub tacklers: Vec<TacklerRecord>,
    pub forced_fumbles: Vec<ForcedFumbleRecord>,
    pub fumble_recoveries: Vec<FumbleRecoveryRecord>,
    pub penalties: Vec<PenaltyRecord>,
    pub injured_players: Vec<InjuryRecord>,
}

impl Default for PlayBase {
    fn default() -> Self {
        Self {
            quarter_time_left: 0,
            half_time_left: 0,
            game_time_left: 0,
            home_score: 0,
            away_score: 0,
            home_score_post: 0,
            away_score_post: 0,
            posteam_score: 0,
            defteam_score: 0,
            posteam_score_post: 0,
            defteam_score_post: 0,
            pos_team: TeamSide::Home,
            def_team: TeamSide::Away,
            down: None,
            distance: None,
            is_goal_to_go: false,
            drive_num: 0,
            half_num: 0,
            quarter_num: 0,
            yardline_start: None,
            yardline_end: None,
            starting_hash: None,
            qb_location: None,
            is_no_huddle: false,
            is_motion: false,
            is_no_play: false,
            is_scoring_play: false,
            is_touchdown: false,
            is_turnover: false,
            is_double_turnover: false,
            is_safety: false,
            is_bad_snap: false,
            is_fumble: false,
            is_qb_fumble: false,
            is_third_down: false,
            is_third_down_converted: false,
            is_fourth_down: false,
            is_fourth_down_converted: false,
            is_assisted_tackle: false,
            tacklers: Vec::new(),
            forced_fumbles: Vec::new(),
            fumble_recoveries: Vec::new(),
            penalties: Vec::new(),
            injured_players: Vec::new(),
        }
    }
}

impl PlayBase {
    /// Neutral draft state: zeroed clock and score, home ball, no flags.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(
        mut self,
        quarter_time_left: u32,
        half_time_left: u32,
        game_time_left: u32,
    ) -> Self {
        self.quarter_time_left = quarter_time_left;
        self.half_time_left = half_time_left;
        self.game_time_left = game_time_left;
        self
    }

    /// Sets the pre-snap score and initializes every post/relative view to
    /// match. Scoring helpers restamp the `_post` fields afterwards.
    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_score = home;
        self.away_score = away;
        self.home_score_post = home;
        self.away_score_post = away;
        self.sync_relative_scores();
        self
    }

    pub fn with_possession(mut self, pos_team: TeamSide) -> Self {
        self.pos_team = pos_team;
        self.def_team = pos_team.opponent();
        self.sync_relative_scores();
        self
    }

    pub fn with_situation(mut self, down: u8, distance: u32, yardline_start: i32) -> Self {
        self.down = Some(down);
        self.distance = Some(distance);
        self.yardline_start = Some(yardline_start);
        self.is_third_down = down == 3;
        self.is_fourth_down = down == 4;
        self
    }

    pub fn with_sequence(mut self, quarter_num: u32, half_num: u32, drive_num: u32) -> Self {
        self.quarter_num = quarter_num;
        self.half_num = half_num;
        self.drive_num = drive_num;
        self
    }

    /// Charted gain on the play, when both spots were recorded.
    pub fn yards_gained(&self) -> Option<i32> {
        match (self.yardline_start, self.yardline_end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    fn sync_relative_scores(&mut self) {
        let (pos, def) = match self.pos_team {
            TeamSide::Home => (self.home_score, self.away_score),
            TeamSide::Away => (self.away_score, self.home_score),
        };
        self.posteam_score = pos;
        self.defteam_score = def;
        let (pos_post, def_post) = match self.pos_team {
            TeamSide::Home => (self.home_score_post, self.away_score_post),
            TeamSide::Away => (self.away_score_post, self.home_score_post),
        };
        self.posteam_score_post = pos_post;
        self.defteam_score_post = def_post;
    }
}
