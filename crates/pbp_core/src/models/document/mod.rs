//! The chart document: one game, charted end to end.
//!
//! [`GameDocument`] is the root aggregate. It owns the rules the game was
//! played under, both teams, the ordered play list and the derived
//! rollups, and it carries a [`FormatStandard`] marker so readers can
//! refuse charts written by a newer build. Loading goes through
//! [`GameDocument::from_json`], which is the only hard gate; everything
//! else reports through [`GameDocument::validate`] as a plain error list.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod meta;
pub mod validation;

pub use meta::{
    CoinToss, DriveSummary, GameInfo, QuarterScore, RosterEntry, ScoreSheet, StatRow,
    Statistician, TeamInfo,
};
pub use validation::{validate_document, DocumentConsistencyError, UnsupportedFormatError};

use crate::error::{LoadResult, ValidationError};
use crate::models::play::{validate_play, Play};
use crate::models::rules::{validate_config, RulesConfiguration};

/// Self-identification block written into every chart.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct FormatStandard {
    pub format_name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for FormatStandard {
    fn default() -> Self {
        Self {
            format_name: crate::FORMAT_NAME.to_string(),
            version: crate::FORMAT_VERSION.to_string(),
            notes: None,
        }
    }
}

impl FormatStandard {
    /// Accepts the marker if the name matches and the version is not newer
    /// than this build. Minor versions only add fields, so older charts
    /// always load.
    pub fn check(&self) -> Result<(), UnsupportedFormatError> {
        let unsupported = || UnsupportedFormatError {
            found_name: self.format_name.clone(),
            found_version: self.version.clone(),
        };

        if self.format_name != crate::FORMAT_NAME {
            return Err(unsupported());
        }
        let found = parse_version(&self.version).ok_or_else(unsupported)?;
        let supported = parse_version(crate::FORMAT_VERSION).ok_or_else(unsupported)?;
        if found > supported {
            return Err(unsupported());
        }
        Ok(())
    }
}

fn parse_version(version: &str) -> Option<(u32, u32)> {
    let (major, minor) = version.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

/// Everything charted for one game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct GameDocument {
    pub format_standard: FormatStandard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistician: Option<Statistician>,
    pub settings: RulesConfiguration,
    pub game_info: GameInfo,
    pub home_team: TeamInfo,
    pub away_team: TeamInfo,
    pub coin_toss: CoinToss,
    pub score: ScoreSheet,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drives: Vec<DriveSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plays: Vec<Play>,
    /// Stat tables keyed by table name, e.g. `"passing"` or `"rushing"`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub stats: BTreeMap<String, Vec<StatRow>>,
}

impl GameDocument {
    pub fn new(
        league_id: impl Into<String>,
        home_team: TeamInfo,
        away_team: TeamInfo,
        settings: RulesConfiguration,
    ) -> Self {
        Self {
            settings,
            game_info: GameInfo::new(league_id),
            home_team,
            away_team,
            ..Self::default()
        }
    }

    pub fn with_statistician(mut self, statistician: Statistician) -> Self {
        self.statistician = Some(statistician);
        self
    }

    pub fn with_coin_toss(mut self, coin_toss: CoinToss) -> Self {
        self.coin_toss = coin_toss;
        self
    }

    pub fn append_play(&mut self, play: Play) {
        self.plays.push(play);
    }

    pub fn append_drive(&mut self, drive: DriveSummary) {
        self.drives.push(drive);
    }

    /// Records one period of the line score and folds it into the totals,
    /// so the sums stay consistent by construction.
    pub fn append_quarter_score(&mut self, quarter: QuarterScore) {
        self.score.home_team_score += quarter.home;
        self.score.away_team_score += quarter.away;
        self.score.by_quarter.push(quarter);
    }

    pub fn add_stat_row(&mut self, table: impl Into<String>, row: StatRow) {
        self.stats.entry(table.into()).or_default().push(row);
    }

    pub fn finish(&mut self) {
        self.game_info.game_is_finished = true;
    }

    // ======================================================================
    // Queries
    // ======================================================================

    pub fn plays_in_quarter(&self, quarter: u32) -> Vec<&Play> {
        self.plays
            .iter()
            .filter(|play| play.base().quarter_num == quarter)
            .collect()
    }

    pub fn scoring_plays(&self) -> Vec<&Play> {
        self.plays
            .iter()
            .filter(|play| play.base().is_scoring_play)
            .collect()
    }

    pub fn turnover_plays(&self) -> Vec<&Play> {
        self.plays
            .iter()
            .filter(|play| play.base().is_turnover)
            .collect()
    }

    pub fn kicking_plays(&self) -> Vec<&Play> {
        self.plays
            .iter()
            .filter(|play| play.is_kicking_play())
            .collect()
    }

    // ======================================================================
    // Serialization
    // ======================================================================

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a chart and gates on its format marker. Content problems do
    /// not fail the load; run [`GameDocument::validate`] for those.
    pub fn from_json(data: &str) -> LoadResult<Self> {
        let doc: GameDocument = serde_json::from_str(data)?;
        doc.format_standard.check()?;
        Ok(doc)
    }

    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(GameDocument)
    }

    /// Runs every layer of checking over the whole document and returns
    /// the combined findings. Never panics, never stops at the first
    /// problem.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(error) = self.format_standard.check() {
            errors.push(ValidationError::UnsupportedFormat(error));
        }
        errors.extend(
            validate_config(&self.settings)
                .into_iter()
                .map(ValidationError::Configuration),
        );
        for (play_index, play) in self.plays.iter().enumerate() {
            errors.extend(
                validate_play(play, &self.settings)
                    .into_iter()
                    .map(|error| ValidationError::PlayShape { play_index, error }),
            );
        }
        errors.extend(
            validate_document(self)
                .into_iter()
                .map(ValidationError::DocumentConsistency),
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::models::play::{PassPlay, TeamSide};
    use crate::models::rules::{build_config, BaseRuleset};

    fn nfl_document() -> GameDocument {
        GameDocument::new(
            "nfl-2025",
            TeamInfo::new("CHI", "Chicago").with_abbreviation("CHI"),
            TeamInfo::new("GB", "Green Bay").with_abbreviation("GB"),
            build_config(BaseRuleset::Nfl, &[]),
        )
    }

    #[test]
    fn test_new_document_validates_clean() {
        assert!(nfl_document().validate().is_empty());
    }

    #[test]
    fn test_quarter_append_keeps_totals_in_sync() {
        let mut doc = nfl_document();
        doc.append_quarter_score(QuarterScore::new(1, 7, 0));
        doc.append_quarter_score(QuarterScore::new(2, 3, 10));

        assert_eq!(doc.score.home_team_score, 10);
        assert_eq!(doc.score.away_team_score, 10);
        assert!(doc.validate().is_empty());
    }

    #[test]
    fn test_json_roundtrip_preserves_the_document() {
        let mut doc = nfl_document();
        doc.append_play(Play::kickoff(false));
        doc.append_quarter_score(QuarterScore::new(1, 0, 0));
        doc.finish();

        let json = doc.to_json_pretty().unwrap();
        let back = GameDocument::from_json(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_from_json_rejects_a_foreign_format() {
        let mut doc = nfl_document();
        doc.format_standard.format_name = "other_charting_tool".to_string();
        let json = doc.to_json_pretty().unwrap();

        match GameDocument::from_json(&json) {
            Err(LoadError::UnsupportedFormat(error)) => {
                assert_eq!(error.found_name, "other_charting_tool");
            }
            other => panic!("expected an unsupported-format error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_a_newer_version() {
        let mut doc = nfl_document();
        doc.format_standard.version = "9.0".to_string();
        let json = doc.to_json_pretty().unwrap();

        assert!(matches!(
            GameDocument::from_json(&json),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_json_accepts_an_older_version() {
        let mut doc = nfl_document();
        doc.format_standard.version = "0.0".to_string();
        let json = doc.to_json_pretty().unwrap();

        assert!(GameDocument::from_json(&json).is_ok());
    }

    #[test]
    fn test_validate_aggregates_every_layer() {
        let mut doc = nfl_document();
        doc.settings.downs = 0;

        let mut pass = PassPlay::default();
        pass.is_completed_pass = true;
        doc.append_play(Play::Pass(pass));

        let errors = doc.validate();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::Configuration(_)));
        assert!(matches!(
            errors[1],
            ValidationError::PlayShape { play_index: 0, .. }
        ));
    }

    #[test]
    fn test_queries_partition_the_play_list() {
        let mut doc = nfl_document();

        let mut touchdown = Play::rush();
        touchdown.base_mut().is_scoring_play = true;
        touchdown.base_mut().is_touchdown = true;
        touchdown.base_mut().quarter_num = 1;

        let mut pick = Play::pass();
        pick.base_mut().is_turnover = true;
        pick.base_mut().quarter_num = 2;

        let mut kick = Play::kickoff(false);
        kick.base_mut().quarter_num = 1;

        doc.append_play(kick);
        doc.append_play(touchdown);
        doc.append_play(pick);

        assert_eq!(doc.scoring_plays().len(), 1);
        assert_eq!(doc.turnover_plays().len(), 1);
        assert_eq!(doc.kicking_plays().len(), 1);
        assert_eq!(doc.plays_in_quarter(1).len(), 2);
        assert_eq!(doc.plays_in_quarter(3).len(), 0);
    }

    #[test]
    fn test_stat_tables_group_rows_by_name() {
        let mut doc = nfl_document();
        let player = crate::models::play::PlayerReference::new("CHI-34", "CHI");
        doc.add_stat_row("rushing", StatRow::new(player.clone()).with_column("att", 22));
        doc.add_stat_row("rushing", StatRow::new(player).with_column("att", 3));

        assert_eq!(doc.stats.get("rushing").map(Vec::len), Some(2));
    }

    #[test]
    fn test_schema_covers_the_play_union() {
        let schema = serde_json::to_value(GameDocument::json_schema()).unwrap();
        let text = schema.to_string();

        assert!(text.contains("format_standard"));
        assert!(text.contains("play_type"));
    }

    #[test]
    fn test_schema_types_the_game_date_as_a_date() {
        let schema = serde_json::to_value(GameDocument::json_schema()).unwrap();
        let text = schema.to_string();

        assert!(text.contains("game_date"));
        assert!(text.contains(r#""format":"date""#));
    }

    #[test]
    fn test_coin_toss_builder_round_trips() {
        let doc = nfl_document().with_coin_toss(CoinToss {
            won_by: Some(TeamSide::Away),
            winner_deferred: true,
        });

        let json = doc.to_json_pretty().unwrap();
        let back = GameDocument::from_json(&json).unwrap();
        assert_eq!(back.coin_toss.won_by, Some(TeamSide::Away));
        assert!(back.coin_toss.winner_deferred);
    }
}
