//! Snapshot tests for the chart wire format using insta
//!
//! These tests pin the JSON produced for charted games so that a field
//! rename or attribute change shows up as a reviewed diff instead of a
//! silently incompatible archive.

use super::play::{MissedFgReason, PenaltyRecord};
use super::*;
use insta::assert_json_snapshot;

/// Line score and drives from Super Bowl XX, enough of a game to make
/// the rollup serialization representative.
fn sample_document() -> GameDocument {
    let mut doc = GameDocument::new(
        "nfl-1985",
        TeamInfo::new("CHI", "Chicago").with_abbreviation("CHI"),
        TeamInfo::new("NE", "New England").with_abbreviation("NE"),
        build_config(BaseRuleset::Nfl, &[]),
    );

    doc.append_quarter_score(QuarterScore::new(1, 13, 3));
    doc.append_quarter_score(QuarterScore::new(2, 10, 0));
    doc.append_quarter_score(QuarterScore::new(3, 21, 0));
    doc.append_quarter_score(QuarterScore::new(4, 2, 7));

    doc.append_drive(DriveSummary {
        drive_num: 1,
        pos_team: TeamSide::Away,
        result: Some("field_goal".to_string()),
        play_count: 5,
        yards: 21,
        start_yardline: Some(29),
    });
    doc.append_drive(DriveSummary {
        drive_num: 2,
        pos_team: TeamSide::Home,
        result: Some("touchdown".to_string()),
        play_count: 7,
        yards: 59,
        start_yardline: Some(41),
    });

    doc.finish();
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_marker_snapshot() {
        let marker = FormatStandard::default();
        assert_json_snapshot!("format_standard", marker);
    }

    #[test]
    fn test_line_score_snapshot() {
        let doc = sample_document();
        assert_json_snapshot!("line_score", doc.score);
    }

    #[test]
    fn test_drive_summaries_snapshot() {
        let doc = sample_document();
        assert_json_snapshot!("drive_summaries", doc.drives);
    }

    #[test]
    fn test_player_reference_snapshot() {
        let player = PlayerReference::new("CHI-34".to_string(), "CHI".to_string())
            .with_number(34)
            .with_full_name("Walter Payton".to_string())
            .with_football_name("W.Payton".to_string());
        assert_json_snapshot!("player_reference", player);
    }

    #[test]
    fn test_penalty_record_snapshot() {
        let mut penalty = PenaltyRecord::new(1, "Holding".to_string())
            .with_penalty_id("HLD".to_string())
            .with_player(PlayerReference::new("CHI-78".to_string(), "CHI".to_string()));
        penalty.offensive = true;
        penalty.accepted = true;
        assert_json_snapshot!("penalty_record", penalty);
    }

    #[test]
    fn test_missed_fg_reasons_snapshot() {
        let reasons = vec![
            MissedFgReason::WideLeft,
            MissedFgReason::WideRight,
            MissedFgReason::Doink,
            MissedFgReason::Block,
            MissedFgReason::Short,
        ];
        assert_json_snapshot!("missed_fg_reasons", reasons);
    }
}
