use std::error::Error;
use std::fmt;

use crate::models::play::{PlayBase, TeamSide};

use super::GameDocument;

/// The document's format marker names something this build cannot read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFormatError {
    pub found_name: String,
    pub found_version: String,
}

impl fmt::Display for UnsupportedFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported chart format '{}' version '{}'; this build reads {} up to version {}",
            self.found_name,
            self.found_version,
            crate::FORMAT_NAME,
            crate::FORMAT_VERSION
        )
    }
}

impl Error for UnsupportedFormatError {}

/// Cross-record contradictions inside one document. Play-shape problems
/// live in [`crate::models::play::PlayShapeError`]; these are the checks
/// that need the whole chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentConsistencyError {
    /// The line score for one side does not add up to that side's total.
    QuarterSumMismatch {
        side: TeamSide,
        from_quarters: u32,
        total: u32,
    },
    /// An absolute score field shrinks between consecutive plays.
    ScoreDecreased {
        field: &'static str,
        play_index: usize,
        previous: u32,
        current: u32,
    },
    /// A sequence counter runs backwards between consecutive plays.
    SequenceDecreased {
        field: &'static str,
        play_index: usize,
        previous: u32,
        current: u32,
    },
}

impl fmt::Display for DocumentConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentConsistencyError::QuarterSumMismatch {
                side,
                from_quarters,
                total,
            } => write!(
                f,
                "{:?} quarters sum to {} but the team total is {}",
                side, from_quarters, total
            ),
            DocumentConsistencyError::ScoreDecreased {
                field,
                play_index,
                previous,
                current,
            } => write!(
                f,
                "{} drops from {} to {} at play {}",
                field, previous, current, play_index
            ),
            DocumentConsistencyError::SequenceDecreased {
                field,
                play_index,
                previous,
                current,
            } => write!(
                f,
                "{} runs backwards from {} to {} at play {}",
                field, previous, current, play_index
            ),
        }
    }
}

impl Error for DocumentConsistencyError {}

// Relative score views flip with possession, so only the absolute columns
// are required to be monotone.
const SCORE_FIELDS: [(&str, fn(&PlayBase) -> u32); 4] = [
    ("home_score", |b| b.home_score),
    ("away_score", |b| b.away_score),
    ("home_score_post", |b| b.home_score_post),
    ("away_score_post", |b| b.away_score_post),
];

const SEQUENCE_FIELDS: [(&str, fn(&PlayBase) -> u32); 3] = [
    ("drive_num", |b| b.drive_num),
    ("half_num", |b| b.half_num),
    ("quarter_num", |b| b.quarter_num),
];

/// Whole-chart consistency checks. Returns every contradiction found;
/// an empty vector means the document is internally coherent.
pub fn validate_document(doc: &GameDocument) -> Vec<DocumentConsistencyError> {
    let mut errors = Vec::new();
    check_line_score(doc, &mut errors);
    check_play_order(doc, &mut errors);
    errors
}

/// A charted line score must sum to the team totals. An empty line score
/// is fine; partial sources often skip it.
fn check_line_score(doc: &GameDocument, errors: &mut Vec<DocumentConsistencyError>) {
    if doc.score.by_quarter.is_empty() {
        return;
    }

    let home_sum: u32 = doc.score.by_quarter.iter().map(|q| q.home).sum();
    let away_sum: u32 = doc.score.by_quarter.iter().map(|q| q.away).sum();

    if home_sum != doc.score.home_team_score {
        errors.push(DocumentConsistencyError::QuarterSumMismatch {
            side: TeamSide::Home,
            from_quarters: home_sum,
            total: doc.score.home_team_score,
        });
    }
    if away_sum != doc.score.away_team_score {
        errors.push(DocumentConsistencyError::QuarterSumMismatch {
            side: TeamSide::Away,
            from_quarters: away_sum,
            total: doc.score.away_team_score,
        });
    }
}

fn check_play_order(doc: &GameDocument, errors: &mut Vec<DocumentConsistencyError>) {
    for (i, pair) in doc.plays.windows(2).enumerate() {
        let previous = pair[0].base();
        let current = pair[1].base();
        let play_index = i + 1;

        for (field, read) in SCORE_FIELDS {
            if read(current) < read(previous) {
                errors.push(DocumentConsistencyError::ScoreDecreased {
                    field,
                    play_index,
                    previous: read(previous),
                    current: read(current),
                });
            }
        }
        for (field, read) in SEQUENCE_FIELDS {
            if read(current) < read(previous) {
                errors.push(DocumentConsistencyError::SequenceDecreased {
                    field,
                    play_index,
                    previous: read(previous),
                    current: read(current),
                });
            }
        }
    }
}
