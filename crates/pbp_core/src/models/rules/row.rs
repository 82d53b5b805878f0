use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::validation::{validate_row, ConfigurationError};
use super::{OvertimeProcedure, RulesConfiguration};

/// Flat key-value projection of [`RulesConfiguration`] for row storage.
///
/// Column names match the configuration's field names. Numeric columns are
/// `i64` and optional parameters serialize as explicit nulls, matching what
/// a relational layer hands back. The mutually exclusive overtime booleans
/// exist only here; the typed configuration cannot hold two procedures at
/// once, so conflicts can only arrive from storage and are caught by
/// [`validate_row`]. A row with `overtime_enabled` true but no procedure
/// flag reads back as overtime disabled.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct ConfigRow {
    // Field geometry.
    pub field_length: i64,
    pub end_zone_length: i64,
    pub downs: i64,
    pub first_down_yards: i64,

    // Special yardlines.
    pub kickoff_yardline: i64,
    pub safety_kickoff_yardline: i64,
    pub touchback_yardline: i64,
    pub kickoff_touchback_yardline: i64,
    pub punt_touchback_yardline: i64,
    pub conversion_yardline_1pt: i64,
    pub conversion_yardline_2pt: i64,
    pub conversion_yardline_3pt: Option<i64>,
    pub kansas_ot_yardline: Option<i64>,

    // Clock.
    pub quarters: i64,
    pub quarter_seconds: i64,
    pub timeouts_per_half: i64,
    pub ot_period_seconds: i64,
    pub ot_timeouts: i64,
    pub play_clock_seconds: i64,
    pub max_ot_periods: Option<i64>,

    // Scoring values.
    pub touchdown_points: i64,
    pub field_goal_points: i64,
    pub safety_points: i64,
    pub pat_kick_points: i64,
    pub pat_defense_points: i64,
    pub pat_safety_points: i64,
    pub rouge_points: i64,

    // Rule toggles.
    pub two_forward_passes: bool,
    pub sacks_are_rushes: bool,
    pub kickoffs_enabled: bool,
    pub xfl_kickoff: bool,
    pub drop_kick_enabled: bool,
    pub rouges_enabled: bool,
    pub punting_enabled: bool,
    pub onside_punt_enabled: bool,
    pub fair_catch_enabled: bool,
    pub special_onside_play: bool,
    pub xfl_pat: bool,

    // Overtime selection, flattened to the storage columns.
    pub overtime_enabled: bool,
    pub sudden_death_ot: bool,
    pub modified_sudden_death_ot: bool,
    pub super_modified_sudden_death_ot: bool,
    pub kansas_ot: bool,
    pub ncaa_ot: bool,
    pub xfl_ot_rule: bool,
    pub full_period_ot: bool,
    pub ot_periods_until_shootout: Option<i64>,
    pub min_xfl_ot_periods: Option<i64>,
    pub set_xfl_ot_periods: Option<i64>,
}

impl ConfigRow {
    /// Reassembles the exclusive procedure choice from the flag columns.
    /// Call only on a validated row.
    fn overtime_procedure(&self) -> Option<OvertimeProcedure> {
        if !self.overtime_enabled {
            return None;
        }
        if self.sudden_death_ot {
            return Some(OvertimeProcedure::SuddenDeath);
        }
        if self.modified_sudden_death_ot {
            return Some(OvertimeProcedure::ModifiedSuddenDeath);
        }
        if self.super_modified_sudden_death_ot {
            return Some(OvertimeProcedure::SuperModifiedSuddenDeath);
        }
        if self.kansas_ot {
            return Some(OvertimeProcedure::Kansas);
        }
        if self.ncaa_ot {
            return Some(OvertimeProcedure::Ncaa {
                periods_until_shootout: self.ot_periods_until_shootout.unwrap_or(0) as u8,
            });
        }
        if self.xfl_ot_rule {
            return Some(OvertimeProcedure::Xfl {
                min_periods: self.min_xfl_ot_periods.unwrap_or(0) as u8,
                set_periods: self.set_xfl_ot_periods.unwrap_or(0) as u8,
            });
        }
        if self.full_period_ot {
            return Some(OvertimeProcedure::FullPeriod);
        }
        None
    }

    pub(crate) fn yardline_columns(&self) -> Vec<(&'static str, i64)> {
        let mut columns = vec![
            ("kickoff_yardline", self.kickoff_yardline),
            ("safety_kickoff_yardline", self.safety_kickoff_yardline),
            ("touchback_yardline", self.touchback_yardline),
            ("kickoff_touchback_yardline", self.kickoff_touchback_yardline),
            ("punt_touchback_yardline", self.punt_touchback_yardline),
            ("conversion_yardline_1pt", self.conversion_yardline_1pt),
            ("conversion_yardline_2pt", self.conversion_yardline_2pt),
        ];
        if let Some(value) = self.conversion_yardline_3pt {
            columns.push(("conversion_yardline_3pt", value));
        }
        if let Some(value) = self.kansas_ot_yardline {
            columns.push(("kansas_ot_yardline", value));
        }
        columns
    }

    pub(crate) fn point_columns(&self) -> Vec<(&'static str, i64)> {
        vec![
            ("touchdown_points", self.touchdown_points),
            ("field_goal_points", self.field_goal_points),
            ("safety_points", self.safety_points),
            ("pat_kick_points", self.pat_kick_points),
            ("pat_defense_points", self.pat_defense_points),
            ("pat_safety_points", self.pat_safety_points),
            ("rouge_points", self.rouge_points),
        ]
    }
}

impl From<&RulesConfiguration> for ConfigRow {
    fn from(cfg: &RulesConfiguration) -> Self {
        let overtime = cfg.overtime;
        Self {
            field_length: cfg.field_length as i64,
            end_zone_length: cfg.end_zone_length as i64,
            downs: cfg.downs as i64,
            first_down_yards: cfg.first_down_yards as i64,
            kickoff_yardline: cfg.kickoff_yardline as i64,
            safety_kickoff_yardline: cfg.safety_kickoff_yardline as i64,
            touchback_yardline: cfg.touchback_yardline as i64,
            kickoff_touchback_yardline: cfg.kickoff_touchback_yardline as i64,
            punt_touchback_yardline: cfg.punt_touchback_yardline as i64,
            conversion_yardline_1pt: cfg.conversion_yardline_1pt as i64,
            conversion_yardline_2pt: cfg.conversion_yardline_2pt as i64,
            conversion_yardline_3pt: cfg.conversion_yardline_3pt.map(i64::from),
            kansas_ot_yardline: cfg.kansas_ot_yardline.map(i64::from),
            quarters: cfg.quarters as i64,
            quarter_seconds: cfg.quarter_seconds as i64,
            timeouts_per_half: cfg.timeouts_per_half as i64,
            ot_period_seconds: cfg.ot_period_seconds as i64,
            ot_timeouts: cfg.ot_timeouts as i64,
            play_clock_seconds: cfg.play_clock_seconds as i64,
            max_ot_periods: cfg.max_ot_periods.map(i64::from),
            touchdown_points: cfg.touchdown_points as i64,
            field_goal_points: cfg.field_goal_points as i64,
            safety_points: cfg.safety_points as i64,
            pat_kick_points: cfg.pat_kick_points as i64,
            pat_defense_points: cfg.pat_defense_points as i64,
            pat_safety_points: cfg.pat_safety_points as i64,
            rouge_points: cfg.rouge_points as i64,
            two_forward_passes: cfg.two_forward_passes,
            sacks_are_rushes: cfg.sacks_are_rushes,
            kickoffs_enabled: cfg.kickoffs_enabled,
            xfl_kickoff: cfg.xfl_kickoff,
            drop_kick_enabled: cfg.drop_kick_enabled,
            rouges_enabled: cfg.rouges_enabled,
            punting_enabled: cfg.punting_enabled,
            onside_punt_enabled: cfg.onside_punt_enabled,
            fair_catch_enabled: cfg.fair_catch_enabled,
            special_onside_play: cfg.special_onside_play,
            xfl_pat: cfg.xfl_pat,
            overtime_enabled: overtime.is_some(),
            sudden_death_ot: matches!(overtime, Some(OvertimeProcedure::SuddenDeath)),
            modified_sudden_death_ot: matches!(
                overtime,
                Some(OvertimeProcedure::ModifiedSuddenDeath)
            ),
            super_modified_sudden_death_ot: matches!(
                overtime,
                Some(OvertimeProcedure::SuperModifiedSuddenDeath)
            ),
            kansas_ot: matches!(overtime, Some(OvertimeProcedure::Kansas)),
            ncaa_ot: matches!(overtime, Some(OvertimeProcedure::Ncaa { .. })),
            xfl_ot_rule: matches!(overtime, Some(OvertimeProcedure::Xfl { .. })),
            full_period_ot: matches!(overtime, Some(OvertimeProcedure::FullPeriod)),
            ot_periods_until_shootout: match overtime {
                Some(OvertimeProcedure::Ncaa {
                    periods_until_shootout,
                }) => Some(periods_until_shootout as i64),
                _ => None,
            },
            min_xfl_ot_periods: match overtime {
                Some(OvertimeProcedure::Xfl { min_periods, .. }) => Some(min_periods as i64),
                _ => None,
            },
            set_xfl_ot_periods: match overtime {
                Some(OvertimeProcedure::Xfl { set_periods, .. }) => Some(set_periods as i64),
                _ => None,
            },
        }
    }
}

impl TryFrom<&ConfigRow> for RulesConfiguration {
    type Error = Vec<ConfigurationError>;

    /// Validates first, then converts. The casts below are in range for
    /// any row that passed validation.
    fn try_from(row: &ConfigRow) -> Result<Self, Self::Error> {
        let errors = validate_row(row);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RulesConfiguration {
            field_length: row.field_length as u16,
            end_zone_length: row.end_zone_length as u16,
            downs: row.downs as u8,
            first_down_yards: row.first_down_yards as u16,
            kickoff_yardline: row.kickoff_yardline as u16,
            safety_kickoff_yardline: row.safety_kickoff_yardline as u16,
            touchback_yardline: row.touchback_yardline as u16,
            kickoff_touchback_yardline: row.kickoff_touchback_yardline as u16,
            punt_touchback_yardline: row.punt_touchback_yardline as u16,
            conversion_yardline_1pt: row.conversion_yardline_1pt as u16,
            conversion_yardline_2pt: row.conversion_yardline_2pt as u16,
            conversion_yardline_3pt: row.conversion_yardline_3pt.map(|v| v as u16),
            kansas_ot_yardline: row.kansas_ot_yardline.map(|v| v as u16),
            quarters: row.quarters as u8,
            quarter_seconds: row.quarter_seconds as u32,
            timeouts_per_half: row.timeouts_per_half as u8,
            ot_period_seconds: row.ot_period_seconds as u32,
            ot_timeouts: row.ot_timeouts as u8,
            play_clock_seconds: row.play_clock_seconds as u32,
            max_ot_periods: row.max_ot_periods.map(|v| v as u8),
            touchdown_points: row.touchdown_points as u8,
            field_goal_points: row.field_goal_points as u8,
            safety_points: row.safety_points as u8,
            pat_kick_points: row.pat_kick_points as u8,
            pat_defense_points: row.pat_defense_points as u8,
            pat_safety_points: row.pat_safety_points as u8,
            rouge_points: row.rouge_points as u8,
            two_forward_passes: row.two_forward_passes,
            sacks_are_rushes: row.sacks_are_rushes,
            kickoffs_enabled: row.kickoffs_enabled,
            xfl_kickoff: row.xfl_kickoff,
            drop_kick_enabled: row.drop_kick_enabled,
            rouges_enabled: row.rouges_enabled,
            punting_enabled: row.punting_enabled,
            onside_punt_enabled: row.onside_punt_enabled,
            fair_catch_enabled: row.fair_catch_enabled,
            special_onside_play: row.special_onside_play,
            xfl_pat: row.xfl_pat,
            overtime: row.overtime_procedure(),
        })
    }
}
