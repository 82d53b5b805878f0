//! League rules configuration.
//!
//! One [`RulesConfiguration`] is attached per league, optionally cloned and
//! specialized per season, and snapshotted into every game document. It is
//! immutable while a game is being charted. Construction goes through the
//! template catalog ([`build_config`]) so league differences live in one
//! override table instead of branching through the rest of the crate.

pub mod row;
pub mod templates;
pub mod validation;

pub use row::ConfigRow;
pub use templates::{build_config, canonical, diff, template_overrides, BaseRuleset, ConfigOverride};
pub use validation::{validate_config, validate_row, ConfigurationError};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// =============================================================================
// Overtime procedure
// =============================================================================

/// How a tied game continues, as a single exclusive choice.
///
/// `None` on the configuration means ties stand. The payload-carrying
/// variants hold the parameters that only make sense under that procedure.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(tag = "procedure", rename_all = "snake_case")]
pub enum OvertimeProcedure {
    /// First score of any kind wins.
    SuddenDeath,
    /// First-possession field goal does not end it; any touchdown does.
    ModifiedSuddenDeath,
    /// Both teams are guaranteed a possession regardless of the first
    /// result.
    SuperModifiedSuddenDeath,
    /// Alternating possessions from a fixed short-field yardline.
    Kansas,
    /// Alternating full possessions, switching to a two-point shootout
    /// after a set number of periods.
    Ncaa { periods_until_shootout: u8 },
    /// Best-of shootout of single conversion attempts.
    Xfl { min_periods: u8, set_periods: u8 },
    /// A full extra period is played out to its clock.
    FullPeriod,
}

impl OvertimeProcedure {
    /// Stable lowercase name, matching the row-form flag spelling.
    pub fn name(&self) -> &'static str {
        match self {
            OvertimeProcedure::SuddenDeath => "sudden_death",
            OvertimeProcedure::ModifiedSuddenDeath => "modified_sudden_death",
            OvertimeProcedure::SuperModifiedSuddenDeath => "super_modified_sudden_death",
            OvertimeProcedure::Kansas => "kansas",
            OvertimeProcedure::Ncaa { .. } => "ncaa",
            OvertimeProcedure::Xfl { .. } => "xfl",
            OvertimeProcedure::FullPeriod => "full_period",
        }
    }
}

// =============================================================================
// Rules configuration
// =============================================================================

/// Every parameter a league's rulebook contributes to charting.
///
/// Groups: field geometry, special yardlines, clock, scoring values, rule
/// toggles, overtime. All yardlines are measured from the offense's own
/// goal line, matching play coordinates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct RulesConfiguration {
    // Field geometry.
    pub field_length: u16,
    pub end_zone_length: u16,
    pub downs: u8,
    pub first_down_yards: u16,

    // Special yardlines.
    pub kickoff_yardline: u16,
    pub safety_kickoff_yardline: u16,
    /// Generic touchback spot where a league does not split the cases.
    pub touchback_yardline: u16,
    pub kickoff_touchback_yardline: u16,
    pub punt_touchback_yardline: u16,
    pub conversion_yardline_1pt: u16,
    pub conversion_yardline_2pt: u16,
    /// Only rulesets with a three-point tier set this.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub conversion_yardline_3pt: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kansas_ot_yardline: Option<u16>,

    // Clock.
    pub quarters: u8,
    pub quarter_seconds: u32,
    pub timeouts_per_half: u8,
    /// Zero means untimed overtime possessions.
    pub ot_period_seconds: u32,
    pub ot_timeouts: u8,
    pub play_clock_seconds: u32,
    /// `None` means overtime periods repeat until decided.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_ot_periods: Option<u8>,

    // Scoring values.
    pub touchdown_points: u8,
    pub field_goal_points: u8,
    pub safety_points: u8,
    pub pat_kick_points: u8,
    /// Defense returning a failed try the other way.
    pub pat_defense_points: u8,
    /// Safety conceded during a try.
    pub pat_safety_points: u8,
    pub rouge_points: u8,

    // Rule toggles.
    pub two_forward_passes: bool,
    pub sacks_are_rushes: bool,
    pub kickoffs_enabled: bool,
    /// Low-impact kickoff alignment with kicker and coverage separated.
    pub xfl_kickoff: bool,
    pub drop_kick_enabled: bool,
    pub rouges_enabled: bool,
    pub punting_enabled: bool,
    pub onside_punt_enabled: bool,
    pub fair_catch_enabled: bool,
    /// Fourth-and-long scrimmage alternative to the onside kick.
    pub special_onside_play: bool,
    /// Scrimmage-only tries replace the kicked PAT.
    pub xfl_pat: bool,

    // Overtime.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub overtime: Option<OvertimeProcedure>,
}

impl RulesConfiguration {
    pub fn overtime_enabled(&self) -> bool {
        self.overtime.is_some()
    }

    /// Whether this ruleset carries a three-point conversion tier.
    pub fn has_3pt_conversion(&self) -> bool {
        self.conversion_yardline_3pt.is_some()
    }

    /// Every yardline parameter with its field name, optionals included
    /// only when set. Validation walks this list.
    pub(crate) fn yardline_fields(&self) -> Vec<(&'static str, u16)> {
        let mut fields = vec![
            ("kickoff_yardline", self.kickoff_yardline),
            ("safety_kickoff_yardline", self.safety_kickoff_yardline),
            ("touchback_yardline", self.touchback_yardline),
            ("kickoff_touchback_yardline", self.kickoff_touchback_yardline),
            ("punt_touchback_yardline", self.punt_touchback_yardline),
            ("conversion_yardline_1pt", self.conversion_yardline_1pt),
            ("conversion_yardline_2pt", self.conversion_yardline_2pt),
        ];
        if let Some(value) = self.conversion_yardline_3pt {
            fields.push(("conversion_yardline_3pt", value));
        }
        if let Some(value) = self.kansas_ot_yardline {
            fields.push(("kansas_ot_yardline", value));
        }
        fields
    }
}

impl Default for RulesConfiguration {
    /// The canonical parameter set the template catalog seeds from.
    fn default() -> Self {
        canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overtime_enabled_tracks_the_option() {
        let mut cfg = RulesConfiguration::default();
        cfg.overtime = None;
        assert!(!cfg.overtime_enabled());

        cfg.overtime = Some(OvertimeProcedure::SuddenDeath);
        assert!(cfg.overtime_enabled());
    }

    #[test]
    fn test_procedure_names_match_row_flag_spelling() {
        assert_eq!(OvertimeProcedure::SuddenDeath.name(), "sudden_death");
        assert_eq!(
            OvertimeProcedure::Ncaa {
                periods_until_shootout: 3
            }
            .name(),
            "ncaa"
        );
        assert_eq!(
            OvertimeProcedure::Xfl {
                min_periods: 3,
                set_periods: 3
            }
            .name(),
            "xfl"
        );
    }

    #[test]
    fn test_overtime_serializes_with_procedure_tag() {
        let json = serde_json::to_string(&OvertimeProcedure::Ncaa {
            periods_until_shootout: 2,
        })
        .unwrap();
        assert_eq!(
            json,
            "{\"procedure\":\"ncaa\",\"periods_until_shootout\":2}"
        );

        let back: OvertimeProcedure = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back,
            OvertimeProcedure::Ncaa {
                periods_until_shootout: 2
            }
        );
    }

    #[test]
    fn test_unit_procedures_roundtrip() {
        for procedure in [
            OvertimeProcedure::SuddenDeath,
            OvertimeProcedure::ModifiedSuddenDeath,
            OvertimeProcedure::SuperModifiedSuddenDeath,
            OvertimeProcedure::Kansas,
            OvertimeProcedure::FullPeriod,
        ] {
            let json = serde_json::to_string(&procedure).unwrap();
            let back: OvertimeProcedure = serde_json::from_str(&json).unwrap();
            assert_eq!(procedure, back);
        }
    }

    #[test]
    fn test_yardline_fields_include_set_optionals() {
        let mut cfg = RulesConfiguration::default();
        cfg.conversion_yardline_3pt = None;
        cfg.kansas_ot_yardline = None;
        let base_len = cfg.yardline_fields().len();

        cfg.kansas_ot_yardline = Some(25);
        assert_eq!(cfg.yardline_fields().len(), base_len + 1);
    }
}
