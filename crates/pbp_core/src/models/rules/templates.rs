use std::collections::HashMap;

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{OvertimeProcedure, RulesConfiguration};

// ==========================================================================
// Base rulesets
// ==========================================================================

/// League templates the catalog ships with.
///
/// A template is not a configuration of its own. It names a list of
/// [`ConfigOverride`]s applied on top of the canonical parameter set, so
/// the catalog records only what a league changes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum BaseRuleset {
    Nfl,
    Ncaa,
    Cfl,
    #[serde(rename = "xfl_2020")]
    Xfl2020,
    #[serde(rename = "xfl_2023")]
    Xfl2023,
    Aaf,
    #[serde(rename = "ufl_2024")]
    Ufl2024,
    HighSchool,
}

impl BaseRuleset {
    pub fn display_name(&self) -> &'static str {
        match self {
            BaseRuleset::Nfl => "NFL",
            BaseRuleset::Ncaa => "NCAA",
            BaseRuleset::Cfl => "CFL",
            BaseRuleset::Xfl2020 => "XFL (2020)",
            BaseRuleset::Xfl2023 => "XFL (2023)",
            BaseRuleset::Aaf => "AAF",
            BaseRuleset::Ufl2024 => "UFL (2024)",
            BaseRuleset::HighSchool => "High School",
        }
    }
}

// ==========================================================================
// Config overrides
// ==========================================================================

/// A single parameter replacement, one variant per configuration field.
///
/// Serializes as `{"param": "...", "value": ...}` so stored charts carry
/// their rule deviations as readable pairs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(tag = "param", content = "value", rename_all = "snake_case")]
pub enum ConfigOverride {
    FieldLength(u16),
    EndZoneLength(u16),
    Downs(u8),
    FirstDownYards(u16),
    KickoffYardline(u16),
    SafetyKickoffYardline(u16),
    TouchbackYardline(u16),
    KickoffTouchbackYardline(u16),
    PuntTouchbackYardline(u16),
    #[serde(rename = "conversion_yardline_1pt")]
    ConversionYardline1Pt(u16),
    #[serde(rename = "conversion_yardline_2pt")]
    ConversionYardline2Pt(u16),
    #[serde(rename = "conversion_yardline_3pt")]
    ConversionYardline3Pt(Option<u16>),
    KansasOtYardline(Option<u16>),
    Quarters(u8),
    QuarterSeconds(u32),
    TimeoutsPerHalf(u8),
    OtPeriodSeconds(u32),
    OtTimeouts(u8),
    PlayClockSeconds(u32),
    MaxOtPeriods(Option<u8>),
    TouchdownPoints(u8),
    FieldGoalPoints(u8),
    SafetyPoints(u8),
    PatKickPoints(u8),
    PatDefensePoints(u8),
    PatSafetyPoints(u8),
    RougePoints(u8),
    TwoForwardPasses(bool),
    SacksAreRushes(bool),
    KickoffsEnabled(bool),
    XflKickoff(bool),
    DropKickEnabled(bool),
    RougesEnabled(bool),
    PuntingEnabled(bool),
    OnsidePuntEnabled(bool),
    FairCatchEnabled(bool),
    SpecialOnsidePlay(bool),
    XflPat(bool),
    Overtime(Option<OvertimeProcedure>),
}

impl ConfigOverride {
    pub fn apply_to(&self, cfg: &mut RulesConfiguration) {
        match self {
            ConfigOverride::FieldLength(v) => cfg.field_length = *v,
            ConfigOverride::EndZoneLength(v) => cfg.end_zone_length = *v,
            ConfigOverride::Downs(v) => cfg.downs = *v,
            ConfigOverride::FirstDownYards(v) => cfg.first_down_yards = *v,
            ConfigOverride::KickoffYardline(v) => cfg.kickoff_yardline = *v,
            ConfigOverride::SafetyKickoffYardline(v) => cfg.safety_kickoff_yardline = *v,
            ConfigOverride::TouchbackYardline(v) => cfg.touchback_yardline = *v,
            ConfigOverride::KickoffTouchbackYardline(v) => cfg.kickoff_touchback_yardline = *v,
            ConfigOverride::PuntTouchbackYardline(v) => cfg.punt_touchback_yardline = *v,
            ConfigOverride::ConversionYardline1Pt(v) => cfg.conversion_yardline_1pt = *v,
            ConfigOverride::ConversionYardline2Pt(v) => cfg.conversion_yardline_2pt = *v,
            ConfigOverride::ConversionYardline3Pt(v) => cfg.conversion_yardline_3pt = *v,
            ConfigOverride::KansasOtYardline(v) => cfg.kansas_ot_yardline = *v,
            ConfigOverride::Quarters(v) => cfg.quarters = *v,
            ConfigOverride::QuarterSeconds(v) => cfg.quarter_seconds = *v,
            ConfigOverride::TimeoutsPerHalf(v) => cfg.timeouts_per_half = *v,
            ConfigOverride::OtPeriodSeconds(v) => cfg.ot_period_seconds = *v,
            ConfigOverride::OtTimeouts(v) => cfg.ot_timeouts = *v,
            ConfigOverride::PlayClockSeconds(v) => cfg.play_clock_seconds = *v,
            ConfigOverride::MaxOtPeriods(v) => cfg.max_ot_periods = *v,
            ConfigOverride::TouchdownPoints(v) => cfg.touchdown_points = *v,
            ConfigOverride::FieldGoalPoints(v) => cfg.field_goal_points = *v,
            ConfigOverride::SafetyPoints(v) => cfg.safety_points = *v,
            ConfigOverride::PatKickPoints(v) => cfg.pat_kick_points = *v,
            ConfigOverride::PatDefensePoints(v) => cfg.pat_defense_points = *v,
            ConfigOverride::PatSafetyPoints(v) => cfg.pat_safety_points = *v,
            ConfigOverride::RougePoints(v) => cfg.rouge_points = *v,
            ConfigOverride::TwoForwardPasses(v) => cfg.two_forward_passes = *v,
            ConfigOverride::SacksAreRushes(v) => cfg.sacks_are_rushes = *v,
            ConfigOverride::KickoffsEnabled(v) => cfg.kickoffs_enabled = *v,
            ConfigOverride::XflKickoff(v) => cfg.xfl_kickoff = *v,
            ConfigOverride::DropKickEnabled(v) => cfg.drop_kick_enabled = *v,
            ConfigOverride::RougesEnabled(v) => cfg.rouges_enabled = *v,
            ConfigOverride::PuntingEnabled(v) => cfg.punting_enabled = *v,
            ConfigOverride::OnsidePuntEnabled(v) => cfg.onside_punt_enabled = *v,
            ConfigOverride::FairCatchEnabled(v) => cfg.fair_catch_enabled = *v,
            ConfigOverride::SpecialOnsidePlay(v) => cfg.special_onside_play = *v,
            ConfigOverride::XflPat(v) => cfg.xfl_pat = *v,
            ConfigOverride::Overtime(v) => cfg.overtime = *v,
        }
    }
}

/// Lists the overrides that turn `base` into `target`, one per differing
/// field. Applying the result to `base` reproduces `target` exactly.
pub fn diff(base: &RulesConfiguration, target: &RulesConfiguration) -> Vec<ConfigOverride> {
    let mut overrides = Vec::new();
    if base.field_length != target.field_length {
        overrides.push(ConfigOverride::FieldLength(target.field_length));
    }
    if base.end_zone_length != target.end_zone_length {
        overrides.push(ConfigOverride::EndZoneLength(target.end_zone_length));
    }
    if base.downs != target.downs {
        overrides.push(ConfigOverride::Downs(target.downs));
    }
    if base.first_down_yards != target.first_down_yards {
        overrides.push(ConfigOverride::FirstDownYards(target.first_down_yards));
    }
    if base.kickoff_yardline != target.kickoff_yardline {
        overrides.push(ConfigOverride::KickoffYardline(target.kickoff_yardline));
    }
    if base.safety_kickoff_yardline != target.safety_kickoff_yardline {
        overrides.push(ConfigOverride::SafetyKickoffYardline(
            target.safety_kickoff_yardline,
        ));
    }
    if base.touchback_yardline != target.touchback_yardline {
        overrides.push(ConfigOverride::TouchbackYardline(target.touchback_yardline));
    }
    if base.kickoff_touchback_yardline != target.kickoff_touchback_yardline {
        overrides.push(ConfigOverride::KickoffTouchbackYardline(
            target.kickoff_touchback_yardline,
        ));
    }
    if base.punt_touchback_yardline != target.punt_touchback_yardline {
        overrides.push(ConfigOverride::PuntTouchbackYardline(
            target.punt_touchback_yardline,
        ));
    }
    if base.conversion_yardline_1pt != target.conversion_yardline_1pt {
        overrides.push(ConfigOverride::ConversionYardline1Pt(
            target.conversion_yardline_1pt,
        ));
    }
    if base.conversion_yardline_2pt != target.conversion_yardline_2pt {
        overrides.push(ConfigOverride::ConversionYardline2Pt(
            target.conversion_yardline_2pt,
        ));
    }
    if base.conversion_yardline_3pt != target.conversion_yardline_3pt {
        overrides.push(ConfigOverride::ConversionYardline3Pt(
            target.conversion_yardline_3pt,
        ));
    }
    if base.kansas_ot_yardline != target.kansas_ot_yardline {
        overrides.push(ConfigOverride::KansasOtYardline(target.kansas_ot_yardline));
    }
    if base.quarters != target.quarters {
        overrides.push(ConfigOverride::Quarters(target.quarters));
    }
    if base.quarter_seconds != target.quarter_seconds {
        overrides.push(ConfigOverride::QuarterSeconds(target.quarter_seconds));
    }
    if base.timeouts_per_half != target.timeouts_per_half {
        overrides.push(ConfigOverride::TimeoutsPerHalf(target.timeouts_per_half));
    }
    if base.ot_period_seconds != target.ot_period_seconds {
        overrides.push(ConfigOverride::OtPeriodSeconds(target.ot_period_seconds));
    }
    if base.ot_timeouts != target.ot_timeouts {
        overrides.push(ConfigOverride::OtTimeouts(target.ot_timeouts));
    }
    if base.play_clock_seconds != target.play_clock_seconds {
        overrides.push(ConfigOverride::PlayClockSeconds(target.play_clock_seconds));
    }
    if base.max_ot_periods != target.max_ot_periods {
        overrides.push(ConfigOverride::MaxOtPeriods(target.max_ot_periods));
    }
    if base.touchdown_points != target.touchdown_points {
        overrides.push(ConfigOverride::TouchdownPoints(target.touchdown_points));
    }
    if base.field_goal_points != target.field_goal_points {
        overrides.push(ConfigOverride::FieldGoalPoints(target.field_goal_points));
    }
    if base.safety_points != target.safety_points {
        overrides.push(ConfigOverride::SafetyPoints(target.safety_points));
    }
    if base.pat_kick_points != target.pat_kick_points {
        overrides.push(ConfigOverride::PatKickPoints(target.pat_kick_points));
    }
    if base.pat_defense_points != target.pat_defense_points {
        overrides.push(ConfigOverride::PatDefensePoints(target.pat_defense_points));
    }
    if base.pat_safety_points != target.pat_safety_points {
        overrides.push(ConfigOverride::PatSafetyPoints(target.pat_safety_points));
    }
    if base.rouge_points != target.rouge_points {
        overrides.push(ConfigOverride::RougePoints(target.rouge_points));
    }
    if base.two_forward_passes != target.two_forward_passes {
        overrides.push(ConfigOverride::TwoForwardPasses(target.two_forward_passes));
    }
    if base.sacks_are_rushes != target.sacks_are_rushes {
        overrides.push(ConfigOverride::SacksAreRushes(target.sacks_are_rushes));
    }
    if base.kickoffs_enabled != target.kickoffs_enabled {
        overrides.push(ConfigOverride::KickoffsEnabled(target.kickoffs_enabled));
    }
    if base.xfl_kickoff != target.xfl_kickoff {
        overrides.push(ConfigOverride::XflKickoff(target.xfl_kickoff));
    }
    if base.drop_kick_enabled != target.drop_kick_enabled {
        overrides.push(ConfigOverride::DropKickEnabled(target.drop_kick_enabled));
    }
    if base.rouges_enabled != target.rouges_enabled {
        overrides.push(ConfigOverride::RougesEnabled(target.rouges_enabled));
    }
    if base.punting_enabled != target.punting_enabled {
        overrides.push(ConfigOverride::PuntingEnabled(target.punting_enabled));
    }
    if base.onside_punt_enabled != target.onside_punt_enabled {
        overrides.push(ConfigOverride::OnsidePuntEnabled(target.onside_punt_enabled));
    }
    if base.fair_catch_enabled != target.fair_catch_enabled {
        overrides.push(ConfigOverride::FairCatchEnabled(target.fair_catch_enabled));
    }
    if base.special_onside_play != target.special_onside_play {
        overrides.push(ConfigOverride::SpecialOnsidePlay(target.special_onside_play));
    }
    if base.xfl_pat != target.xfl_pat {
        overrides.push(ConfigOverride::XflPat(target.xfl_pat));
    }
    if base.overtime != target.overtime {
        overrides.push(ConfigOverride::Overtime(target.overtime));
    }
    overrides
}

// ==========================================================================
// Template catalog
// ==========================================================================

/// Neutral parameter set every template starts from. NFL field geometry
/// and scoring with no overtime selected.
static CANONICAL: Lazy<RulesConfiguration> = Lazy::new(|| RulesConfiguration {
    field_length: 100,
    end_zone_length: 10,
    downs: 4,
    first_down_yards: 10,
    kickoff_yardline: 35,
    safety_kickoff_yardline: 20,
    touchback_yardline: 20,
    kickoff_touchback_yardline: 25,
    punt_touchback_yardline: 20,
    conversion_yardline_1pt: 15,
    conversion_yardline_2pt: 2,
    conversion_yardline_3pt: None,
    kansas_ot_yardline: None,
    quarters: 4,
    quarter_seconds: 900,
    timeouts_per_half: 3,
    ot_period_seconds: 600,
    ot_timeouts: 2,
    play_clock_seconds: 40,
    max_ot_periods: None,
    touchdown_points: 6,
    field_goal_points: 3,
    safety_points: 2,
    pat_kick_points: 1,
    pat_defense_points: 2,
    pat_safety_points: 1,
    rouge_points: 0,
    two_forward_passes: false,
    sacks_are_rushes: false,
    kickoffs_enabled: true,
    xfl_kickoff: false,
    drop_kick_enabled: true,
    rouges_enabled: false,
    punting_enabled: true,
    onside_punt_enabled: false,
    fair_catch_enabled: true,
    special_onside_play: false,
    xfl_pat: false,
    overtime: None,
});

static TEMPLATES: Lazy<HashMap<BaseRuleset, Vec<ConfigOverride>>> = Lazy::new(|| {
    let mut templates = HashMap::new();

    templates.insert(
        BaseRuleset::Nfl,
        vec![
            ConfigOverride::Overtime(Some(OvertimeProcedure::ModifiedSuddenDeath)),
            ConfigOverride::MaxOtPeriods(Some(1)),
        ],
    );

    // Untimed alternating possessions, two-point shootout from the third
    // period on.
    templates.insert(
        BaseRuleset::Ncaa,
        vec![
            ConfigOverride::ConversionYardline1Pt(3),
            ConfigOverride::ConversionYardline2Pt(3),
            ConfigOverride::OtPeriodSeconds(0),
            ConfigOverride::OtTimeouts(1),
            ConfigOverride::SacksAreRushes(true),
            ConfigOverride::Overtime(Some(OvertimeProcedure::Ncaa {
                periods_until_shootout: 2,
            })),
        ],
    );

    templates.insert(
        BaseRuleset::Cfl,
        vec![
            ConfigOverride::FieldLength(110),
            ConfigOverride::EndZoneLength(20),
            ConfigOverride::Downs(3),
            ConfigOverride::KickoffYardline(30),
            ConfigOverride::SafetyKickoffYardline(25),
            ConfigOverride::ConversionYardline1Pt(25),
            ConfigOverride::ConversionYardline2Pt(3),
            ConfigOverride::TimeoutsPerHalf(1),
            ConfigOverride::PlayClockSeconds(20),
            ConfigOverride::RougesEnabled(true),
            ConfigOverride::RougePoints(1),
            ConfigOverride::FairCatchEnabled(false),
            ConfigOverride::OnsidePuntEnabled(true),
            ConfigOverride::Overtime(Some(OvertimeProcedure::Kansas)),
            ConfigOverride::KansasOtYardline(Some(35)),
            ConfigOverride::MaxOtPeriods(Some(2)),
        ],
    );

    templates.insert(
        BaseRuleset::Xfl2020,
        vec![
            ConfigOverride::KickoffYardline(30),
            ConfigOverride::KickoffTouchbackYardline(35),
            ConfigOverride::ConversionYardline1Pt(2),
            ConfigOverride::ConversionYardline2Pt(5),
            ConfigOverride::ConversionYardline3Pt(Some(10)),
            ConfigOverride::PlayClockSeconds(25),
            ConfigOverride::XflKickoff(true),
            ConfigOverride::XflPat(true),
            ConfigOverride::TwoForwardPasses(true),
            ConfigOverride::FairCatchEnabled(false),
            ConfigOverride::SpecialOnsidePlay(true),
            ConfigOverride::Overtime(Some(OvertimeProcedure::Xfl {
                min_periods: 5,
                set_periods: 5,
            })),
        ],
    );

    templates.insert(
        BaseRuleset::Xfl2023,
        vec![
            ConfigOverride::KickoffYardline(30),
            ConfigOverride::KickoffTouchbackYardline(35),
            ConfigOverride::ConversionYardline1Pt(2),
            ConfigOverride::ConversionYardline2Pt(5),
            ConfigOverride::ConversionYardline3Pt(Some(10)),
            ConfigOverride::PlayClockSeconds(25),
            ConfigOverride::XflKickoff(true),
            ConfigOverride::XflPat(true),
            ConfigOverride::FairCatchEnabled(false),
            ConfigOverride::SpecialOnsidePlay(true),
            ConfigOverride::Overtime(Some(OvertimeProcedure::Xfl {
                min_periods: 3,
                set_periods: 3,
            })),
        ],
    );

    // No kickoffs at all; possession opens at the touchback spot and the
    // onside attempt is a scrimmage play.
    templates.insert(
        BaseRuleset::Aaf,
        vec![
            ConfigOverride::KickoffsEnabled(false),
            ConfigOverride::XflPat(true),
            ConfigOverride::PlayClockSeconds(35),
            ConfigOverride::SpecialOnsidePlay(true),
            ConfigOverride::Overtime(Some(OvertimeProcedure::Kansas)),
            ConfigOverride::KansasOtYardline(Some(10)),
            ConfigOverride::MaxOtPeriods(Some(1)),
        ],
    );

    templates.insert(
        BaseRuleset::Ufl2024,
        vec![
            ConfigOverride::KickoffYardline(20),
            ConfigOverride::KickoffTouchbackYardline(35),
            ConfigOverride::ConversionYardline1Pt(2),
            ConfigOverride::ConversionYardline2Pt(5),
            ConfigOverride::ConversionYardline3Pt(Some(10)),
            ConfigOverride::PlayClockSeconds(35),
            ConfigOverride::XflKickoff(true),
            ConfigOverride::XflPat(true),
            ConfigOverride::SpecialOnsidePlay(true),
            ConfigOverride::Overtime(Some(OvertimeProcedure::Xfl {
                min_periods: 3,
                set_periods: 3,
            })),
        ],
    );

    templates.insert(
        BaseRuleset::HighSchool,
        vec![
            ConfigOverride::QuarterSeconds(720),
            ConfigOverride::KickoffYardline(40),
            ConfigOverride::KickoffTouchbackYardline(20),
            ConfigOverride::ConversionYardline1Pt(3),
            ConfigOverride::ConversionYardline2Pt(3),
            ConfigOverride::PlayClockSeconds(25),
            ConfigOverride::SacksAreRushes(true),
            ConfigOverride::OtPeriodSeconds(0),
            ConfigOverride::Overtime(Some(OvertimeProcedure::Kansas)),
            ConfigOverride::KansasOtYardline(Some(10)),
        ],
    );

    templates
});

/// A copy of the canonical parameter set.
pub fn canonical() -> RulesConfiguration {
    CANONICAL.clone()
}

/// The catalog's overrides for `base`, in application order.
pub fn template_overrides(base: BaseRuleset) -> &'static [ConfigOverride] {
    TEMPLATES.get(&base).map(Vec::as_slice).unwrap_or(&[])
}

/// Builds a configuration by applying the template for `base` and then the
/// caller's `overrides` on top of the canonical set. Later overrides win.
pub fn build_config(base: BaseRuleset, overrides: &[ConfigOverride]) -> RulesConfiguration {
    let mut cfg = canonical();
    for adjustment in template_overrides(base) {
        adjustment.apply_to(&mut cfg);
    }
    for adjustment in overrides {
        adjustment.apply_to(&mut cfg);
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rules::validate_config;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_template_builds_a_clean_config() {
        for base in BaseRuleset::iter() {
            let cfg = build_config(base, &[]);
            assert!(
                validate_config(&cfg).is_empty(),
                "{} template should validate clean",
                base.display_name()
            );
        }
    }

    #[test]
    fn test_cfl_template_changes_the_field() {
        let cfl = build_config(BaseRuleset::Cfl, &[]);

        assert_eq!(cfl.field_length, 110);
        assert_eq!(cfl.end_zone_length, 20);
        assert_eq!(cfl.downs, 3);
        assert!(cfl.rouges_enabled);
        assert_eq!(cfl.rouge_points, 1);
        assert_eq!(cfl.overtime, Some(OvertimeProcedure::Kansas));
    }

    #[test]
    fn test_caller_overrides_apply_after_the_template() {
        let cfg = build_config(
            BaseRuleset::Nfl,
            &[ConfigOverride::Downs(3), ConfigOverride::Overtime(None)],
        );

        assert_eq!(cfg.downs, 3);
        assert_eq!(cfg.overtime, None);
        assert_eq!(cfg.field_length, 100);
    }

    #[test]
    fn test_diff_then_apply_reproduces_the_target() {
        let nfl = build_config(BaseRuleset::Nfl, &[]);
        let cfl = build_config(BaseRuleset::Cfl, &[]);

        let delta = diff(&nfl, &cfl);
        assert!(!delta.is_empty());

        let mut rebuilt = nfl;
        for adjustment in &delta {
            adjustment.apply_to(&mut rebuilt);
        }
        assert_eq!(rebuilt, cfl);
    }

    #[test]
    fn test_diff_of_identical_configs_is_empty() {
        let cfg = build_config(BaseRuleset::HighSchool, &[]);
        assert!(diff(&cfg, &cfg.clone()).is_empty());
    }

    #[test]
    fn test_override_serializes_as_param_value_pair() {
        let json = serde_json::to_value(ConfigOverride::ConversionYardline3Pt(Some(10))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"param": "conversion_yardline_3pt", "value": 10})
        );

        let json = serde_json::to_value(ConfigOverride::Downs(3)).unwrap();
        assert_eq!(json, serde_json::json!({"param": "downs", "value": 3}));
    }

    #[test]
    fn test_default_configuration_is_canonical() {
        assert_eq!(RulesConfiguration::default(), canonical());
    }
}
