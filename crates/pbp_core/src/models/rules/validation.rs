use std::fmt;

use super::row::ConfigRow;
use super::{OvertimeProcedure, RulesConfiguration};

/// One finding on a rules configuration or its row form.
///
/// Values are widened to `i64` so the same error type covers the typed
/// configuration and raw row columns.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// More than one overtime-procedure flag is true on a row.
    ConflictingOvertimeFlags { set: Vec<&'static str> },
    /// A procedure flag is true while `overtime_enabled` is false.
    OvertimeFlagWhileDisabled { flag: &'static str },
    /// NCAA overtime needs at least one period before the shootout.
    ShootoutPeriodsOutOfRange { value: i64 },
    /// XFL overtime needs at least one minimum and one set period.
    XflPeriodsOutOfRange { min: i64, set: i64 },
    /// A yardline parameter falls outside `[0, field_length]`.
    YardlineOutOfRange {
        field: &'static str,
        value: i64,
        field_length: i64,
    },
    /// A scoring value is negative.
    NegativePoints { field: &'static str, value: i64 },
    /// A structural parameter is zero or negative.
    NonPositive { field: &'static str, value: i64 },
    /// A row column does not fit the typed parameter's storage width.
    ValueOutOfRange { field: &'static str, value: i64 },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::ConflictingOvertimeFlags { set } => {
                write!(
                    f,
                    "Conflicting overtime procedure flags: {}",
                    set.join(", ")
                )
            }
            ConfigurationError::OvertimeFlagWhileDisabled { flag } => {
                write!(
                    f,
                    "Overtime flag {} set while overtime_enabled is false",
                    flag
                )
            }
            ConfigurationError::ShootoutPeriodsOutOfRange { value } => {
                write!(
                    f,
                    "ot_periods_until_shootout must be at least 1, got {}",
                    value
                )
            }
            ConfigurationError::XflPeriodsOutOfRange { min, set } => {
                write!(
                    f,
                    "XFL overtime periods must be at least 1, got min {} and set {}",
                    min, set
                )
            }
            ConfigurationError::YardlineOutOfRange {
                field,
                value,
                field_length,
            } => {
                write!(
                    f,
                    "{} is {} but the field is {} yards long",
                    field, value, field_length
                )
            }
            ConfigurationError::NegativePoints { field, value } => {
                write!(f, "{} cannot be negative, got {}", field, value)
            }
            ConfigurationError::NonPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigurationError::ValueOutOfRange { field, value } => {
                write!(f, "{} value {} does not fit its storage width", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Checks a typed configuration. The typed form cannot express conflicting
/// overtime procedures, so the checks here are the payload and geometry
/// rules that remain representable.
pub fn validate_config(cfg: &RulesConfiguration) -> Vec<ConfigurationError> {
    let mut errors = Vec::new();

    match cfg.overtime {
        Some(OvertimeProcedure::Ncaa {
            periods_until_shootout,
        }) if periods_until_shootout < 1 => {
            errors.push(ConfigurationError::ShootoutPeriodsOutOfRange {
                value: periods_until_shootout as i64,
            });
        }
        Some(OvertimeProcedure::Xfl {
            min_periods,
            set_periods,
        }) if min_periods < 1 || set_periods < 1 => {
            errors.push(ConfigurationError::XflPeriodsOutOfRange {
                min: min_periods as i64,
                set: set_periods as i64,
            });
        }
        _ => {}
    }

    for (field, value) in cfg.yardline_fields() {
        if value > cfg.field_length {
            errors.push(ConfigurationError::YardlineOutOfRange {
                field,
                value: value as i64,
                field_length: cfg.field_length as i64,
            });
        }
    }

    // Unsigned types already rule out negatives; zero still has to go.
    for (field, value) in [
        ("field_length", cfg.field_length as i64),
        ("downs", cfg.downs as i64),
        ("first_down_yards", cfg.first_down_yards as i64),
        ("quarters", cfg.quarters as i64),
        ("quarter_seconds", cfg.quarter_seconds as i64),
    ] {
        if value == 0 {
            errors.push(ConfigurationError::NonPositive { field, value });
        }
    }

    errors
}

/// Checks a raw row before it becomes a typed configuration.
///
/// Rows arrive from untyped storage, so this layer re-checks what the
/// typed form makes unrepresentable: flag exclusivity, the
/// `overtime_enabled` gate, sign, and storage widths.
pub fn validate_row(row: &ConfigRow) -> Vec<ConfigurationError> {
    let mut errors = Vec::new();

    let flags = [
        ("sudden_death_ot", row.sudden_death_ot),
        ("modified_sudden_death_ot", row.modified_sudden_death_ot),
        (
            "super_modified_sudden_death_ot",
            row.super_modified_sudden_death_ot,
        ),
        ("kansas_ot", row.kansas_ot),
        ("ncaa_ot", row.ncaa_ot),
        ("xfl_ot_rule", row.xfl_ot_rule),
        ("full_period_ot", row.full_period_ot),
    ];
    let set: Vec<&'static str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();

    if set.len() > 1 {
        errors.push(ConfigurationError::ConflictingOvertimeFlags { set: set.clone() });
    }
    if !row.overtime_enabled {
        for flag in set.iter().copied() {
            errors.push(ConfigurationError::OvertimeFlagWhileDisabled { flag });
        }
    }

    if row.ncaa_ot {
        let value = row.ot_periods_until_shootout.unwrap_or(0);
        if value < 1 {
            errors.push(ConfigurationError::ShootoutPeriodsOutOfRange { value });
        } else {
            check_width("ot_periods_until_shootout", value, u8::MAX as i64, &mut errors);
        }
    }
    if row.xfl_ot_rule {
        let min = row.min_xfl_ot_periods.unwrap_or(0);
        let set_periods = row.set_xfl_ot_periods.unwrap_or(0);
        if min < 1 || set_periods < 1 {
            errors.push(ConfigurationError::XflPeriodsOutOfRange {
                min,
                set: set_periods,
            });
        } else {
            check_width("min_xfl_ot_periods", min, u8::MAX as i64, &mut errors);
            check_width("set_xfl_ot_periods", set_periods, u8::MAX as i64, &mut errors);
        }
    }

    check_nonpositive("field_length", row.field_length, u16::MAX as i64, &mut errors);
    check_width("end_zone_length", row.end_zone_length, u16::MAX as i64, &mut errors);
    check_nonpositive("downs", row.downs, u8::MAX as i64, &mut errors);
    check_nonpositive(
        "first_down_yards",
        row.first_down_yards,
        u16::MAX as i64,
        &mut errors,
    );
    check_nonpositive("quarters", row.quarters, u8::MAX as i64, &mut errors);
    check_nonpositive(
        "quarter_seconds",
        row.quarter_seconds,
        u32::MAX as i64,
        &mut errors,
    );
    check_width(
        "timeouts_per_half",
        row.timeouts_per_half,
        u8::MAX as i64,
        &mut errors,
    );
    check_width(
        "ot_period_seconds",
        row.ot_period_seconds,
        u32::MAX as i64,
        &mut errors,
    );
    check_width("ot_timeouts", row.ot_timeouts, u8::MAX as i64, &mut errors);
    check_width(
        "play_clock_seconds",
        row.play_clock_seconds,
        u32::MAX as i64,
        &mut errors,
    );
    if let Some(value) = row.max_ot_periods {
        check_width("max_ot_periods", value, u8::MAX as i64, &mut errors);
    }

    for (field, value) in row.yardline_columns() {
        if value < 0 || value > row.field_length {
            errors.push(ConfigurationError::YardlineOutOfRange {
                field,
                value,
                field_length: row.field_length,
            });
        }
    }

    for (field, value) in row.point_columns() {
        if value < 0 {
            errors.push(ConfigurationError::NegativePoints { field, value });
        } else {
            check_width(field, value, u8::MAX as i64, &mut errors);
        }
    }

    errors
}

fn check_nonpositive(
    field: &'static str,
    value: i64,
    max: i64,
    errors: &mut Vec<ConfigurationError>,
) {
    if value <= 0 {
        errors.push(ConfigurationError::NonPositive { field, value });
    } else if value > max {
        errors.push(ConfigurationError::ValueOutOfRange { field, value });
    }
}

fn check_width(field: &'static str, value: i64, max: i64, errors: &mut Vec<ConfigurationError>) {
    if value < 0 || value > max {
        errors.push(ConfigurationError::ValueOutOfRange { field, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rules::{build_config, BaseRuleset};

    #[test]
    fn test_ncaa_shootout_must_wait_at_least_one_period() {
        let mut cfg = build_config(BaseRuleset::Ncaa, &[]);
        cfg.overtime = Some(OvertimeProcedure::Ncaa {
            periods_until_shootout: 0,
        });

        let errors = validate_config(&cfg);
        assert_eq!(
            errors,
            vec![ConfigurationError::ShootoutPeriodsOutOfRange { value: 0 }]
        );
    }

    #[test]
    fn test_xfl_periods_must_be_positive() {
        let mut cfg = build_config(BaseRuleset::Xfl2023, &[]);
        cfg.overtime = Some(OvertimeProcedure::Xfl {
            min_periods: 0,
            set_periods: 3,
        });

        let errors = validate_config(&cfg);
        assert_eq!(
            errors,
            vec![ConfigurationError::XflPeriodsOutOfRange { min: 0, set: 3 }]
        );
    }

    #[test]
    fn test_yardline_beyond_the_field_is_reported() {
        let mut cfg = build_config(BaseRuleset::Nfl, &[]);
        cfg.kickoff_yardline = 120;

        let errors = validate_config(&cfg);
        assert_eq!(
            errors,
            vec![ConfigurationError::YardlineOutOfRange {
                field: "kickoff_yardline",
                value: 120,
                field_length: 100
            }]
        );
    }

    #[test]
    fn test_zero_geometry_is_nonpositive() {
        let mut cfg = build_config(BaseRuleset::Nfl, &[]);
        cfg.downs = 0;

        let errors = validate_config(&cfg);
        assert_eq!(
            errors,
            vec![ConfigurationError::NonPositive {
                field: "downs",
                value: 0
            }]
        );
    }

    #[test]
    fn test_row_rejects_two_procedure_flags() {
        let mut row = ConfigRow::from(&build_config(BaseRuleset::Nfl, &[]));
        row.kansas_ot = true;

        let errors = validate_row(&row);
        assert_eq!(
            errors,
            vec![ConfigurationError::ConflictingOvertimeFlags {
                set: vec!["modified_sudden_death_ot", "kansas_ot"]
            }]
        );
    }

    #[test]
    fn test_row_gates_flags_behind_overtime_enabled() {
        let mut row = ConfigRow::from(&build_config(BaseRuleset::Nfl, &[]));
        row.overtime_enabled = false;

        let errors = validate_row(&row);
        assert_eq!(
            errors,
            vec![ConfigurationError::OvertimeFlagWhileDisabled {
                flag: "modified_sudden_death_ot"
            }]
        );
    }

    #[test]
    fn test_row_ncaa_payload_must_be_present_and_positive() {
        let mut row = ConfigRow::from(&build_config(BaseRuleset::Ncaa, &[]));
        row.ot_periods_until_shootout = Some(0);

        let errors = validate_row(&row);
        assert_eq!(
            errors,
            vec![ConfigurationError::ShootoutPeriodsOutOfRange { value: 0 }]
        );

        row.ot_periods_until_shootout = None;
        let errors = validate_row(&row);
        assert_eq!(
            errors,
            vec![ConfigurationError::ShootoutPeriodsOutOfRange { value: 0 }]
        );
    }

    #[test]
    fn test_row_negative_points_are_reported() {
        let mut row = ConfigRow::from(&build_config(BaseRuleset::Nfl, &[]));
        row.safety_points = -2;

        let errors = validate_row(&row);
        assert_eq!(
            errors,
            vec![ConfigurationError::NegativePoints {
                field: "safety_points",
                value: -2
            }]
        );
    }

    #[test]
    fn test_row_width_overflow_is_reported() {
        let mut row = ConfigRow::from(&build_config(BaseRuleset::Nfl, &[]));
        row.downs = 400;

        let errors = validate_row(&row);
        assert_eq!(
            errors,
            vec![ConfigurationError::ValueOutOfRange {
                field: "downs",
                value: 400
            }]
        );
    }

    #[test]
    fn test_row_from_every_template_is_clean() {
        for base in [
            BaseRuleset::Nfl,
            BaseRuleset::Ncaa,
            BaseRuleset::Cfl,
            BaseRuleset::Xfl2020,
            BaseRuleset::Xfl2023,
            BaseRuleset::Aaf,
            BaseRuleset::Ufl2024,
            BaseRuleset::HighSchool,
        ] {
            let row = ConfigRow::from(&build_config(base, &[]));
            assert!(
                validate_row(&row).is_empty(),
                "row from {:?} should be clean",
                base
            );
        }
    }

    #[test]
    fn test_error_display_names_the_field() {
        let error = ConfigurationError::YardlineOutOfRange {
            field: "kansas_ot_yardline",
            value: 140,
            field_length: 110,
        };
        assert_eq!(
            error.to_string(),
            "kansas_ot_yardline is 140 but the field is 110 yards long"
        );
    }
}
