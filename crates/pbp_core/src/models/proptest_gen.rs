//! Property-based generators for chart types.
//!
//! Strategies here deliberately produce some incoherent values, for
//! example overtime payloads of zero or yardlines past the end line, so
//! the validation tests can characterize exactly what the checkers accept.

use proptest::prelude::*;

use crate::models::document::{GameDocument, TeamInfo};
use crate::models::play::{
    ConversionAttemptPlay, FieldGoalPlay, PassPlay, Play, PlayBase, PlayerReference, RunDirection,
    RushPlay, TeamSide,
};
use crate::models::rules::{
    build_config, validate_config, BaseRuleset, ConfigRow, OvertimeProcedure, RulesConfiguration,
};
use crate::scoring::points_scored;

// Generators for basic types

pub fn team_side_strategy() -> impl Strategy<Value = TeamSide> {
    prop_oneof![Just(TeamSide::Home), Just(TeamSide::Away)]
}

pub fn player_reference_strategy() -> impl Strategy<Value = PlayerReference> {
    (
        "[A-Z]{2,3}-[0-9]{1,2}", // player_id
        "[A-Z]{2,3}",            // team_id
        prop::option::of(0u16..=99),
    )
        .prop_map(|(player_id, team_id, number)| {
            let mut player = PlayerReference::new(player_id, team_id);
            player.player_num = number;
            player
        })
}

pub fn run_direction_strategy() -> impl Strategy<Value = RunDirection> {
    prop_oneof![
        Just(RunDirection::LeftEnd),
        Just(RunDirection::LeftTackle),
        Just(RunDirection::LeftGuard),
        Just(RunDirection::Middle),
        Just(RunDirection::RightGuard),
        Just(RunDirection::RightTackle),
        Just(RunDirection::RightEnd),
    ]
}

// Generators for the rules model

pub fn base_ruleset_strategy() -> impl Strategy<Value = BaseRuleset> {
    prop_oneof![
        Just(BaseRuleset::Nfl),
        Just(BaseRuleset::Ncaa),
        Just(BaseRuleset::Cfl),
        Just(BaseRuleset::Xfl2020),
        Just(BaseRuleset::Xfl2023),
        Just(BaseRuleset::Aaf),
        Just(BaseRuleset::Ufl2024),
        Just(BaseRuleset::HighSchool),
    ]
}

/// Overtime choices including payloads of zero, which are invalid.
pub fn overtime_strategy() -> impl Strategy<Value = Option<OvertimeProcedure>> {
    prop_oneof![
        Just(None),
        Just(Some(OvertimeProcedure::SuddenDeath)),
        Just(Some(OvertimeProcedure::ModifiedSuddenDeath)),
        Just(Some(OvertimeProcedure::SuperModifiedSuddenDeath)),
        Just(Some(OvertimeProcedure::Kansas)),
        Just(Some(OvertimeProcedure::FullPeriod)),
        (0u8..=4).prop_map(|periods_until_shootout| Some(OvertimeProcedure::Ncaa {
            periods_until_shootout
        })),
        (0u8..=4, 0u8..=4).prop_map(|(min_periods, set_periods)| Some(OvertimeProcedure::Xfl {
            min_periods,
            set_periods
        })),
    ]
}

/// A template configuration with the overtime choice and one yardline
/// perturbed, valid or not.
pub fn rules_configuration_strategy() -> impl Strategy<Value = RulesConfiguration> {
    (base_ruleset_strategy(), overtime_strategy(), 0u16..=130).prop_map(
        |(base, overtime, kickoff_yardline)| {
            let mut cfg = build_config(base, &[]);
            cfg.overtime = overtime;
            cfg.kickoff_yardline = kickoff_yardline;
            cfg
        },
    )
}

// Generators for plays

pub fn play_base_strategy() -> impl Strategy<Value = PlayBase> {
    (
        team_side_strategy(),
        prop::option::of((1u8..=4, 1u32..=25, -10i32..=100)),
        1u32..=5,              // quarter
        (0u32..=8, 0u32..=8),  // scores in touchdown-sized steps
    )
        .prop_map(|(possession, situation, quarter, (home, away))| {
            let mut base = PlayBase::new().with_possession(possession);
            if let Some((down, distance, yardline_start)) = situation {
                base = base.with_situation(down, distance, yardline_start);
            }
            let half = if quarter <= 2 { 1 } else { 2 };
            base.with_sequence(quarter, half, 1).with_score(home * 7, away * 7)
        })
}

fn play_shape_strategy() -> impl Strategy<Value = Play> {
    prop_oneof![
        (prop::option::of(player_reference_strategy()), any::<bool>()).prop_map(
            |(receiver, completed)| {
                let mut pass = PassPlay::default();
                pass.receiver = receiver;
                pass.is_completed_pass = completed;
                Play::Pass(pass)
            }
        ),
        (
            prop::option::of(player_reference_strategy()),
            prop::option::of(run_direction_strategy())
        )
            .prop_map(|(rusher, run_direction)| {
                let mut rush = RushPlay::default();
                rush.rusher = rusher;
                rush.run_direction = run_direction;
                Play::Rush(rush)
            }),
        Just(Play::punt()),
        (prop::option::of(10u32..=60), any::<bool>()).prop_map(|(distance, made)| {
            let mut field_goal = FieldGoalPlay::default();
            field_goal.fg_attempt_distance = distance;
            field_goal.is_fg_made = made;
            Play::FieldGoal(field_goal)
        }),
        Just(Play::xp()),
        (prop::option::of(1u8..=3), any::<bool>()).prop_map(|(points, successful)| {
            let mut attempt = ConversionAttemptPlay::default();
            attempt.points_attempted = points;
            attempt.is_successful = successful;
            Play::ConversionAttempt(attempt)
        }),
        any::<bool>().prop_map(Play::kickoff),
        Just(Play::fair_catch_kick()),
    ]
}

pub fn play_strategy() -> impl Strategy<Value = Play> {
    (play_base_strategy(), play_shape_strategy()).prop_map(|(base, play)| play.with_base(base))
}

// Generator for whole documents

pub fn game_document_strategy() -> impl Strategy<Value = GameDocument> {
    (
        base_ruleset_strategy(),
        "[a-z]{3,8}-20[0-9]{2}", // league id
        prop::collection::vec(play_strategy(), 0..=12),
    )
        .prop_map(|(base, league_id, plays)| {
            let mut doc = GameDocument::new(
                league_id,
                TeamInfo::new("HOM", "Home Team"),
                TeamInfo::new("AWY", "Away Team"),
                build_config(base, &[]),
            );
            for play in plays {
                doc.append_play(play);
            }
            doc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The closed-form acceptance predicate for configurations derived
    /// from a template: payloads positive, yardlines on the field.
    fn config_is_coherent(cfg: &RulesConfiguration) -> bool {
        let payload_ok = match cfg.overtime {
            Some(OvertimeProcedure::Ncaa {
                periods_until_shootout,
            }) => periods_until_shootout >= 1,
            Some(OvertimeProcedure::Xfl {
                min_periods,
                set_periods,
            }) => min_periods >= 1 && set_periods >= 1,
            _ => true,
        };
        let yardlines_ok = cfg
            .yardline_fields()
            .iter()
            .all(|(_, value)| *value <= cfg.field_length);
        payload_ok && yardlines_ok
    }

    proptest! {
        #[test]
        fn test_config_validation_matches_the_coherence_predicate(
            cfg in rules_configuration_strategy()
        ) {
            prop_assert_eq!(validate_config(&cfg).is_empty(), config_is_coherent(&cfg));
        }

        #[test]
        fn test_valid_configs_survive_the_row_roundtrip(
            base in base_ruleset_strategy(),
            overtime in overtime_strategy()
        ) {
            let mut cfg = build_config(base, &[]);
            cfg.overtime = overtime;
            prop_assume!(validate_config(&cfg).is_empty());

            let row = ConfigRow::from(&cfg);
            let back = RulesConfiguration::try_from(&row);
            prop_assert_eq!(back, Ok(cfg));
        }

        #[test]
        fn test_play_json_roundtrip(play in play_strategy()) {
            let json = serde_json::to_string(&play).unwrap();
            let back: Play = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, play);
        }

        #[test]
        fn test_play_tag_follows_the_variant(play in play_strategy()) {
            let value = serde_json::to_value(&play).unwrap();
            prop_assert_eq!(value["play_type"].as_str(), Some(play.play_type()));
        }

        #[test]
        fn test_document_json_roundtrip(doc in game_document_strategy()) {
            let json = doc.to_json_pretty().unwrap();
            let back = GameDocument::from_json(&json).unwrap();
            prop_assert_eq!(back, doc);
        }

        #[test]
        fn test_validation_is_idempotent(doc in game_document_strategy()) {
            let first = doc.validate();
            let second = doc.validate();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_points_never_go_to_both_sides(
            play in play_strategy(),
            base in base_ruleset_strategy()
        ) {
            let cfg = build_config(base, &[]);
            let delta = points_scored(&play, &cfg);
            prop_assert!(delta.home == 0 || delta.away == 0);
        }
    }
}
