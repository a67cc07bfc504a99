//! Property-based tests for robot name resolution and timestamp humanizing

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use proptest::prelude::*;
use up_robot::directory::{Robot, TokenMeta};
use up_robot::error::ApiError;
use up_robot::robot::age::{humanize, humanize_duration};
use up_robot::robot::resolve_robot;
use uuid::Uuid;

fn roster_from(names: &[String]) -> Vec<Robot> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Robot::new(Uuid::from_u128(i as u128 + 1), name.clone()))
        .collect()
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["bot1", "bot2", "ci", "deploy", "[a-z]{1,6}"]
}

/// A name occurring exactly once resolves to that robot's id
#[test]
fn test_unique_name_resolves_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(proptest::collection::vec(name_strategy(), 0..12), any::<prop::sample::Index>()),
            |(others, insert_at)| {
                let mut names: Vec<String> =
                    others.into_iter().filter(|n| n != "target").collect();
                let position = insert_at.index(names.len() + 1);
                names.insert(position, "target".to_string());
                let roster = roster_from(&names);

                let id = resolve_robot(&roster, "target", "acme").unwrap();
                prop_assert_eq!(id, Uuid::from_u128(position as u128 + 1));
                Ok(())
            },
        )
        .unwrap();
}

/// Two or more robots with the requested name always fail as ambiguous
#[test]
fn test_duplicate_name_is_ambiguous_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(proptest::collection::vec(name_strategy(), 0..12), 2usize..5),
            |(mut names, copies)| {
                names.extend(std::iter::repeat("dup".to_string()).take(copies));
                let roster = roster_from(&names);

                let result = resolve_robot(&roster, "dup", "acme");
                let is_ambiguous = matches!(result, Err(ApiError::AmbiguousRobotName { .. }));
                prop_assert!(is_ambiguous);
                Ok(())
            },
        )
        .unwrap();
}

/// Absence is reported as roster-empty or not-found, never as success
#[test]
fn test_absent_name_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::collection::vec(name_strategy(), 0..12), |names| {
            let roster = roster_from(&names);
            let result = resolve_robot(&roster, "ABSENT", "acme");
            let is_expected = if names.is_empty() {
                matches!(result, Err(ApiError::RobotRosterEmpty { .. }))
            } else {
                matches!(result, Err(ApiError::RobotNotFound { .. }))
            };
            prop_assert!(is_expected);
            Ok(())
        })
        .unwrap();
}

/// Humanize returns a string for any metadata value
#[test]
fn test_humanize_is_total_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::option::of(".*"), |raw| {
            let meta = TokenMeta { created_at: raw };
            let rendered = humanize(&meta, Utc::now());
            prop_assert!(!rendered.is_empty());
            Ok(())
        })
        .unwrap();
}

/// A valid timestamp renders the elapsed time truncated to its largest whole unit
#[test]
fn test_humanize_matches_elapsed_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let now: DateTime<Utc> = DateTime::parse_from_rfc3339("2025-06-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc);

    runner
        .run(&(0i64..10 * 365 * 86400), |elapsed| {
            let created = (now - Duration::seconds(elapsed))
                .to_rfc3339_opts(SecondsFormat::Secs, true);
            let meta = TokenMeta {
                created_at: Some(created),
            };
            let expected = humanize_duration(Duration::seconds(elapsed));
            prop_assert_eq!(humanize(&meta, now), expected.clone());

            let (value, unit) = expected.split_at(expected.len() - 1);
            let value: i64 = value.parse().unwrap();
            let unit_secs = match unit {
                "s" => 1,
                "m" => 60,
                "h" => 3600,
                "d" => 86400,
                "y" => 365 * 86400,
                other => panic!("unexpected unit {}", other),
            };
            prop_assert!(value * unit_secs <= elapsed);
            prop_assert!(elapsed < (value + 1) * unit_secs);
            Ok(())
        })
        .unwrap();
}
