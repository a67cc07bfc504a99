//! Integration tests for `up robot token list` through the run context

use std::sync::Arc;
use up_robot::cli::{Commands, RobotCommands, RunContext, TokenCommands};
use up_robot::directory::{Account, Token};
use up_robot::error::{ApiError, Step};
use uuid::Uuid;

use crate::integration::{acme_config, robot, robot_id, seconds_ago, FakeDirectory};

fn list_command(robot_name: &str, format: &str) -> Commands {
    Commands::Robot {
        command: RobotCommands::Token {
            command: TokenCommands::List {
                robot_name: robot_name.to_string(),
                format: format.to_string(),
            },
        },
    }
}

fn run(directory: Arc<FakeDirectory>, command: &Commands) -> (Result<(), ApiError>, String) {
    let ctx = RunContext::with_client(acme_config(), directory);
    let mut out = Vec::new();
    let result = ctx.execute(command, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_single_robot_resolves_and_lists_tokens() {
    let token_id = Uuid::from_u128(0x71);
    let directory = Arc::new(FakeDirectory::acme(
        vec![robot(1, "bot1")],
        vec![Token::new(token_id, Some("tok1"), Some(&seconds_ago(7200)))],
    ));

    let (result, output) = run(directory.clone(), &list_command("bot1", "text"));
    result.unwrap();

    let lines: Vec<Vec<&str>> = output
        .lines()
        .map(|l| l.split_whitespace().collect())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], vec!["NAME", "ID", "CREATED"]);
    assert_eq!(lines[1], vec!["tok1", token_id.to_string().as_str(), "2h"]);

    assert_eq!(
        directory.calls(),
        vec![
            "get_account:acme".to_string(),
            "list_robots:1".to_string(),
            format!("list_tokens:{}", robot_id(1)),
        ]
    );
}

#[test]
fn test_duplicate_robot_names_fail_without_listing_tokens() {
    let directory = Arc::new(FakeDirectory::acme(
        vec![robot(1, "bot1"), robot(2, "bot1")],
        vec![],
    ));

    let (result, output) = run(directory.clone(), &list_command("bot1", "text"));
    match result {
        Err(ApiError::AmbiguousRobotName { robot, account }) => {
            assert_eq!(robot, "bot1");
            assert_eq!(account, "acme");
        }
        other => panic!("expected ambiguity, got {:?}", other),
    }
    assert!(output.is_empty());
    assert_eq!(directory.calls().len(), 2);
}

#[test]
fn test_no_tokens_prints_notice() {
    let directory = Arc::new(FakeDirectory::acme(vec![robot(1, "bot1")], vec![]));

    let (result, output) = run(directory, &list_command("bot1", "text"));
    result.unwrap();
    assert_eq!(output, "No tokens found for robot bot1 in acme\n");
}

#[test]
fn test_missing_created_at_renders_placeholder() {
    let token_id = Uuid::from_u128(0x72);
    let directory = Arc::new(FakeDirectory::acme(
        vec![robot(1, "bot1")],
        vec![Token::new(token_id, Some("tok1"), None)],
    ));

    let (result, output) = run(directory, &list_command("bot1", "text"));
    result.unwrap();
    let row: Vec<&str> = output.lines().nth(1).unwrap().split_whitespace().collect();
    assert_eq!(row, vec!["tok1", token_id.to_string().as_str(), "n/a"]);
}

#[test]
fn test_malformed_created_at_does_not_fail_the_run() {
    let directory = Arc::new(FakeDirectory::acme(
        vec![robot(1, "bot1")],
        vec![
            Token::new(Uuid::from_u128(1), Some("good"), Some(&seconds_ago(90))),
            Token::new(Uuid::from_u128(2), Some("bad"), Some("last tuesday")),
        ],
    ));

    let (result, output) = run(directory, &list_command("bot1", "text"));
    result.unwrap();
    let rows: Vec<Vec<&str>> = output
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().collect())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][2], "1m");
    assert_eq!(rows[1][2], "n/a");
}

#[test]
fn test_json_output() {
    let token_id = Uuid::from_u128(0x73);
    let directory = Arc::new(FakeDirectory::acme(
        vec![robot(1, "bot1")],
        vec![Token::new(token_id, Some("tok1"), Some(&seconds_ago(3 * 86400 + 60)))],
    ));

    let (result, output) = run(directory, &list_command("bot1", "json"));
    result.unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["name"], "tok1");
    assert_eq!(value[0]["id"], token_id.to_string());
    assert_eq!(value[0]["created"], "3d");
}

#[test]
fn test_user_account_is_rejected() {
    let directory = Arc::new(FakeDirectory {
        account: Some(Account::user("acme")),
        ..Default::default()
    });

    let (result, _) = run(directory.clone(), &list_command("bot1", "text"));
    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::NotAnOrganization { .. }));
    let message = up_robot::cli::map_error(&err);
    assert!(message.starts_with("account lookup failed for robot bot1 in acme: "));
    assert_eq!(directory.calls(), vec!["get_account:acme".to_string()]);
}

#[test]
fn test_robot_not_found_and_empty_roster_share_message() {
    let empty = Arc::new(FakeDirectory::acme(vec![], vec![]));
    let (empty_result, _) = run(empty, &list_command("bot1", "text"));
    let empty_err = empty_result.unwrap_err();
    assert!(matches!(empty_err, ApiError::RobotRosterEmpty { .. }));

    let other = Arc::new(FakeDirectory::acme(vec![robot(1, "ci")], vec![]));
    let (other_result, _) = run(other, &list_command("bot1", "text"));
    let missing_err = other_result.unwrap_err();
    assert!(matches!(missing_err, ApiError::RobotNotFound { .. }));

    assert_eq!(empty_err.to_string(), missing_err.to_string());
}

#[test]
fn test_roster_failure_is_upstream() {
    let directory = Arc::new(FakeDirectory {
        roster_error: Some("connection reset".to_string()),
        ..FakeDirectory::acme(vec![], vec![])
    });

    let (result, output) = run(directory, &list_command("bot1", "text"));
    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Upstream { step: Step::Roster, .. }));
    assert_eq!(err.to_string(), "request failed: connection reset");
    assert_eq!(
        up_robot::cli::map_error(&err),
        "robot roster lookup failed for robot bot1 in acme: request failed: connection reset"
    );
    assert!(output.is_empty());
}

#[test]
fn test_missing_account_is_config_error() {
    let directory = Arc::new(FakeDirectory::acme(vec![robot(1, "bot1")], vec![]));
    let ctx = RunContext::with_client(Default::default(), directory.clone());
    let mut out = Vec::new();
    let err = ctx
        .execute(&list_command("bot1", "text"), &mut out)
        .unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
    assert!(directory.calls().is_empty());
}
