//! Robot name resolution.
//!
//! The directory does not treat robot names as unique keys, so a name only resolves when
//! exactly one robot in the roster carries it. Duplicates are an error instead of picking
//! the first match.

use crate::directory::{Robot, RobotId};
use crate::error::ApiError;

/// Resolve `name` to the id of the single robot in `roster` that carries it.
///
/// `account` is only used for error context. Scanning stops at the second match.
pub fn resolve_robot(roster: &[Robot], name: &str, account: &str) -> Result<RobotId, ApiError> {
    if roster.is_empty() {
        return Err(ApiError::RobotRosterEmpty {
            robot: name.to_string(),
            account: account.to_string(),
        });
    }

    let mut candidate: Option<RobotId> = None;
    for robot in roster.iter().filter(|r| r.name == name) {
        if candidate.is_some() {
            return Err(ApiError::AmbiguousRobotName {
                robot: name.to_string(),
                account: account.to_string(),
            });
        }
        candidate = Some(robot.id);
    }

    candidate.ok_or_else(|| ApiError::RobotNotFound {
        robot: name.to_string(),
        account: account.to_string(),
    })
}
