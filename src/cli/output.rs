//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
///
/// Upstream and account-kind failures are prefixed with the step that failed and the robot
/// and account of the run; their message is kept as is. Resolution failures already name both.
pub fn map_error(e: &ApiError) -> String {
    match (e, e.subject()) {
        (ApiError::Upstream { .. } | ApiError::NotAnOrganization { .. }, Some((robot, account))) => {
            format!(
                "{} failed for robot {} in {}: {}",
                e.step_label(),
                robot,
                account,
                e
            )
        }
        _ => e.to_string(),
    }
}
