//! Error types for robot token listing.

use std::fmt;
use thiserror::Error;

/// Remote round trip in which an upstream failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Account,
    Roster,
    Tokens,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Account => write!(f, "account lookup"),
            Step::Roster => write!(f, "robot roster lookup"),
            Step::Tokens => write!(f, "token listing"),
        }
    }
}

/// Failures reported by the directory services (accounts, organizations, robots).
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("request cancelled")]
    Cancelled,
}

/// Failures of a `robot token list` run.
///
/// Every variant is fatal for the run. Malformed token metadata never produces one of
/// these; it degrades to a placeholder during formatting instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("robots are not currently supported for user accounts (account: {account})")]
    NotAnOrganization { robot: String, account: String },

    #[error("could not find robot {robot} in {account}")]
    RobotRosterEmpty { robot: String, account: String },

    #[error("could not find robot {robot} in {account}")]
    RobotNotFound { robot: String, account: String },

    #[error("found multiple robots with name {robot} in {account}")]
    AmbiguousRobotName { robot: String, account: String },

    /// A remote call failed, timed out, or was cancelled. Displays the underlying message as is.
    #[error("{source}")]
    Upstream {
        step: Step,
        robot: String,
        account: String,
        #[source]
        source: DirectoryError,
    },

    #[error("failed to render output: {0}")]
    Presentation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    pub fn upstream(step: Step, robot: &str, account: &str, source: DirectoryError) -> Self {
        ApiError::Upstream {
            step,
            robot: robot.to_string(),
            account: account.to_string(),
            source,
        }
    }

    /// Short label for the part of the run that failed.
    pub fn step_label(&self) -> String {
        match self {
            ApiError::NotAnOrganization { .. } => Step::Account.to_string(),
            ApiError::RobotRosterEmpty { .. }
            | ApiError::RobotNotFound { .. }
            | ApiError::AmbiguousRobotName { .. } => "robot resolution".to_string(),
            ApiError::Upstream { step, .. } => step.to_string(),
            ApiError::Presentation(_) => "rendering".to_string(),
            ApiError::ConfigError(_) => "configuration".to_string(),
        }
    }

    /// Robot and account named by the run that failed, when the variant carries them.
    pub fn subject(&self) -> Option<(&str, &str)> {
        match self {
            ApiError::NotAnOrganization { robot, account }
            | ApiError::RobotRosterEmpty { robot, account }
            | ApiError::RobotNotFound { robot, account }
            | ApiError::AmbiguousRobotName { robot, account }
            | ApiError::Upstream { robot, account, .. } => Some((robot.as_str(), account.as_str())),
            ApiError::Presentation(_) | ApiError::ConfigError(_) => None,
        }
    }

    /// True for the two variants that signal the robot is absent from the roster.
    pub fn is_robot_absent(&self) -> bool {
        matches!(
            self,
            ApiError::RobotRosterEmpty { .. } | ApiError::RobotNotFound { .. }
        )
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Presentation(err.to_string())
    }
}
