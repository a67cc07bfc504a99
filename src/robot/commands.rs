//! Robot token command service: account → roster → robot → tokens → presentation.
//!
//! Each remote call is issued only after the previous one completed. A failure at any
//! step ends the run; nothing is presented unless every fetch succeeded.

use crate::directory::{
    AccountKind, AccountService, Organization, OrganizationService, RobotId, RobotService,
    TokenSet,
};
use crate::error::{ApiError, DirectoryError, Step};
use crate::robot::resolve::resolve_robot;
use crate::robot::tokens::{build_rows, TokenRow, TOKEN_TABLE_HEADER};
use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Output capability for token listings.
pub trait TokenSink {
    /// Write the header followed by one line per row.
    fn render(&mut self, header: &[&str; 3], rows: &[TokenRow]) -> Result<(), ApiError>;

    /// Write an informational line in place of a table.
    fn notice(&mut self, message: &str) -> Result<(), ApiError>;
}

/// Inputs for one `robot token list` run.
#[derive(Debug, Clone)]
pub struct TokenListRequest {
    pub account: String,
    pub robot_name: String,
}

/// Result of the fetch phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenListing {
    /// The robot exists but has no tokens.
    Empty { robot: String, account: String },
    Rows(Vec<TokenRow>),
}

impl TokenListing {
    pub fn no_tokens_message(robot: &str, account: &str) -> String {
        format!("No tokens found for robot {} in {}", robot, account)
    }

    /// Hand the listing to a sink. Sink failures surface as `ApiError::Presentation`.
    pub fn present(&self, sink: &mut dyn TokenSink) -> Result<(), ApiError> {
        let result = match self {
            TokenListing::Empty { robot, account } => {
                sink.notice(&Self::no_tokens_message(robot, account))
            }
            TokenListing::Rows(rows) => sink.render(&TOKEN_TABLE_HEADER, rows),
        };
        result.map_err(|e| match e {
            ApiError::Presentation(_) => e,
            other => ApiError::Presentation(other.to_string()),
        })
    }
}

pub struct RobotTokenService {
    accounts: Arc<dyn AccountService>,
    organizations: Arc<dyn OrganizationService>,
    robots: Arc<dyn RobotService>,
    request_timeout: Option<Duration>,
    cancel: CancellationToken,
}

impl RobotTokenService {
    pub fn new(
        accounts: Arc<dyn AccountService>,
        organizations: Arc<dyn OrganizationService>,
        robots: Arc<dyn RobotService>,
    ) -> Self {
        Self {
            accounts,
            organizations,
            robots,
            request_timeout: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Build the service from one client that implements all three directory services.
    pub fn from_client<C>(client: Arc<C>) -> Self
    where
        C: AccountService + OrganizationService + RobotService + 'static,
    {
        Self::new(client.clone(), client.clone(), client)
    }

    /// Bound every remote call by `timeout`.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Abort the pending remote call when `cancel` fires.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    async fn call<T, F>(
        &self,
        step: Step,
        request: &TokenListRequest,
        fut: F,
    ) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, DirectoryError>>,
    {
        let bounded = async {
            match self.request_timeout {
                Some(limit) => tokio::time::timeout(limit, fut)
                    .await
                    .unwrap_or(Err(DirectoryError::Timeout(limit.as_secs()))),
                None => fut.await,
            }
        };
        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(DirectoryError::Cancelled),
            r = bounded => r,
        };
        result.map_err(|e| {
            warn!(
                step = %step,
                robot = %request.robot_name,
                account = %request.account,
                error = %e,
                "directory call failed"
            );
            ApiError::upstream(step, &request.robot_name, &request.account, e)
        })
    }

    /// Fetch the request's account and return its organization.
    pub async fn resolve_organization(
        &self,
        request: &TokenListRequest,
    ) -> Result<Organization, ApiError> {
        let account = request.account.as_str();
        debug!(account, "resolving account");
        let found = self
            .call(Step::Account, request, self.accounts.get(account))
            .await?;
        match (found.kind, found.organization) {
            (AccountKind::Organization, Some(org)) => {
                info!(account, org_id = org.id, "account resolved to organization");
                Ok(org)
            }
            _ => Err(ApiError::NotAnOrganization {
                robot: request.robot_name.clone(),
                account: account.to_string(),
            }),
        }
    }

    /// Fetch the roster of `org` and resolve the requested robot name within it.
    pub async fn resolve_robot_id(
        &self,
        org: &Organization,
        request: &TokenListRequest,
    ) -> Result<RobotId, ApiError> {
        let robot_name = request.robot_name.as_str();
        debug!(org_id = org.id, robot = robot_name, "fetching robot roster");
        let roster = self
            .call(Step::Roster, request, self.organizations.list_robots(org.id))
            .await?;
        debug!(robots = roster.len(), "robot roster fetched");
        let robot_id = resolve_robot(&roster, robot_name, &request.account)?;
        info!(robot = robot_name, robot_id = %robot_id, "robot resolved");
        Ok(robot_id)
    }

    pub async fn list_tokens(
        &self,
        robot_id: RobotId,
        request: &TokenListRequest,
    ) -> Result<TokenSet, ApiError> {
        debug!(robot_id = %robot_id, "listing tokens");
        let tokens = self
            .call(Step::Tokens, request, self.robots.list_tokens(robot_id))
            .await?;
        info!(robot_id = %robot_id, tokens = tokens.len(), "tokens listed");
        Ok(tokens)
    }

    /// Run every fetch and shape the rows. Ages are computed relative to `now`.
    pub async fn fetch(
        &self,
        request: &TokenListRequest,
        now: DateTime<Utc>,
    ) -> Result<TokenListing, ApiError> {
        let org = self.resolve_organization(request).await?;
        let robot_id = self.resolve_robot_id(&org, request).await?;
        let tokens = self.list_tokens(robot_id, request).await?;
        if tokens.is_empty() {
            return Ok(TokenListing::Empty {
                robot: request.robot_name.clone(),
                account: request.account.clone(),
            });
        }
        Ok(TokenListing::Rows(build_rows(&tokens, now)))
    }

    /// Fetch and present.
    pub async fn run(
        &self,
        request: &TokenListRequest,
        sink: &mut dyn TokenSink,
    ) -> Result<TokenListing, ApiError> {
        let listing = self.fetch(request, Utc::now()).await?;
        listing.present(sink)?;
        Ok(listing)
    }
}
