//! Directory services
//!
//! Accounts, organizations, robots and their tokens as served by the remote directory.
//! The services are consumed through async traits so the token listing flow can run
//! against the HTTP client in production and in-memory fakes in tests.

use crate::error::DirectoryError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod http;

pub use http::HttpDirectoryClient;

/// Numeric organization identifier.
pub type OrganizationId = u64;

/// Opaque robot identifier, unique across the directory.
pub type RobotId = Uuid;

/// Kind of account. Only organizations own robots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Organization,
    User,
}

impl AccountKind {
    /// Parse the wire `type` field. Anything that is not an organization is treated as a user.
    pub fn from_wire(value: &str) -> Self {
        if value.eq_ignore_ascii_case("organization") {
            AccountKind::Organization
        } else {
            AccountKind::User
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: OrganizationId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub kind: AccountKind,
    /// Present when `kind` is `Organization`.
    pub organization: Option<Organization>,
}

impl Account {
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AccountKind::User,
            organization: None,
        }
    }

    pub fn organization(name: impl Into<String>, id: OrganizationId) -> Self {
        Self {
            name: name.into(),
            kind: AccountKind::Organization,
            organization: Some(Organization { id }),
        }
    }
}

/// A service identity. `name` is not unique within an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    pub id: RobotId,
    pub name: String,
}

impl Robot {
    pub fn new(id: RobotId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Named token attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenAttributes {
    pub name: Option<String>,
}

/// Token metadata. `created_at` holds the raw `createdAt` value; it is parsed lazily
/// when formatting because upstream does not guarantee it is well formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMeta {
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: Uuid,
    pub attributes: TokenAttributes,
    pub meta: TokenMeta,
}

impl Token {
    pub fn new(id: Uuid, name: Option<&str>, created_at: Option<&str>) -> Self {
        Self {
            id,
            attributes: TokenAttributes {
                name: name.map(str::to_string),
            },
            meta: TokenMeta {
                created_at: created_at.map(str::to_string),
            },
        }
    }
}

/// All tokens of one robot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    pub tokens: Vec<Token>,
}

impl TokenSet {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
pub trait AccountService: Send + Sync {
    /// Fetch an account by name.
    async fn get(&self, account_name: &str) -> Result<Account, DirectoryError>;
}

#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Fetch the full robot roster of an organization in one call.
    async fn list_robots(&self, org_id: OrganizationId) -> Result<Vec<Robot>, DirectoryError>;
}

#[async_trait]
pub trait RobotService: Send + Sync {
    /// Fetch every token issued to a robot.
    async fn list_tokens(&self, robot_id: RobotId) -> Result<TokenSet, DirectoryError>;
}
