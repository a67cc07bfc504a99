//! HTTP directory client backed by `reqwest`.

use crate::directory::{
    Account, AccountKind, AccountService, Organization, OrganizationId, OrganizationService,
    Robot, RobotId, RobotService, Token, TokenAttributes, TokenMeta, TokenSet,
};
use crate::error::DirectoryError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const DIRECTORY_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// Wire shapes

#[derive(Deserialize)]
struct AccountResponse {
    account: AccountRecord,
    #[serde(default)]
    organization: Option<OrganizationRecord>,
}

#[derive(Deserialize)]
struct AccountRecord {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
struct OrganizationRecord {
    id: OrganizationId,
}

#[derive(Deserialize)]
struct RobotRecord {
    id: Uuid,
    name: String,
}

#[derive(Deserialize)]
struct TokenSetResponse {
    #[serde(default)]
    data: Vec<DataSetRecord>,
}

#[derive(Deserialize)]
struct DataSetRecord {
    id: Uuid,
    #[serde(default, deserialize_with = "null_as_empty")]
    attributes: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    meta: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coerce an arbitrary JSON value to its display string. `null` counts as absent.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn into_token(record: DataSetRecord) -> Token {
    Token {
        id: record.id,
        attributes: TokenAttributes {
            name: record.attributes.get("name").and_then(value_to_string),
        },
        meta: TokenMeta {
            created_at: record.meta.get("createdAt").and_then(value_to_string),
        },
    }
}

fn map_http_error(error: reqwest::Error) -> DirectoryError {
    if error.is_timeout() {
        DirectoryError::Transport(format!("request timeout: {}", error))
    } else if error.is_connect() {
        DirectoryError::Transport(format!("connection error: {}", error))
    } else if error.is_decode() {
        DirectoryError::Decode(error.to_string())
    } else {
        DirectoryError::Transport(error.to_string())
    }
}

fn map_status(status: StatusCode, body: String) -> DirectoryError {
    match status.as_u16() {
        401 | 403 => DirectoryError::Unauthorized(body),
        404 => DirectoryError::NotFound(body),
        code => DirectoryError::Status { status: code, body },
    }
}

fn build_directory_http_client(request_timeout: Duration) -> Result<Client, DirectoryError> {
    Client::builder()
        .connect_timeout(DIRECTORY_HTTP_CONNECT_TIMEOUT)
        .timeout(request_timeout)
        .build()
        .map_err(|e| DirectoryError::Transport(format!("failed to create HTTP client: {}", e)))
}

/// Client for the account, organization and robot services of one API endpoint.
pub struct HttpDirectoryClient {
    client: Client,
    endpoint: String,
    base: Url,
    token: Option<String>,
}

impl HttpDirectoryClient {
    pub fn new(
        endpoint: &str,
        token: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, DirectoryError> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let base = Url::parse(&endpoint).map_err(|e| {
            DirectoryError::Transport(format!("invalid endpoint {}: {}", endpoint, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(DirectoryError::Transport(format!(
                "invalid endpoint {}: not a base URL",
                endpoint
            )));
        }
        Ok(Self {
            client: build_directory_http_client(request_timeout)?,
            endpoint,
            base,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Endpoint URL with `segments` appended, each percent-encoded as a single path segment.
    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, DirectoryError> {
        let url = self.url_for(segments);
        debug!(url = %url, "directory request");

        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_http_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status(status, body));
        }

        response
            .json()
            .await
            .map_err(|e| DirectoryError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AccountService for HttpDirectoryClient {
    async fn get(&self, account_name: &str) -> Result<Account, DirectoryError> {
        let response: AccountResponse =
            self.get_json(&["v1", "accounts", account_name]).await?;
        Ok(Account {
            name: account_name.to_string(),
            kind: AccountKind::from_wire(&response.account.kind),
            organization: response
                .organization
                .map(|org| Organization { id: org.id }),
        })
    }
}

#[async_trait]
impl OrganizationService for HttpDirectoryClient {
    async fn list_robots(&self, org_id: OrganizationId) -> Result<Vec<Robot>, DirectoryError> {
        let org_id = org_id.to_string();
        let records: Vec<RobotRecord> = self
            .get_json(&["v1", "organizations", org_id.as_str(), "robots"])
            .await?;
        Ok(records
            .into_iter()
            .map(|r| Robot::new(r.id, r.name))
            .collect())
    }
}

#[async_trait]
impl RobotService for HttpDirectoryClient {
    async fn list_tokens(&self, robot_id: RobotId) -> Result<TokenSet, DirectoryError> {
        let robot_id = robot_id.to_string();
        let response: TokenSetResponse = self
            .get_json(&["v1", "robots", robot_id.as_str(), "relationships", "tokens"])
            .await?;
        Ok(TokenSet {
            tokens: response.data.into_iter().map(into_token).collect(),
        })
    }
}
