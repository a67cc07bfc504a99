//! Token rows: shapes a robot's token set into `NAME / ID / CREATED` rows.

use crate::directory::{Token, TokenSet};
use crate::robot::age;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

/// Fixed table header.
pub const TOKEN_TABLE_HEADER: [&str; 3] = ["NAME", "ID", "CREATED"];

/// One presented token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRow {
    pub name: String,
    pub id: String,
    pub created: String,
}

impl TokenRow {
    pub fn from_token(token: &Token, now: DateTime<Utc>) -> Self {
        let name = match &token.attributes.name {
            Some(name) => name.clone(),
            None => {
                warn!(token_id = %token.id, "token has no name attribute");
                String::new()
            }
        };
        Self {
            name,
            id: token.id.to_string(),
            created: age::humanize(&token.meta, now),
        }
    }

    pub fn cells(&self) -> [&str; 3] {
        [&self.name, &self.id, &self.created]
    }
}

/// One row per token, in the order the service returned them.
pub fn build_rows(tokens: &TokenSet, now: DateTime<Utc>) -> Vec<TokenRow> {
    tokens
        .tokens
        .iter()
        .map(|t| TokenRow::from_token(t, now))
        .collect()
}
