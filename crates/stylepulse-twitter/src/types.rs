//! Twitter v1.1 response types and the domain [`Tweet`] they map to.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::TwitterError;

/// `created_at` format used by the v1.1 API, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parameters for one call to `search/tweets.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub lang: String,
    pub count: u32,
}

impl SearchParams {
    /// The fashion vocabulary query, English only, one full batch.
    #[must_use]
    pub fn fashion() -> Self {
        Self {
            query: stylepulse_core::search_query(),
            lang: stylepulse_core::SEARCH_LANGUAGE.to_string(),
            count: stylepulse_core::SEARCH_BATCH_SIZE,
        }
    }
}

/// A tweet as the rest of the system sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Envelope for `search/tweets.json`: `{ "statuses": [...], "search_metadata": {...} }`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub statuses: Vec<Status>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Status {
    pub id_str: String,
    pub text: String,
    pub created_at: String,
    pub user: StatusUser,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUser {
    pub screen_name: String,
}

/// Response of `POST /oauth2/token`.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token_type: String,
    pub access_token: String,
}

/// Error envelope: `{ "errors": [{ "code": 88, "message": "Rate limit exceeded" }] }`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorItem {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

impl ErrorEnvelope {
    pub(crate) fn first_message(&self) -> Option<String> {
        self.errors.first().map(|e| match e.code {
            Some(code) => format!("{} (code {code})", e.message),
            None => e.message.clone(),
        })
    }
}

impl TryFrom<Status> for Tweet {
    type Error = TwitterError;

    fn try_from(status: Status) -> Result<Self, Self::Error> {
        let created_at = parse_created_at(&status.created_at).ok_or_else(|| {
            TwitterError::InvalidTimestamp {
                id: status.id_str.clone(),
                value: status.created_at.clone(),
            }
        })?;

        Ok(Self {
            id: status.id_str,
            text: status.text,
            author: status.user.screen_name,
            created_at,
        })
    }
}

pub(crate) fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
