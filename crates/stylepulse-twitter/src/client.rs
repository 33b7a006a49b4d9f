//! HTTP client for the Twitter v1.1 search API.
//!
//! Wraps `reqwest` with app-only bearer authentication and maps HTTP status
//! codes onto [`TwitterError`] variants so callers can tell auth failures and
//! rate limiting apart from generic API errors.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Response, StatusCode, Url};
use stylepulse_core::TwitterCredentials;
use tokio::sync::RwLock;

use crate::error::TwitterError;
use crate::types::{ErrorEnvelope, SearchParams, SearchResponse, TokenResponse, Tweet};

const TOKEN_PATH: &str = "oauth2/token";
const SEARCH_PATH: &str = "1.1/search/tweets.json";

/// Consumer key/secret used to mint app-only bearer tokens.
#[derive(Clone)]
struct ConsumerKey {
    key: String,
    secret: String,
}

/// Client for the Twitter search API.
///
/// Construction never touches the network. The bearer token is obtained on
/// the first search and cached; a 401 drops the cached token so the next
/// search exchanges the consumer key again. Clones share the cache.
#[derive(Clone)]
pub struct TwitterClient {
    client: Client,
    base_url: Url,
    consumer: Option<ConsumerKey>,
    bearer_token: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for TwitterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterClient")
            .field("base_url", &self.base_url.as_str())
            .field("bearer_token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl TwitterClient {
    /// Creates a client from configured credentials.
    ///
    /// A configured `bearer_token` seeds the cache; otherwise the consumer
    /// key/secret are exchanged lazily on the first search.
    ///
    /// # Errors
    ///
    /// - [`TwitterError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`TwitterError::Http`] if the HTTP client cannot be built.
    pub fn new(
        credentials: &TwitterCredentials,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, TwitterError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: normalise_base_url(base_url)?,
            consumer: Some(ConsumerKey {
                key: credentials.consumer_key.clone(),
                secret: credentials.consumer_secret.clone(),
            }),
            bearer_token: Arc::new(RwLock::new(credentials.bearer_token.clone())),
        })
    }

    /// Creates a client with a pre-issued bearer token and no consumer key,
    /// so a rejected token is never replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TwitterError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_bearer_token(
        bearer_token: &str,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, TwitterError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: normalise_base_url(base_url)?,
            consumer: None,
            bearer_token: Arc::new(RwLock::new(Some(bearer_token.to_owned()))),
        })
    }

    /// Runs one search and returns the matching tweets, newest first as the
    /// API orders them.
    ///
    /// A single malformed status fails the whole call so that a collection
    /// run never persists a partial batch.
    ///
    /// # Errors
    ///
    /// - [`TwitterError::Auth`] on 401/403 or a rejected token exchange. A
    ///   401 also clears the cached token.
    /// - [`TwitterError::RateLimited`] on 429.
    /// - [`TwitterError::Api`] on any other non-2xx status.
    /// - [`TwitterError::Http`] on network failure.
    /// - [`TwitterError::Deserialize`] / [`TwitterError::InvalidTimestamp`]
    ///   if the payload does not match the expected shape.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<Tweet>, TwitterError> {
        let token = self.bearer_token().await?;
        let url = self.search_url(params);
        tracing::debug!(count = params.count, lang = %params.lang, "twitter: searching");

        let response = self.client.get(url).bearer_auth(&token).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            self.invalidate_token(&token).await;
        }
        let response = check_status(response).await?;
        let body = response.text().await?;

        let envelope: SearchResponse =
            serde_json::from_str(&body).map_err(|e| TwitterError::Deserialize {
                context: SEARCH_PATH.to_string(),
                source: e,
            })?;

        envelope
            .statuses
            .into_iter()
            .map(Tweet::try_from)
            .collect()
    }

    /// Returns the cached bearer token, exchanging the consumer key for a new
    /// one if the cache is empty.
    async fn bearer_token(&self) -> Result<String, TwitterError> {
        let cached = self.bearer_token.read().await.clone();
        if let Some(token) = cached {
            return Ok(token);
        }

        let mut slot = self.bearer_token.write().await;
        // Another search may have refilled the cache while we waited.
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }
        let Some(consumer) = &self.consumer else {
            return Err(TwitterError::Auth(
                "bearer token rejected and no consumer key to renew it".to_string(),
            ));
        };

        let token = fetch_bearer_token(&self.client, &self.base_url, consumer).await?;
        *slot = Some(token.clone());
        Ok(token)
    }

    async fn invalidate_token(&self, rejected: &str) {
        if self.consumer.is_none() {
            return;
        }
        let mut slot = self.bearer_token.write().await;
        if slot.as_deref() == Some(rejected) {
            tracing::warn!("twitter: bearer token rejected; will re-authenticate");
            *slot = None;
        }
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn search_url(&self, params: &SearchParams) -> Url {
        let mut url = self.endpoint(SEARCH_PATH);
        url.query_pairs_mut()
            .append_pair("q", &params.query)
            .append_pair("lang", &params.lang)
            .append_pair("count", &params.count.to_string())
            .append_pair("result_type", "recent");
        url
    }

    fn endpoint(&self, path: &str) -> Url {
        endpoint(&self.base_url, path)
    }
}

fn build_http_client(timeout_secs: u64) -> Result<Client, TwitterError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent("stylepulse/0.1 (fashion-trends)")
        .build()?)
}

/// Ensures the base URL ends with exactly one slash so relative endpoint
/// paths are appended rather than replacing the last segment.
fn normalise_base_url(base_url: &str) -> Result<Url, TwitterError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|_| TwitterError::InvalidBaseUrl(base_url.to_string()))
}

fn endpoint(base_url: &Url, path: &str) -> Url {
    // Both inputs are crate constants appended to a slash-terminated base.
    base_url.join(path).unwrap_or_else(|_| base_url.clone())
}

/// `POST oauth2/token` with the consumer pair as basic auth.
async fn fetch_bearer_token(
    client: &Client,
    base_url: &Url,
    consumer: &ConsumerKey,
) -> Result<String, TwitterError> {
    let response = client
        .post(endpoint(base_url, TOKEN_PATH))
        .basic_auth(&consumer.key, Some(&consumer.secret))
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded;charset=UTF-8",
        )
        .body("grant_type=client_credentials")
        .send()
        .await?;
    let response = check_status(response).await?;
    let body = response.text().await?;

    let token: TokenResponse =
        serde_json::from_str(&body).map_err(|e| TwitterError::Deserialize {
            context: TOKEN_PATH.to_string(),
            source: e,
        })?;

    if !token.token_type.eq_ignore_ascii_case("bearer") {
        return Err(TwitterError::Auth(format!(
            "unexpected token type '{}'",
            token.token_type
        )));
    }

    tracing::info!("twitter: obtained app-only bearer token");
    Ok(token.access_token)
}

/// Passes 2xx responses through and maps everything else to a typed error.
async fn check_status(response: Response) -> Result<Response, TwitterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let reset_at = response
        .headers()
        .get("x-rate-limit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok());
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .and_then(|env| env.first_message())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TwitterError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => TwitterError::RateLimited { reset_at },
        _ => TwitterError::Api {
            status: status.as_u16(),
            message,
        },
    })
}
