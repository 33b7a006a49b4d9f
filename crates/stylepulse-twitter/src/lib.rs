//! Client for the Twitter v1.1 standard search API.
//!
//! Authenticates app-only: the consumer key/secret pair is exchanged for a
//! bearer token on first use. The token is reused until the API rejects it.

pub mod client;
pub mod error;
pub mod types;

pub use client::TwitterClient;
pub use error::TwitterError;
pub use types::{SearchParams, Tweet};
