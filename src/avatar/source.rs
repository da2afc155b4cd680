//! Avatar Sources
//!
//! Lookups against the chain-state service that stores account avatars.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::config::Config;
use crate::error::{CacheError, Result};

// == Avatar Source ==
/// Anything that can resolve an account name to its avatar.
///
/// Implementations return either a base64 image payload or a placeholder
/// marker for accounts without an avatar. Errors are reserved for lookups
/// that could not be answered at all.
#[async_trait]
pub trait AvatarSource: Send + Sync {
    async fn fetch_avatar(&self, account: &str) -> Result<String>;
}

// == HTTP Avatar Source ==
/// Fetches avatars over HTTP from `{base_url}/{account}`.
pub struct HttpAvatarSource {
    client: Client,
    base_url: Url,
    placeholder: String,
}

impl HttpAvatarSource {
    /// Creates a source with its own client and request timeout.
    pub fn new(base_url: &str, placeholder: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| CacheError::Internal(format!("invalid avatar service URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CacheError::Internal(format!(
                "avatar service URL cannot take a path: {}",
                base_url
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            placeholder: placeholder.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.avatar_api_url,
            config.avatar_placeholder.clone(),
            config.fetch_timeout(),
        )
    }

    /// Appends the account as one percent-encoded path segment.
    fn url_for(&self, account: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(account);
        }
        url
    }
}

#[async_trait]
impl AvatarSource for HttpAvatarSource {
    async fn fetch_avatar(&self, account: &str) -> Result<String> {
        let url = self.url_for(account);
        debug!("Fetching avatar from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("No avatar stored for {}", account);
            return Ok(self.placeholder.clone());
        }
        if !status.is_success() {
            return Err(CacheError::Upstream(format!(
                "avatar lookup for {} returned {}",
                account, status
            )));
        }

        let body = response.bytes().await?;
        Ok(encode_avatar(&body).unwrap_or_else(|| self.placeholder.clone()))
    }
}

/// Base64-encodes an image body, or None when there is nothing to encode.
fn encode_avatar(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        None
    } else {
        Some(STANDARD.encode(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_avatar() {
        assert_eq!(encode_avatar(b"img1"), Some("aW1nMQ==".to_string()));
        assert_eq!(encode_avatar(b""), None);
    }

    #[test]
    fn test_url_for_strips_trailing_slash() {
        let source = HttpAvatarSource::new(
            "http://chain.local/v1/avatars/",
            "/images/default-avatar.png",
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(
            source.url_for("alice.wam").as_str(),
            "http://chain.local/v1/avatars/alice.wam"
        );
        assert_eq!(
            source.url_for("bad/acct").as_str(),
            "http://chain.local/v1/avatars/bad%2Facct"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpAvatarSource::new("not a url", "/p.png", Duration::from_secs(1));
        assert!(matches!(result, Err(CacheError::Internal(_))));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_upstream_error() {
        // Port 9 (discard) is not expected to serve HTTP.
        let source = HttpAvatarSource::new(
            "http://127.0.0.1:9",
            "/images/default-avatar.png",
            Duration::from_millis(500),
        )
        .unwrap();

        let result = source.fetch_avatar("alice.wam").await;
        assert!(matches!(result, Err(CacheError::Upstream(_))));
    }
}
