//! OpenID provider discovery document.

use serde::{Deserialize, Serialize};

use super::config::OAuthConfig;
use crate::error::{Error, Result};

/// The subset of `/.well-known/openid-configuration` the login flow uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
}

impl ProviderMetadata {
    /// Fetch the discovery document for the configured domain.
    pub async fn discover(config: &OAuthConfig, http: &reqwest::Client) -> Result<Self> {
        Self::fetch(&config.discovery_url(), http).await
    }

    /// Fetch a discovery document from an explicit URL.
    pub async fn fetch(url: &str, http: &reqwest::Client) -> Result<Self> {
        tracing::debug!(%url, "fetching provider metadata");

        let metadata = http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::Discovery(e.to_string()))?
            .json::<ProviderMetadata>()
            .await
            .map_err(|e| Error::Discovery(e.to_string()))?;

        Ok(metadata)
    }
}
