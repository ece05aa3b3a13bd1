//! OAuth client configuration.

use oauth2::{ClientId, ClientSecret, RedirectUrl};

use crate::error::{Error, Result};

/// Client credentials and addresses for the identity provider.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    /// Provider domain, e.g. `tenant.eu.auth0.com`.
    pub domain: String,
    pub redirect_url: RedirectUrl,
    /// Where the provider sends the browser after logging out.
    pub post_logout_url: String,
}

impl OAuthConfig {
    /// Build the config for a provider at `domain`, with callbacks rooted at `base_url`.
    pub fn new(
        client_id: String,
        client_secret: String,
        domain: String,
        base_url: &str,
    ) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        let redirect_url = RedirectUrl::new(format!("{base_url}/callback"))
            .map_err(|e| Error::Config(format!("invalid callback URL: {e}")))?;

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            domain,
            redirect_url,
            post_logout_url: format!("{base_url}/"),
        })
    }

    pub fn discovery_url(&self) -> String {
        format!("https://{}/.well-known/openid-configuration", self.domain)
    }

    pub fn logout_endpoint(&self) -> String {
        format!("https://{}/v2/logout", self.domain)
    }
}
