//! Identity provider seam and its OpenID Connect implementation.

use async_trait::async_trait;
use oauth2::basic::{
    BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
    BasicTokenType,
};
use oauth2::{
    AuthUrl, AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, ExtraTokenFields,
    PkceCodeChallenge, PkceCodeVerifier, Scope, StandardRevocableToken, StandardTokenResponse,
    TokenResponse, TokenUrl,
};
use serde::{Deserialize, Serialize};
use url::Url;

use super::config::OAuthConfig;
use super::discovery::ProviderMetadata;
use super::session::{PendingLogin, SessionUser, UserClaims};
use crate::error::{Error, Result};

const SCOPES: [&str; 3] = ["openid", "profile", "email"];

/// Parameters the provider sends back to `/callback`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// The three provider interactions the login flow needs.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authorization URL to send the browser to, plus the secrets to keep until the callback.
    fn authorize_url(&self) -> (Url, PendingLogin);

    /// Trade an authorization code for the user's token set and claims.
    async fn exchange_code(&self, code: &str, pending: &PendingLogin) -> Result<SessionUser>;

    /// Provider logout URL that returns the browser to the app afterwards.
    fn logout_url(&self) -> Url;
}

/// Token endpoint fields beyond the OAuth 2.0 basics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdTokenFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl ExtraTokenFields for IdTokenFields {}

type OidcTokenResponse = StandardTokenResponse<IdTokenFields, BasicTokenType>;

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    BasicErrorResponse,
    OidcTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Provider backed by a discovered OpenID Connect configuration.
pub struct OidcProvider {
    metadata: ProviderMetadata,
    client: ConfiguredClient,
    logout_url: Url,
    http: reqwest::Client,
}

impl OidcProvider {
    /// Build a provider from already known metadata.
    pub fn new(config: OAuthConfig, metadata: ProviderMetadata) -> Result<Self> {
        let http = http_client()?;
        Self::with_http_client(config, metadata, http)
    }

    /// Fetch the discovery document for `config.domain` and build a provider from it.
    pub async fn discover(config: OAuthConfig) -> Result<Self> {
        let http = http_client()?;
        let metadata = ProviderMetadata::discover(&config, &http).await?;
        tracing::info!(issuer = %metadata.issuer, "discovered identity provider");
        Self::with_http_client(config, metadata, http)
    }

    fn with_http_client(
        config: OAuthConfig,
        metadata: ProviderMetadata,
        http: reqwest::Client,
    ) -> Result<Self> {
        let auth_url = AuthUrl::new(metadata.authorization_endpoint.clone())
            .map_err(|e| Error::Discovery(format!("invalid authorization endpoint: {e}")))?;
        let token_url = TokenUrl::new(metadata.token_endpoint.clone())
            .map_err(|e| Error::Discovery(format!("invalid token endpoint: {e}")))?;

        let client: ConfiguredClient = oauth2::Client::new(config.client_id.clone())
            .set_client_secret(config.client_secret.clone())
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(config.redirect_url.clone());

        let logout_url = Url::parse_with_params(
            &config.logout_endpoint(),
            [
                ("returnTo", config.post_logout_url.as_str()),
                ("client_id", config.client_id.as_str()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid logout endpoint: {e}")))?;

        Ok(Self {
            metadata,
            client,
            logout_url,
            http,
        })
    }

    async fn fetch_userinfo(&self, access_token: &str) -> Result<UserClaims> {
        let claims: UserClaims = self
            .http
            .get(&self.metadata.userinfo_endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::Claims(e.to_string()))?
            .json()
            .await
            .map_err(|e| Error::Claims(e.to_string()))?;

        if claims.sub.is_empty() {
            return Err(Error::Claims("userinfo has an empty subject".to_string()));
        }
        Ok(claims)
    }
}

/// OAuth token requests must not follow redirects.
fn http_client() -> Result<reqwest::Client> {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))
}

#[async_trait]
impl IdentityProvider for OidcProvider {
    fn authorize_url(&self) -> (Url, PendingLogin) {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .set_pkce_challenge(pkce_challenge)
            .url();

        let pending = PendingLogin {
            state: csrf_state.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        };
        (auth_url, pending)
    }

    async fn exchange_code(&self, code: &str, pending: &PendingLogin) -> Result<SessionUser> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pending.pkce_verifier.clone()))
            .request_async(&self.http)
            .await
            .map_err(|e| Error::TokenExchange(e.to_string()))?;

        let access_token = token.access_token().secret().clone();
        let userinfo = self.fetch_userinfo(&access_token).await?;

        Ok(SessionUser {
            access_token,
            id_token: token.extra_fields().id_token.clone(),
            expires_in: token.expires_in().map(|d| d.as_secs()),
            scope: token
                .scopes()
                .map(|scopes| scopes.iter().map(|s| s.to_string()).collect()),
            userinfo,
        })
    }

    fn logout_url(&self) -> Url {
        self.logout_url.clone()
    }
}
