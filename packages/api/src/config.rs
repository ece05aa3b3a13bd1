//! Application configuration from environment variables.
//!
//! A `.env` file is honoured through `dotenvy`; real environment variables
//! win over it. [`AppConfig::from_lookup`] takes the lookup as a closure so
//! tests never have to touch the process environment.

use crate::auth::OAuthConfig;
use crate::error::{Error, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret the session cookie is signed with.
    pub secret_key: String,
    pub oauth: OAuthConfig,
    pub port: u16,
    /// Externally visible origin, e.g. `http://localhost:3000`.
    pub base_url: String,
    pub database_url: String,
}

impl AppConfig {
    /// Load from `.env` and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("{key} not set")))
        };

        let secret_key = required("APP_SECRET_KEY")?;
        let client_id = required("AUTH0_CLIENT_ID")?;
        let client_secret = required("AUTH0_CLIENT_SECRET")?;
        let domain = required("AUTH0_DOMAIN")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let base_url = lookup("APP_BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let oauth = OAuthConfig::new(client_id, client_secret, domain, &base_url)?;

        Ok(Self {
            secret_key,
            oauth,
            port,
            base_url,
            database_url,
        })
    }

    /// Whether the session cookie should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}
