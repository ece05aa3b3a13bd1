//! Session data types.

use serde::{Deserialize, Serialize};

/// Key the authenticated token/claims set is stored under.
pub const SESSION_USER_KEY: &str = "user";

/// Key the in-flight login state is stored under between `/login` and `/callback`.
pub const SESSION_PENDING_LOGIN_KEY: &str = "oauth_state";

/// Claims returned by the provider's userinfo endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserClaims {
    /// Stable subject identifier; owner of every note the user creates.
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserClaims {
    /// Name to greet the user with, falling back through nickname and email to the subject.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.nickname.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.sub)
    }
}

/// Token set and claims kept in the session after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<Vec<String>>,
    pub userinfo: UserClaims,
}

impl SessionUser {
    pub fn subject(&self) -> &str {
        &self.userinfo.sub
    }
}

/// CSRF state and PKCE verifier for a login that has been started but not completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingLogin {
    pub state: String,
    pub pkce_verifier: String,
}
