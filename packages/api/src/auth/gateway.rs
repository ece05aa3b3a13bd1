//! Session-side half of the login flow.

use tower_sessions::Session;
use url::Url;

use super::provider::{CallbackParams, IdentityProvider};
use super::session::{PendingLogin, SessionUser, SESSION_PENDING_LOGIN_KEY, SESSION_USER_KEY};
use crate::error::{Error, Result};

/// Start a login: remember the CSRF state and PKCE verifier, return where to send the browser.
pub async fn initiate_login(provider: &dyn IdentityProvider, session: &Session) -> Result<Url> {
    let (url, pending) = provider.authorize_url();
    session.insert(SESSION_PENDING_LOGIN_KEY, pending).await?;
    Ok(url)
}

/// Finish a login started by [`initiate_login`].
///
/// The pending login is consumed whether or not the exchange succeeds, so a
/// callback URL can only ever be used once.
pub async fn handle_callback(
    provider: &dyn IdentityProvider,
    session: &Session,
    params: CallbackParams,
) -> Result<SessionUser> {
    let pending: Option<PendingLogin> = session.remove(SESSION_PENDING_LOGIN_KEY).await?;

    if let Some(error) = params.error {
        let detail = match params.error_description {
            Some(description) => format!("{error}: {description}"),
            None => error,
        };
        return Err(Error::Provider(detail));
    }

    let pending = pending.ok_or(Error::InvalidState)?;
    if params.state.as_deref() != Some(pending.state.as_str()) {
        return Err(Error::InvalidState);
    }

    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| Error::TokenExchange("callback is missing the authorization code".into()))?;

    let user = provider.exchange_code(&code, &pending).await?;

    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, &user).await?;
    tracing::info!(sub = %user.subject(), "user logged in");

    Ok(user)
}

/// Drop everything in the session and return the provider's logout URL.
pub async fn logout(provider: &dyn IdentityProvider, session: &Session) -> Result<Url> {
    session.flush().await?;
    Ok(provider.logout_url())
}

/// The logged-in user, if any.
///
/// A payload that no longer deserializes counts as logged out rather than an error.
pub async fn current_user(session: &Session) -> Result<Option<SessionUser>> {
    let Some(value) = session.get_value(SESSION_USER_KEY).await? else {
        return Ok(None);
    };

    match serde_json::from_value::<SessionUser>(value) {
        Ok(user) if !user.userinfo.sub.is_empty() => Ok(Some(user)),
        Ok(_) => {
            tracing::warn!("session user has an empty subject");
            Ok(None)
        }
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed session user");
            Ok(None)
        }
    }
}

/// Subject identifier of the logged-in user; `None` means not authenticated.
pub async fn current_subject(session: &Session) -> Result<Option<String>> {
    Ok(current_user(session)
        .await?
        .map(|user| user.userinfo.sub))
}
