//! # OpenID Connect auth gateway
//!
//! The login flow is the plain authorization-code dance:
//!
//! 1. [`initiate_login`] asks the [`IdentityProvider`] for an authorization
//!    URL, parks the CSRF state and PKCE verifier in the session as a
//!    [`PendingLogin`], and hands the URL back for a redirect.
//! 2. [`handle_callback`] checks the returned `state`, exchanges the code for
//!    tokens, and stores the resulting [`SessionUser`] under
//!    [`SESSION_USER_KEY`].
//! 3. [`logout`] flushes the session and returns the provider's logout URL so
//!    the provider-side session ends too.
//!
//! [`current_subject`] is the only way the rest of the crate learns who the
//! caller is. Tokens are never refreshed or checked for expiry.

mod config;
mod discovery;
mod gateway;
mod provider;
mod session;

pub use config::OAuthConfig;
pub use discovery::ProviderMetadata;
pub use gateway::{current_subject, current_user, handle_callback, initiate_login, logout};
pub use provider::{CallbackParams, IdentityProvider, OidcProvider};
pub use session::{
    PendingLogin, SessionUser, UserClaims, SESSION_PENDING_LOGIN_KEY, SESSION_USER_KEY,
};
