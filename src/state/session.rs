//! Session store: the in-memory access token and its derived identity.
//!
//! The token lives only in this struct for the lifetime of the tab; it is
//! never persisted, and is recovered after a reload through the HTTP-only
//! refresh cookie. Identity claims are re-decoded from the token payload on
//! demand rather than cached.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Identity claims carried in the access token payload.
///
/// Decoded without signature verification: these are display hints only;
/// the server re-validates the token on every request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// User id.
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Holder of the current access token.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    access_token: Option<String>,
}

impl SessionState {
    /// Current token, no side effects.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Replace the token. Subscribers of the owning signal are notified
    /// synchronously by the signal write itself.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    pub fn clear_access_token(&mut self) {
        self.set_access_token(None);
    }

    /// User id from the token, or `None` when signed out or undecodable.
    pub fn user_id(&self) -> Option<String> {
        self.claims()?.sub
    }

    /// Uppercased first character of the username claim, for avatar
    /// fallbacks.
    pub fn display_fallback(&self) -> Option<String> {
        let username = self.claims()?.username?;
        let first = username.trim().chars().next()?;
        Some(first.to_uppercase().to_string())
    }

    /// Image id of the profile picture, when the claim is present.
    pub fn profile_picture_ref(&self) -> Option<String> {
        self.claims()?.profile_picture
    }

    fn claims(&self) -> Option<TokenClaims> {
        decode_claims(self.access_token.as_deref()?)
    }
}

/// Decode the payload segment of a JWT-shaped token.
///
/// A malformed token degrades to "no identity": every failure path returns
/// `None` after logging, never an error the caller has to handle.
fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|err| leptos::logging::warn!("access token payload is not base64url: {err}"))
        .ok()?;
    serde_json::from_slice(&bytes)
        .map_err(|err| leptos::logging::warn!("access token claims did not decode: {err}"))
        .ok()
}
