//! Delegated credential for object store access.
//!
//! The gateway calls the store with one narrowly-scoped, read-only
//! credential on behalf of every caller; callers never present their
//! own.

use std::env;
use std::fmt;

use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::ObjectStoreConfig;

/// Environment variable that overrides the configured access token.
pub const TOKEN_ENV: &str = "GATEWAY_STORE_TOKEN";

/// Errors resolving the delegated credential at startup.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no delegated credential: set GATEWAY_STORE_TOKEN or object_store.access_token")]
    Missing,

    #[error("delegated credential contains invalid header characters")]
    Invalid(#[from] InvalidHeaderValue),
}

/// A long-lived, read-only token scoped to GET access on the bucket's
/// `static/*` key space. Established once at startup, never refreshed
/// per-request.
#[derive(Clone)]
pub struct DelegatedCredential {
    token: String,
}

impl DelegatedCredential {
    /// Resolve the credential from the environment or the configuration.
    /// The environment variable wins when both are set.
    pub fn resolve(config: &ObjectStoreConfig) -> Result<Self, CredentialError> {
        let token = env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| Some(config.access_token.clone()).filter(|t| !t.is_empty()))
            .ok_or(CredentialError::Missing)?;

        Ok(Self { token })
    }

    /// Authorization header value presented on every store call.
    pub fn authorization(&self) -> Result<HeaderValue, CredentialError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for DelegatedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedCredential")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_token(token: &str) -> ObjectStoreConfig {
        ObjectStoreConfig {
            access_token: token.to_string(),
            ..ObjectStoreConfig::default()
        }
    }

    #[test]
    fn test_resolved_from_config() {
        let credential = DelegatedCredential::resolve(&config_with_token("abc123")).unwrap();
        let value = credential.authorization().unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer abc123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let result = DelegatedCredential::resolve(&config_with_token(""));
        assert!(matches!(result, Err(CredentialError::Missing)));
    }

    #[test]
    fn test_invalid_header_characters_rejected() {
        let credential = DelegatedCredential::resolve(&config_with_token("line\nbreak")).unwrap();
        assert!(matches!(
            credential.authorization(),
            Err(CredentialError::Invalid(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = DelegatedCredential::resolve(&config_with_token("secret")).unwrap();
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
