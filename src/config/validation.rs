//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Validation is a
//! pure function over the config and returns every violation, not just
//! the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic violation found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address is not a valid socket address: {0}")]
    InvalidBindAddress(String),

    #[error("object_store.endpoint is not a valid http:// URL: {0}")]
    InvalidEndpoint(String),

    #[error("object_store.bucket must not be empty")]
    EmptyBucket,

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("observability.metrics_address is not a valid socket address: {0}")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    // The store client speaks plain HTTP; TLS termination in front of the
    // store is an infrastructure concern.
    match Url::parse(&config.object_store.endpoint) {
        Ok(url) if url.scheme() == "http" => {}
        _ => errors.push(ValidationError::InvalidEndpoint(
            config.object_store.endpoint.clone(),
        )),
    }

    if config.object_store.bucket.is_empty() {
        errors.push(ValidationError::EmptyBucket);
    }

    for (name, value) in [
        ("connect_secs", config.timeouts.connect_secs),
        ("store_secs", config.timeouts.store_secs),
        ("request_secs", config.timeouts.request_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroTimeout(name));
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_https_endpoint_rejected() {
        let mut config = GatewayConfig::default();
        config.object_store.endpoint = "https://store.example.com".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.object_store.endpoint = "ftp://wrong".to_string();
        config.object_store.bucket = String::new();
        config.timeouts.store_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyBucket));
        assert!(errors.contains(&ValidationError::ZeroTimeout("store_secs")));
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "bogus".to_string();

        assert!(validate_config(&config).is_ok());
    }
}
