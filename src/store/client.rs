//! HTTP client for the object store.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Response, Uri};
use hyper::body::Incoming;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use thiserror::Error;

use crate::config::schema::{ObjectStoreConfig, TimeoutConfig};
use crate::store::credential::{CredentialError, DelegatedCredential};

/// Errors from a single store call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object store call exceeded {0:?}")]
    Timeout(Duration),

    #[error("object store unreachable: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("invalid object URI: {0}")]
    Uri(#[from] axum::http::uri::InvalidUri),

    #[error("failed to build store request: {0}")]
    Http(#[from] axum::http::Error),
}

/// Client for authenticated GET-by-key against the object store.
///
/// Holds the delegated credential and the call deadline; shared
/// read-only across all in-flight requests.
pub struct ObjectStore {
    client: Client<HttpConnector, Body>,
    base_url: String,
    authorization: HeaderValue,
    deadline: Duration,
}

impl ObjectStore {
    /// Build the store client. Fails only if the delegated credential
    /// cannot be carried as a header value.
    pub fn new(
        config: &ObjectStoreConfig,
        credential: &DelegatedCredential,
        timeouts: &TimeoutConfig,
    ) -> Result<Self, CredentialError> {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(timeouts.connect_secs)));

        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build(connector),
            base_url: format!("{}/{}", config.endpoint.trim_end_matches('/'), config.bucket),
            authorization: credential.authorization()?,
            deadline: Duration::from_secs(timeouts.store_secs),
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Fetch an object by key. Exactly one attempt, bounded by the
    /// configured deadline.
    pub async fn fetch(&self, key: &str) -> Result<Response<Incoming>, StoreError> {
        let uri: Uri = self.object_url(key).parse()?;

        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::AUTHORIZATION, self.authorization.clone())
            .body(Body::empty())?;

        match tokio::time::timeout(self.deadline, self.client.request(request)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout(self.deadline)),
        }
    }
}
