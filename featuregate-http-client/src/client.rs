//! HTTP client implementation.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::{HttpClientConfig, HttpClientError, RequestBuilder, Response, Result};

/// HTTP client with explicit connect and request timeouts.
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    ///
    /// Fails only when the TLS backend cannot be initialized.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("featuregate-http-client/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder.build()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, url.into())
    }

    /// Execute a request once. Failed requests are never retried.
    pub(crate) async fn execute(&self, request: reqwest::Request) -> Result<Response> {
        let url = request.url().clone();

        let response = match self.inner.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let err = self.classify(e);
                debug!(%url, error = %err, "HTTP request failed");
                return Err(err);
            }
        };

        debug!(%url, status = %response.status(), "HTTP request completed");
        Response::from_reqwest(response)
            .await
            .map_err(|e| self.classify(e))
    }

    /// Map a transport error onto the typed error, keeping the timeout that fired.
    fn classify(&self, error: reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            let after = if error.is_connect() {
                self.config.connect_timeout
            } else {
                self.config.timeout.unwrap_or(self.config.connect_timeout)
            };
            HttpClientError::Timeout(after)
        } else if error.is_connect() {
            HttpClientError::Connection(error.to_string())
        } else {
            HttpClientError::Http(error)
        }
    }
}
