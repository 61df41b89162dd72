//! # featuregate HTTP client
//!
//! A small HTTP client used by the allow-list stage of the feature gate.
//! It wraps `reqwest` with explicit connect and whole-request timeouts,
//! URL-encoded query parameters and typed errors.
//!
//! There is deliberately no retry or circuit breaker: a failed call surfaces
//! to the caller exactly once.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use featuregate_http_client::{HttpClient, HttpClientConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::builder()
//!         .connect_timeout(Duration::from_millis(500))
//!         .timeout(Some(Duration::from_secs(2)))
//!         .build();
//!     let client = HttpClient::new(config)?;
//!
//!     let response = client
//!         .get("https://flags.example.com/check")
//!         .query("feature", "new-ui")
//!         .query("id", "user-123")
//!         .header("x-api-key", "secret")
//!         .send()
//!         .await?
//!         .error_for_status()?;
//!
//!     println!("verdict: {}", response.text()?);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::RequestBuilder;
pub use response::Response;
