//! Feature gate core
//!
//! Decides whether a feature is enabled for an entity by combining two
//! independent stages:
//!
//! 1. **Allow list** - an optional remote check,
//!    `GET {base_url}/check?feature=..&id=..`. A `false` verdict vetoes the
//!    feature outright; a failed check is an error, never a guess.
//! 2. **Rollout** - an optional deterministic percentage rollout. The
//!    identifier hashes to a bucket in `[0, 99]` and is included when the
//!    bucket is below the configured percentage.
//!
//! A disabled stage always passes.
//!
//! # Quick Start
//!
//! ```no_run
//! use featuregate_core::{FeatureGate, FeatureGateConfig};
//!
//! # async fn run() -> featuregate_core::Result<()> {
//! let gate = FeatureGate::new();
//! gate.init(
//!     FeatureGateConfig::builder()
//!         .base_url("https://flags.example.com")
//!         .api_key("secret")
//!         .rollout_percentage(25)
//!         .build(),
//! )?;
//!
//! if gate.is_enabled("new-checkout", "user-123").await? {
//!     // Serve the new checkout
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Rollout only
//!
//! ```
//! use featuregate_core::{FeatureGateClient, FeatureGateConfig};
//!
//! # tokio_test::block_on(async {
//! let client = FeatureGateClient::new(
//!     FeatureGateConfig::builder()
//!         .use_allow_list(false)
//!         .rollout_percentage(50)
//!         .build(),
//! )
//! .unwrap();
//!
//! // "user-123" hashes to bucket 2.
//! assert!(client.is_enabled("new-ui", "user-123").await.unwrap());
//! # });
//! ```

pub mod allow_list;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod rollout;

pub use allow_list::{AllowList, HttpAllowList};
pub use client::{Decision, FeatureGateClient};
pub use config::{FeatureGateConfig, FeatureGateConfigBuilder};
pub use error::{BoxError, FeatureGateError, Result};
pub use gate::FeatureGate;
