//! The gate callers query.
//!
//! [`FeatureGate`] is a cheap, cloneable handle around one atomically
//! swappable [`FeatureGateClient`] slot. Pass it explicitly where possible;
//! [`FeatureGate::global`] exists for code that cannot thread a handle
//! through.

use crate::client::{Decision, FeatureGateClient};
use crate::{FeatureGateConfig, FeatureGateError, Result};
use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

static GLOBAL: Lazy<FeatureGate> = Lazy::new(FeatureGate::new);

/// Feature gate holding at most one decision client.
///
/// Clones share the same slot, so an `init` through any clone is visible to
/// all of them. Readers take a snapshot of the client per call; a concurrent
/// re-`init` never affects a call already in flight.
#[derive(Clone, Default)]
pub struct FeatureGate {
    slot: Arc<ArcSwapOption<FeatureGateClient>>,
}

impl FeatureGate {
    /// Create an uninitialized gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide gate.
    pub fn global() -> &'static FeatureGate {
        &GLOBAL
    }

    /// Build a client from `config` and install it, replacing any previous one.
    pub fn init(&self, config: FeatureGateConfig) -> Result<()> {
        let client = FeatureGateClient::new(config)?;
        self.init_with_client(client);
        Ok(())
    }

    /// Install a pre-built client, replacing any previous one.
    pub fn init_with_client(&self, client: FeatureGateClient) {
        let config = client.config();
        debug!(
            rollout_percentage = config.rollout_percentage,
            use_allow_list = config.use_allow_list,
            use_rollout = config.use_rollout,
            "Feature gate initialized"
        );
        self.slot.store(Some(Arc::new(client)));
    }

    /// Whether a client has been installed.
    pub fn is_initialized(&self) -> bool {
        self.slot.load().is_some()
    }

    /// Evaluate `feature` for `id` with the installed client.
    pub async fn evaluate(&self, feature: &str, id: &str) -> Result<Decision> {
        self.client()?.evaluate(feature, id).await
    }

    /// Whether `feature` is enabled for `id`.
    ///
    /// Fails with [`FeatureGateError::Uninitialized`] before `init`, and with
    /// [`FeatureGateError::AllowListCheck`] when the allow list cannot be
    /// reached. Callers choose the failure policy, e.g.
    /// `gate.is_enabled(f, id).await.unwrap_or(false)` to fail closed.
    pub async fn is_enabled(&self, feature: &str, id: &str) -> Result<bool> {
        self.client()?.is_enabled(feature, id).await
    }

    fn client(&self) -> Result<Arc<FeatureGateClient>> {
        self.slot.load_full().ok_or(FeatureGateError::Uninitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allow_list::AllowList;
    use crate::error::BoxError;
    use async_trait::async_trait;

    struct Fixed(bool);

    #[async_trait]
    impl AllowList for Fixed {
        async fn is_allowed(
            &self,
            _feature: &str,
            _id: &str,
        ) -> std::result::Result<bool, BoxError> {
            Ok(self.0)
        }
    }

    fn client(allowed: bool) -> FeatureGateClient {
        let config = FeatureGateConfig::builder().use_rollout(false).build();
        FeatureGateClient::with_allow_list(config, Arc::new(Fixed(allowed)))
    }

    #[tokio::test]
    async fn test_uninitialized() {
        let gate = FeatureGate::new();
        assert!(!gate.is_initialized());

        let err = gate.is_enabled("feature-x", "user-123").await.unwrap_err();
        assert!(err.is_uninitialized());
        assert!(matches!(
            gate.evaluate("feature-x", "user-123").await,
            Err(FeatureGateError::Uninitialized)
        ));
    }

    #[tokio::test]
    async fn test_init_forwards() {
        let gate = FeatureGate::new();
        gate.init_with_client(client(true));

        assert!(gate.is_initialized());
        assert!(gate.is_enabled("feature-x", "user-123").await.unwrap());
    }

    #[tokio::test]
    async fn test_reinit_replaces_client() {
        let gate = FeatureGate::new();
        gate.init_with_client(client(true));
        assert!(gate.is_enabled("f", "u").await.unwrap());

        gate.init_with_client(client(false));
        assert_eq!(
            gate.evaluate("f", "u").await.unwrap(),
            Decision::DeniedByAllowList
        );
    }

    #[tokio::test]
    async fn test_clones_share_slot() {
        let gate = FeatureGate::new();
        let handle = gate.clone();

        gate.init(
            FeatureGateConfig::builder()
                .use_allow_list(false)
                .use_rollout(false)
                .build(),
        )
        .unwrap();

        assert!(handle.is_initialized());
        assert!(handle.is_enabled("f", "anyone").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_reinit_and_reads() {
        let gate = FeatureGate::new();
        gate.init_with_client(client(true));

        let writer = {
            let gate = gate.clone();
            tokio::spawn(async move {
                for i in 0..100 {
                    gate.init_with_client(client(i % 2 == 0));
                    tokio::task::yield_now().await;
                }
            })
        };

        let mut readers = Vec::new();
        for _ in 0..4 {
            let gate = gate.clone();
            readers.push(tokio::spawn(async move {
                for _ in 0..100 {
                    // Every read sees one complete client, never an empty slot.
                    gate.is_enabled("f", "u").await.unwrap();
                    tokio::task::yield_now().await;
                }
            }));
        }

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }
    }
}
