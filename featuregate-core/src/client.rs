//! Decision client combining the allow-list and rollout stages.

use crate::allow_list::{AllowList, HttpAllowList};
use crate::{FeatureGateConfig, FeatureGateError, Result, rollout};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a feature evaluation, with the reason behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Both stages passed or were disabled.
    Enabled,
    /// The allow list vetoed the entity. Rollout was not consulted.
    DeniedByAllowList,
    /// The entity's bucket lies outside the rollout percentage.
    OutsideRollout {
        /// Bucket the identifier hashed to.
        bucket: u8,
        /// Configured rollout percentage.
        percentage: i32,
    },
}

impl Decision {
    /// Whether the feature is on.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Answers "is this feature on for this entity" from one configuration.
///
/// Holds no state besides its configuration and allow-list backend; every
/// call re-asks the allow list.
#[derive(Clone)]
pub struct FeatureGateClient {
    config: Arc<FeatureGateConfig>,
    allow_list: Option<Arc<dyn AllowList>>,
}

impl FeatureGateClient {
    /// Create a client that checks the HTTP allow list when enabled.
    ///
    /// The transport is only built when `use_allow_list` is set.
    pub fn new(config: FeatureGateConfig) -> Result<Self> {
        let allow_list = if config.use_allow_list {
            Some(Arc::new(HttpAllowList::new(&config)?) as Arc<dyn AllowList>)
        } else {
            None
        };

        Ok(Self {
            config: Arc::new(config),
            allow_list,
        })
    }

    /// Create a client with a custom allow-list backend.
    ///
    /// The backend is only consulted when `use_allow_list` is set.
    pub fn with_allow_list(config: FeatureGateConfig, allow_list: Arc<dyn AllowList>) -> Self {
        Self {
            config: Arc::new(config),
            allow_list: Some(allow_list),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &FeatureGateConfig {
        &self.config
    }

    /// Evaluate `feature` for `id`.
    ///
    /// An allow-list failure is returned as [`FeatureGateError::AllowListCheck`]
    /// and never turned into a verdict.
    pub async fn evaluate(&self, feature: &str, id: &str) -> Result<Decision> {
        if !self.check_allow_list(feature, id).await? {
            debug!(feature, id, "Feature denied by allow list");
            return Ok(Decision::DeniedByAllowList);
        }

        if self.config.use_rollout {
            let bucket = rollout::bucket(id);
            let percentage = self.config.rollout_percentage;
            if i32::from(bucket) >= percentage {
                debug!(feature, id, bucket, percentage, "Feature outside rollout");
                return Ok(Decision::OutsideRollout { bucket, percentage });
            }
        }

        debug!(feature, id, "Feature enabled");
        Ok(Decision::Enabled)
    }

    /// Whether `feature` is enabled for `id`.
    pub async fn is_enabled(&self, feature: &str, id: &str) -> Result<bool> {
        Ok(self.evaluate(feature, id).await?.is_enabled())
    }

    async fn check_allow_list(&self, feature: &str, id: &str) -> Result<bool> {
        if !self.config.use_allow_list {
            return Ok(true);
        }
        let Some(allow_list) = &self.allow_list else {
            return Ok(true);
        };

        allow_list.is_allowed(feature, id).await.map_err(|source| {
            warn!(feature, id, error = %source, "Allow-list check failed");
            FeatureGateError::allow_list(source)
        })
    }
}
