// featuregate - allow-list and percentage-rollout feature gate
//
// Re-exports the gate and adds process-wide convenience functions for code
// that cannot pass a `FeatureGate` handle around.

// Re-export core functionality
pub use featuregate_core::*;

// Re-export the transport for callers inspecting allow-list failures
pub use featuregate_http_client;

/// Initialize the process-wide gate, replacing any previous client.
pub fn init(config: FeatureGateConfig) -> Result<()> {
    FeatureGate::global().init(config)
}

/// Ask the process-wide gate whether `feature` is enabled for `id`.
///
/// Fails with [`FeatureGateError::Uninitialized`] if [`init`] was never called.
pub async fn is_enabled(feature: &str, id: &str) -> Result<bool> {
    FeatureGate::global().is_enabled(feature, id).await
}

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        AllowList, Decision, FeatureGate, FeatureGateClient, FeatureGateConfig, FeatureGateError,
        Result,
    };
}
