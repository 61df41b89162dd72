//! Process-wide gate lifecycle.
//!
//! Kept in its own test binary, and in a single test, so the global state is
//! not shared with other tests.

use featuregate::{FeatureGate, FeatureGateConfig, FeatureGateError};

#[tokio::test]
async fn test_global_gate_lifecycle() {
    assert!(!FeatureGate::global().is_initialized());
    assert!(matches!(
        featuregate::is_enabled("feature-x", "user-123").await,
        Err(FeatureGateError::Uninitialized)
    ));

    featuregate::init(
        FeatureGateConfig::builder()
            .use_allow_list(false)
            .rollout_percentage(50)
            .build(),
    )
    .unwrap();

    assert!(FeatureGate::global().is_initialized());
    // "user-123" is in bucket 2, "user-1" in bucket 94.
    assert!(featuregate::is_enabled("feature-x", "user-123").await.unwrap());
    assert!(!featuregate::is_enabled("feature-x", "user-1").await.unwrap());

    featuregate::init(
        FeatureGateConfig::builder()
            .use_allow_list(false)
            .use_rollout(false)
            .build(),
    )
    .unwrap();
    assert!(featuregate::is_enabled("feature-x", "user-1").await.unwrap());
}
