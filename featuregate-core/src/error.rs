//! Feature gate error types.

use featuregate_http_client::HttpClientError;
use thiserror::Error;

/// Boxed cause carried by [`FeatureGateError::AllowListCheck`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for feature gate operations.
pub type Result<T> = std::result::Result<T, FeatureGateError>;

/// Feature gate errors.
#[derive(Debug, Error)]
pub enum FeatureGateError {
    /// The gate was queried before `init`. This is a caller bug, not a
    /// transient condition.
    #[error("feature gate has not been initialized")]
    Uninitialized,

    /// The remote allow-list check could not be completed.
    ///
    /// No default verdict is substituted; the caller decides whether a failed
    /// check means enabled or disabled.
    #[error("failed to check allow list")]
    AllowListCheck {
        /// Underlying transport or protocol failure.
        #[source]
        source: BoxError,
    },

    /// Configuration could not be loaded.
    #[error("invalid feature gate configuration: {0}")]
    Config(String),

    /// The HTTP transport could not be constructed.
    #[error("failed to build allow-list transport: {0}")]
    Transport(#[source] HttpClientError),
}

impl FeatureGateError {
    /// Wrap any error as an allow-list check failure.
    pub fn allow_list(source: impl Into<BoxError>) -> Self {
        Self::AllowListCheck {
            source: source.into(),
        }
    }

    /// Whether the allow-list check failed because a timeout fired.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::AllowListCheck { source } => source
                .downcast_ref::<HttpClientError>()
                .is_some_and(HttpClientError::is_timeout),
            _ => false,
        }
    }

    /// Whether this error signals misuse of the gate rather than a runtime
    /// failure.
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }
}
