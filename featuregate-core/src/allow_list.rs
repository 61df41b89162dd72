//! Remote allow-list stage.

use crate::error::BoxError;
use crate::{FeatureGateConfig, FeatureGateError, Result};
use async_trait::async_trait;
use featuregate_http_client::{HttpClient, HttpClientConfig};

/// Header carrying the API key on allow-list requests.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Source of allow-list verdicts.
///
/// Any error returned here fails the whole evaluation with
/// [`FeatureGateError::AllowListCheck`].
#[async_trait]
pub trait AllowList: Send + Sync {
    /// Whether `id` is allowed to see `feature`.
    async fn is_allowed(&self, feature: &str, id: &str) -> std::result::Result<bool, BoxError>;
}

/// Allow list backed by `GET {base_url}/check?feature=..&id=..`.
pub struct HttpAllowList {
    client: HttpClient,
    check_url: String,
    api_key: String,
}

impl HttpAllowList {
    /// Build the HTTP allow list from the gate configuration.
    pub fn new(config: &FeatureGateConfig) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build();
        let client = HttpClient::new(http_config).map_err(FeatureGateError::Transport)?;

        Ok(Self {
            client,
            check_url: format!("{}/check", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    /// The endpoint queried for every check, without query parameters.
    pub fn check_url(&self) -> &str {
        &self.check_url
    }
}

#[async_trait]
impl AllowList for HttpAllowList {
    async fn is_allowed(&self, feature: &str, id: &str) -> std::result::Result<bool, BoxError> {
        let response = self
            .client
            .get(self.check_url.as_str())
            .query("feature", feature)
            .query("id", id)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?
            .error_for_status()?;

        Ok(parse_verdict(&response.text()?))
    }
}

/// Interpret an allow-list response body.
///
/// Surrounding whitespace is ignored and `true` matches case-insensitively;
/// anything else is a denial rather than an error.
pub fn parse_verdict(body: &str) -> bool {
    body.trim().eq_ignore_ascii_case("true")
}
