//! HTTP response wrapper.

use crate::{HttpClientError, Result};
use bytes::Bytes;
use http::StatusCode;

/// HTTP response with a fully buffered body.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    /// Create a response from a reqwest response, reading the whole body.
    pub(crate) async fn from_reqwest(
        response: reqwest::Response,
    ) -> std::result::Result<Self, reqwest::Error> {
        let status = response.status();
        let body = response.bytes().await?;

        Ok(Self { status, body })
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| HttpClientError::Decode(e.to_string()))
    }

    /// Turn any non-2xx status into [`HttpClientError::Response`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            let message = self
                .text()
                .ok()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| {
                    self.status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            Err(HttpClientError::Response {
                status: self.status.as_u16(),
                message,
            })
        }
    }
}
