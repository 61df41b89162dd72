//! Request builder.

use crate::{HttpClient, HttpClientError, Response, Result};
use http::{HeaderMap, HeaderName, HeaderValue};

/// GET request builder.
pub struct RequestBuilder<'a> {
    client: &'a HttpClient,
    url: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    invalid_header: Option<HttpClientError>,
}

impl<'a> RequestBuilder<'a> {
    /// Create a new request builder.
    pub(crate) fn new(client: &'a HttpClient, url: String) -> Self {
        Self {
            client,
            url,
            headers: HeaderMap::new(),
            query: Vec::new(),
            invalid_header: None,
        }
    }

    /// Add a header to the request.
    ///
    /// A name or value that is not valid header text makes [`send`](Self::send)
    /// fail with [`HttpClientError::InvalidHeader`]; the request is never sent
    /// without it.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => {
                if self.invalid_header.is_none() {
                    self.invalid_header = Some(HttpClientError::InvalidHeader(name));
                }
            }
        }
        self
    }

    /// Add a query parameter. Keys and values are percent-encoded on send.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Build the URL with query parameters.
    fn build_url(&self) -> Result<url::Url> {
        let mut url =
            url::Url::parse(&self.url).map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

        if !self.query.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Send the request.
    pub async fn send(mut self) -> Result<Response> {
        if let Some(err) = self.invalid_header.take() {
            return Err(err);
        }
        let url = self.build_url()?;

        let request = self.client.inner.get(url).headers(self.headers).build()?;

        self.client.execute(request).await
    }
}
