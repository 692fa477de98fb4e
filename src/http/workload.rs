use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::args::{BenchConfig, HttpMethod};
use crate::error::AppResult;

/// Immutable task descriptor shared read-only by every worker: the fully
/// composed URL, the method, and the optional body held as owned bytes.
///
/// The body is never a single-read stream. Each request gets its own copy,
/// so concurrent workers can replay the same template indefinitely.
#[derive(Debug, Clone)]
pub struct Workload {
    url: Url,
    method: HttpMethod,
    body: Option<Vec<u8>>,
}

impl Workload {
    /// Compose the request template from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured JSON body fails to serialize.
    pub fn from_config(config: &BenchConfig) -> AppResult<Self> {
        let mut url = config.target.clone();
        if !config.params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(config.params.iter().map(|(key, value)| (key, value)));
        }

        let body = config
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()?;

        Ok(Self {
            url,
            method: config.method,
            body,
        })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Build a concrete request from the template.
    ///
    /// # Errors
    ///
    /// Returns an error when the client rejects the composed request.
    pub fn build_request(&self, client: &Client) -> AppResult<reqwest::Request> {
        let mut builder = client.request(self.method.into(), self.url.clone());
        if let Some(body) = &self.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }
        builder.build().map_err(Into::into)
    }
}
