use async_trait::async_trait;
use reqwest::{Client, Request};

use crate::args::BenchConfig;
use crate::error::AppResult;

/// First status code of the success range.
const SUCCESS_RANGE_START: u16 = 200;
/// First status code past the success range.
const SUCCESS_RANGE_END: u16 = 300;

/// Classified result of one request attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transport produced a response with this status code.
    Status(u16),
    /// The request did not complete within the configured deadline.
    TimedOut,
    /// Connection or protocol failure before a response arrived.
    Failed,
    /// A fresh request could not be constructed from the template. The
    /// attempt never reached the wire.
    BuildFailed,
}

impl Outcome {
    /// Success is exactly "status code indicates success" (2xx).
    /// Everything else, including non-2xx responses, is a failure.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Status(code) if code >= SUCCESS_RANGE_START && code < SUCCESS_RANGE_END)
    }

    #[must_use]
    pub const fn is_timeout(self) -> bool {
        matches!(self, Outcome::TimedOut)
    }
}

/// Seam over the HTTP client so the dispatch engine can run against
/// deterministic transports in tests. The per-request timeout is fixed at
/// construction time and never mutated during a run.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request attempt and classify it.
    async fn call(&self) -> Outcome;
}

/// reqwest-backed transport. The client carries the configured timeout;
/// the request template is built once and cloned per attempt.
pub struct HttpTransport {
    client: Client,
    template: Request,
}

impl HttpTransport {
    /// Build the shared client and request template.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed or the
    /// template request is rejected.
    pub fn new(config: &BenchConfig, workload: &super::Workload) -> AppResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let template = workload.build_request(&client)?;
        Ok(Self { client, template })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self) -> Outcome {
        // In-memory bodies always clone; a None here means the template
        // holds a non-replayable body and every attempt would fail the
        // same way.
        let Some(request) = self.template.try_clone() else {
            return Outcome::BuildFailed;
        };

        match self.client.execute(request).await {
            Ok(response) => Outcome::Status(response.status().as_u16()),
            Err(err) if err.is_timeout() => Outcome::TimedOut,
            Err(_) => Outcome::Failed,
        }
    }
}
