use std::num::NonZeroU64;
use std::time::Duration;

use clap::ValueEnum;
use url::Url;

use crate::error::{AppError, AppResult, ValidationError};

use super::cli::BenchArgs;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Validated run configuration. Built once from CLI args, immutable after.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub requests: NonZeroU64,
    pub concurrency: NonZeroU64,
    pub timeout: Duration,
    pub target: Url,
    pub method: HttpMethod,
    pub params: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl BenchConfig {
    /// Validate CLI args into an immutable run configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero request count, zero
    /// concurrency, zero timeout, a relative or non-http(s) URL, or an
    /// unparseable JSON body. A malformed `--params` string degrades to
    /// empty parameters instead of erroring.
    pub fn from_args(args: &BenchArgs) -> AppResult<Self> {
        let requests =
            NonZeroU64::new(args.requests).ok_or(ValidationError::RequestsZero)?;
        let concurrency =
            NonZeroU64::new(args.concurrency).ok_or(ValidationError::ConcurrencyZero)?;
        if args.timeout_ms == 0 {
            return Err(AppError::validation(ValidationError::TimeoutZero));
        }

        let target = Url::parse(&args.url).map_err(|source| ValidationError::InvalidUrl {
            value: args.url.clone(),
            source,
        })?;
        let scheme = target.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ValidationError::UnsupportedScheme {
                scheme: scheme.to_owned(),
            }
            .into());
        }

        let body = args
            .data
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|source| ValidationError::InvalidBody { source })?;

        Ok(Self {
            requests,
            concurrency,
            timeout: Duration::from_millis(args.timeout_ms),
            target,
            method: args.method,
            params: parse_params(&args.params),
            body,
        })
    }

    /// Per-worker iteration count: integer division, remainder dropped.
    /// With `c` workers exactly `c * (n / c)` attempts happen in total.
    #[must_use]
    pub fn per_worker_requests(&self) -> u64 {
        self.requests
            .get()
            .checked_div(self.concurrency.get())
            .unwrap_or(0)
    }
}

/// Lossy query-string parsing: fragments that do not decode into a
/// key=value pair degrade to empty keys, which are discarded.
fn parse_params(raw: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
