use clap::Parser;

use super::types::HttpMethod;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal async HTTP load generator - fixed request budget, fixed concurrency, lock-free stats, single-screen summary."
)]
pub struct BenchArgs {
    /// Total number of requests (rounded down to a multiple of the concurrency level)
    #[arg(long, short = 'n', default_value_t = 1000)]
    pub requests: u64,

    /// Number of concurrent workers
    #[arg(long, short = 'c', default_value_t = 1)]
    pub concurrency: u64,

    /// Per-request timeout in milliseconds
    #[arg(long = "timeout", short = 't', default_value_t = 100)]
    pub timeout_ms: u64,

    /// Target URL (absolute, http or https)
    #[arg(long, short = 'u')]
    pub url: String,

    /// HTTP method to use
    #[arg(long, short = 'm', default_value = "get", ignore_case = true)]
    pub method: HttpMethod,

    /// URL-encoded query parameters appended to the target URL
    #[arg(long, short = 'p', default_value = "")]
    pub params: String,

    /// JSON request body (for POST/PUT/PATCH)
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}
