mod cli;
mod types;


pub use cli::BenchArgs;
pub use types::{BenchConfig, HttpMethod};
