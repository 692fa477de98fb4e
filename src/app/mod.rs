//! The dispatch engine: static partitioning, worker loops, and the
//! final summary rendering.
mod runner;
mod summary;
mod worker;


pub use runner::run_bench;
pub use summary::summary_lines;
