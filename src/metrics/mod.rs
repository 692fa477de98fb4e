//! Lock-free run statistics shared by all workers.
mod recorder;


pub use recorder::{StatsRecorder, StatsSnapshot};
