//! Request template construction and the transport seam used by workers.
mod transport;
mod workload;

#[cfg(test)]
mod tests;

pub use transport::{HttpTransport, Outcome, Transport};
pub use workload::Workload;
