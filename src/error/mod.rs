mod app;
mod validation;

pub use app::{AppError, AppResult};
pub use validation::ValidationError;
