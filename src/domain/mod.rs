mod config;
mod error;
mod proposal;

pub use config::{ApiConfig, BACKEND_URL_ENV};
pub use error::AppError;
pub use proposal::Proposal;
