use thiserror::Error;

pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;
pub mod client;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },
}
