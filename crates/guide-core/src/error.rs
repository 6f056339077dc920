// crates/guide-core/src/error.rs
use thiserror::Error;

/// Errors raised at the I/O edges of the crate.
///
/// Lookups never produce these: a missing district, region or time zone
/// degrades to `None` or a default view. Only loading a dataset, writing a
/// cache or fetching a map file can fail hard.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cache")]
    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("http error: {0}")]
    Http(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GuideError>;
