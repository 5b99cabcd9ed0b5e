pub use reqwest::StatusCode;
use thiserror::Error;

/// Anything that can go wrong while loading a page of creatures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PokeAPI returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("load cancelled")]
    Cancelled,
}
