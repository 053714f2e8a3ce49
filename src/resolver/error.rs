use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("resource not found: {0}")]
    NotFound(u64),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
