//! Error taxonomy for the upload pipeline.
//!
//! Every failure path of the tool lands in one of these variants; the
//! binary's outer layer wraps them in `anyhow` context and exits non-zero.

use reqwest::StatusCode;
use thiserror::Error;

pub type BlobResult<T> = Result<T, BlobError>;

#[derive(Debug, Error)]
pub enum BlobError {
    /// Local read failures, including a missing input file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Transport-level failures talking to the blob API.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The service rejected the request.
    #[error("blob API returned {status}: {code}: {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },

    /// The service answered with a body that does not decode as a locator.
    #[error("malformed blob API response: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested blob pathname is empty, absolute, or contains
    /// traversal or control characters.
    #[error("invalid blob pathname")]
    InvalidPathname,
}
