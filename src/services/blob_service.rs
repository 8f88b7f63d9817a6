//! src/services/blob_service.rs
//!
//! BlobService — thin client for the Vercel Blob HTTP API plus the one
//! procedure this tool exists for: read a local file and store it under
//! its own name with public access. The service keeps a minimal surface
//! area so it is easy to test and reason about.

use crate::errors::{BlobError, BlobResult};
use crate::models::blob::{ApiErrorBody, PutBlobResult};
use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode, header};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::debug;

// Service-side limit on pathname length.
const MAX_PATHNAME_LEN: usize = 950;

// Disables the server-side random suffix so the stored pathname matches
// the requested key exactly.
const X_ADD_RANDOM_SUFFIX: &str = "x-add-random-suffix";
// MIME type of the payload being uploaded.
const X_CONTENT_TYPE: &str = "x-content-type";

// Encode set for URL paths, following encodeURIComponent: everything but
// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped. `/` stays literal so
// pathnames may address nested keys.
static PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn percent_encode_path(path: &str) -> String {
    utf8_percent_encode(path, &PATH_ENCODE_SET).to_string()
}

/// Visibility of a stored blob.
///
/// The service only supports publicly accessible blobs; the enum exists so
/// the call site states the visibility explicitly and a future private mode
/// has somewhere to land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
}

/// BlobService provides the two operations the tool needs:
/// - `put` stores a byte payload under a pathname and returns the locator
/// - `upload_file` reads a local file and puts it under its file name,
///   returning the public URL
#[derive(Clone)]
pub struct BlobService {
    http: Client,
    base_url: String,
    token: String,
}

// Keep the token out of log output.
impl fmt::Debug for BlobService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobService")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BlobService {
    /// Create a new BlobService talking to `base_url`, authorizing every
    /// request with `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Basic pathname validation to avoid trivial path traversal vectors.
    ///
    /// Rejects pathnames that are empty, begin with `/`, or contain `..`,
    /// backslashes, or control characters.
    fn ensure_pathname_safe(&self, pathname: &str) -> BlobResult<()> {
        if pathname.is_empty() || pathname.len() > MAX_PATHNAME_LEN {
            return Err(BlobError::InvalidPathname);
        }
        if pathname.starts_with('/') || pathname.contains("..") {
            return Err(BlobError::InvalidPathname);
        }
        if pathname
            .bytes()
            .any(|b| b.is_ascii_control() || b == b'\\' || b == b'\0')
        {
            return Err(BlobError::InvalidPathname);
        }
        Ok(())
    }

    /// Store `payload` under `pathname` and return the service's locator.
    ///
    /// The payload is sent exactly as given; the random-suffix behavior is
    /// disabled so the stored pathname matches the requested one.
    pub async fn put(
        &self,
        pathname: &str,
        payload: Bytes,
        access: Access,
    ) -> BlobResult<PutBlobResult> {
        self.ensure_pathname_safe(pathname)?;

        // Only public blobs exist today; stated for parity with the API shape.
        let Access::Public = access;

        let url = format!("{}/{}", self.base_url, percent_encode_path(pathname));
        debug!("PUT {} ({} bytes)", url, payload.len());

        let resp = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .header(X_ADD_RANDOM_SUFFIX, "0")
            .header(X_CONTENT_TYPE, content_type_for(pathname))
            .header(header::CONTENT_LENGTH, payload.len())
            .body(payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let blob: PutBlobResult = serde_json::from_slice(&body)?;
        Ok(blob)
    }

    /// Read `path` as UTF-8 text and store it publicly under its file name,
    /// returning the public URL.
    ///
    /// The read completes before any request is built, so a missing or
    /// unreadable file never reaches the wire.
    pub async fn upload_file(&self, path: &Path) -> BlobResult<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(BlobError::InvalidPathname)?;

        let content = fs::read_to_string(path).await?;

        let blob = self
            .put(file_name, Bytes::from(content), Access::Public)
            .await?;

        tracing::info!("Stored {} at {}", blob.pathname, blob.url);
        Ok(blob.url)
    }
}

/// Map a non-2xx response to a typed error, parsing the service's error
/// envelope when the body carries one.
fn api_error(status: StatusCode, body: &[u8]) -> BlobError {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) => BlobError::Api {
            status,
            code: parsed.error.code,
            message: parsed.error.message.unwrap_or_default(),
        },
        Err(_) => BlobError::Api {
            status,
            code: String::new(),
            message: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

/// MIME type sent alongside the payload, derived from the pathname's
/// extension.
fn content_type_for(pathname: &str) -> &'static str {
    match pathname.rsplit_once('.').map(|(_, ext)| ext) {
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        Some("html") => "text/html",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}
