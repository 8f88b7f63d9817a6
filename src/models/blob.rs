//! Wire shapes returned by the blob API.

use serde::Deserialize;

/// Locator returned by a successful upload.
///
/// The blob store addresses content by an unguessable URL; `url` is the
/// publicly dereferenceable address of the stored blob and is the field
/// this tool ultimately reports.
///
/// The service also returns `downloadUrl`, `contentType`, and
/// `contentDisposition`; those are ignored on decode since nothing in the
/// tool consumes them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBlobResult {
    /// Public URL of the stored blob.
    pub url: String,

    /// Pathname the blob was stored under.
    pub pathname: String,
}

/// Error envelope returned by the blob API on a failed request.
#[derive(Default, Debug, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: Option<String>,
}
