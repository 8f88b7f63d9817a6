//! Data models for the blob API's JSON bodies.
//!
//! These mirror the wire shapes of the Vercel Blob service: the locator
//! returned by a successful upload and the error envelope returned on
//! rejection. All fields deserialize from camelCase via `serde`.

pub mod blob;
