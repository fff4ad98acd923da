//! Shared frontend utilities for API access, configuration, errors, escaping,
//! and build metadata.
//!
//! ## Admin Authentication
//!
//! The moderation API uses HTTP Basic authentication with no session cookie or
//! token issuance:
//! 1. **Login:** the admin enters a username and password; the frontend encodes
//!    `username:password` as Base64 and keeps it in memory only.
//! 2. **Probe:** the credentials are validated by `GET /api/admin/pending`; the
//!    probe payload doubles as the initial pending list.
//! 3. **Usage:** every admin request carries `Authorization: Basic <credentials>`.
//!    Any 401 discards the credentials and returns to the login form.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging
//! credential material.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod html;
#[cfg(test)]
pub(crate) mod test_support;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) use api::{check_status, ApiRequest, ApiResponse, HttpClient};
pub(crate) use errors::AppError;
