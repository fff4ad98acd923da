//! Moderation feature: Basic-auth session handling, the pending-message queue,
//! and approve/reject decisions. This module holds the admin credentials and
//! must never log them.
//!
//! Flow Overview: login stores `base64(user:pass)` in memory and probes
//! `GET /api/admin/pending`; the probe payload is rendered as the first list.
//! Approve and reject POST to an id-specific path and then reload the list.

pub(crate) mod client;
pub(crate) mod credentials;
pub(crate) mod session;
pub(crate) mod types;
pub(crate) mod view;
