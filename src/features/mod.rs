//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while the request handling and state
//! transitions stay testable off the browser.

pub(crate) mod message;
pub(crate) mod moderation;
