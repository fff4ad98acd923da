//! Public message-of-the-day feature: fetches a random approved message and
//! lets visitors submit new ones into the moderation queue.

pub(crate) mod client;
pub(crate) mod types;
pub(crate) mod widget;
