//! Shared UI components exported for routes.

pub(crate) mod layout;
mod pending_card;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use pending_card::PendingCard;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
