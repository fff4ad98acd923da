//! Display model for the pending list. Message content is escaped here, once,
//! and inserted as markup by the card component; nothing else in the UI
//! touches raw user content.

use crate::{app_lib::html::escape_html, features::moderation::types::PendingMessage};
use chrono::{DateTime, Utc};

pub const EMPTY_PLACEHOLDER: &str = "No pending messages";
pub const LOAD_FAILED: &str = "Failed to load messages";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// Nothing loaded yet.
    #[default]
    Idle,
    Empty,
    Cards(Vec<MessageCard>),
    Failed,
}

impl ListView {
    pub fn render(messages: &[PendingMessage]) -> Self {
        if messages.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(messages.iter().map(MessageCard::from).collect())
        }
    }

    /// Placeholder shown instead of cards, with its CSS class.
    pub fn notice(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ListView::Empty => Some(("empty", EMPTY_PLACEHOLDER)),
            ListView::Failed => Some(("error", LOAD_FAILED)),
            ListView::Idle | ListView::Cards(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageCard {
    pub id: i64,
    pub element_id: String,
    /// HTML-escaped message content, safe for `inner_html`.
    pub content_html: String,
    pub created_label: String,
}

impl From<&PendingMessage> for MessageCard {
    fn from(message: &PendingMessage) -> Self {
        Self {
            id: message.id,
            element_id: format!("message-{}", message.id),
            content_html: escape_html(&message.content),
            created_label: locale_timestamp(&message.created_at),
        }
    }
}

/// Formats a timestamp with the browser's locale.
#[cfg(target_arch = "wasm32")]
fn locale_timestamp(at: &DateTime<Utc>) -> String {
    #[allow(clippy::cast_precision_loss)]
    let millis = at.timestamp_millis() as f64;
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
