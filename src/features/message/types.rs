use serde::{Deserialize, Serialize};

/// The message of the day. The backend also sends `id` and `created_at`,
/// which the widget does not use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedMessage {
    pub content: String,
}

/// Progress of the "share a message" form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(&'static str),
}

#[cfg(test)]
mod tests {
    use super::DisplayedMessage;

    #[test]
    fn displayed_message_ignores_extra_fields() {
        let message: DisplayedMessage = serde_json::from_str(
            r#"{"id": 3, "content": "You are enough", "created_at": "2024-02-14T09:30:00Z"}"#,
        )
        .expect("Failed to deserialize");
        assert_eq!(message.content, "You are enough");
    }
}
