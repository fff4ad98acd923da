use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted message waiting for an approve/reject decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMessage {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Endpoint that applies this decision to the message with `id`.
    pub fn path(self, id: i64) -> String {
        match self {
            Decision::Approve => format!("/api/admin/approve/{id}"),
            Decision::Reject => format!("/api/admin/reject/{id}"),
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Decision::Approve => "Failed to approve message. Please try again.",
            Decision::Reject => "Failed to reject message. Please try again.",
        }
    }
}
