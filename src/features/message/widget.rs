//! Message-of-the-day widget. Failures are deliberately friendly: whatever goes
//! wrong, the display falls back to a fixed message and the error only reaches
//! the log. Only the reply to the most recent fetch is ever displayed.

use crate::{
    app_lib::HttpClient,
    features::message::{client::MessageClient, types::SubmissionStatus},
};
use std::cell::{Cell, RefCell};
use tracing::{debug, info, warn};

pub const LOADING_TEXT: &str = "Loading...";
pub const FALLBACK_TEXT: &str = "You are perfect as you are.";
pub const EMPTY_SUBMISSION: &str = "Message content cannot be empty";
pub const SUBMIT_FAILED: &str = "Could not send your message. Please try again.";
pub const SUBMITTED_TEXT: &str = "Thanks! Your message will appear once it is reviewed.";

/// Receives the widget's display updates.
pub trait MessageView {
    fn show_message(&self, text: &str);
    fn show_submission(&self, status: SubmissionStatus);
}

pub struct MessageWidget<C, V> {
    client: MessageClient<C>,
    view: V,
    text: RefCell<String>,
    latest_fetch: Cell<u64>,
}

impl<C: HttpClient, V: MessageView> MessageWidget<C, V> {
    pub fn new(http: C, view: V) -> Self {
        Self {
            client: MessageClient::new(http),
            view,
            text: RefCell::new(String::new()),
            latest_fetch: Cell::new(0),
        }
    }

    /// Text currently on display.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Shows the loading text, fetches a message and displays it, or the
    /// fallback on any failure. Returns the text on display afterwards; a reply
    /// overtaken by a newer fetch is discarded.
    pub async fn fetch_message(&self) -> String {
        let ticket = self.latest_fetch.get() + 1;
        self.latest_fetch.set(ticket);
        self.display(LOADING_TEXT);

        let result = self.client.fetch_message().await;
        if self.latest_fetch.get() != ticket {
            debug!("stale message reply dropped");
            return self.text();
        }

        let text = match result {
            Ok(message) => message.content,
            Err(err) => {
                warn!(error = %err, "message of the day unavailable");
                FALLBACK_TEXT.to_string()
            }
        };
        self.display(&text);
        text
    }

    /// Sends a message into the moderation queue. Returns true when the
    /// message was accepted so the caller can clear its input.
    pub async fn submit_message(&self, content: &str) -> bool {
        if content.trim().is_empty() {
            self.view
                .show_submission(SubmissionStatus::Failed(EMPTY_SUBMISSION));
            return false;
        }

        self.view.show_submission(SubmissionStatus::Sending);
        match self.client.submit_message(content).await {
            Ok(()) => {
                info!("message submitted for review");
                self.view.show_submission(SubmissionStatus::Sent);
                true
            }
            Err(err) => {
                warn!(error = %err, "message submission failed");
                self.view
                    .show_submission(SubmissionStatus::Failed(SUBMIT_FAILED));
                false
            }
        }
    }

    fn display(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        self.view.show_message(text);
    }
}

impl SubmissionStatus {
    /// Line shown under the form, if any.
    pub fn notice(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
            SubmissionStatus::Sent => Some(SUBMITTED_TEXT),
            SubmissionStatus::Failed(message) => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::{
        test_support::{GatedClient, ScriptedClient},
        AppError,
    };
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingView {
        texts: Rc<RefCell<Vec<String>>>,
        submissions: Rc<RefCell<Vec<SubmissionStatus>>>,
    }

    impl MessageView for RecordingView {
        fn show_message(&self, text: &str) {
            self.texts.borrow_mut().push(text.to_string());
        }

        fn show_submission(&self, status: SubmissionStatus) {
            self.submissions.borrow_mut().push(status);
        }
    }

    fn widget() -> (
        MessageWidget<ScriptedClient, RecordingView>,
        ScriptedClient,
        RecordingView,
    ) {
        let http = ScriptedClient::new();
        let view = RecordingView::default();
        (MessageWidget::new(http.clone(), view.clone()), http, view)
    }

    #[tokio::test]
    async fn shows_loading_then_content() {
        let (widget, http, view) = widget();
        http.reply(200, r#"{"id": 1, "content": "You are loved."}"#);

        let text = widget.fetch_message().await;

        assert_eq!(text, "You are loved.");
        assert_eq!(widget.text(), "You are loved.");
        assert_eq!(
            *view.texts.borrow(),
            vec![LOADING_TEXT.to_string(), "You are loved.".to_string()]
        );
    }

    #[tokio::test]
    async fn network_error_and_server_error_share_the_fallback() {
        let (widget, http, _view) = widget();
        http.fail(AppError::Network("offline".to_string()))
            .reply(500, "Internal Server Error");

        let after_network_error = widget.fetch_message().await;
        let after_server_error = widget.fetch_message().await;

        assert_eq!(after_network_error, FALLBACK_TEXT);
        assert_eq!(after_server_error, FALLBACK_TEXT);
    }

    #[tokio::test]
    async fn malformed_body_falls_back_without_leaking_details() {
        let (widget, http, view) = widget();
        http.reply(200, "<html>oops</html>");

        widget.fetch_message().await;

        assert_eq!(widget.text(), FALLBACK_TEXT);
        assert!(view.texts.borrow().iter().all(|text| !text.contains("oops")));
    }

    #[tokio::test]
    async fn refresh_refetches_and_updates_content() {
        let (widget, http, _view) = widget();
        http.reply(200, r#"{"content": "first"}"#)
            .reply(200, r#"{"content": "second"}"#);

        assert_eq!(widget.fetch_message().await, "first");
        assert_eq!(widget.fetch_message().await, "second");
        assert_eq!(http.requests().len(), 2);
    }

    #[tokio::test]
    async fn older_reply_never_overwrites_newer_one() {
        let http = GatedClient::new();
        let view = RecordingView::default();
        let widget = MessageWidget::new(http.clone(), view.clone());

        let replies = async {
            http.release(1, 200, r#"{"content": "second"}"#).await;
            http.release(0, 200, r#"{"content": "first"}"#).await;
        };
        let (_, _, ()) = tokio::join!(widget.fetch_message(), widget.fetch_message(), replies);

        assert_eq!(widget.text(), "second");
        assert_eq!(view.texts.borrow().last().map(String::as_str), Some("second"));
        assert!(view.texts.borrow().iter().all(|text| text != "first"));
    }

    #[tokio::test]
    async fn submission_reports_progress() {
        let (widget, http, view) = widget();
        http.reply(200, "").reply(500, "");

        assert!(widget.submit_message("be kind").await);
        assert!(!widget.submit_message("be kind again").await);

        assert_eq!(
            *view.submissions.borrow(),
            vec![
                SubmissionStatus::Sending,
                SubmissionStatus::Sent,
                SubmissionStatus::Sending,
                SubmissionStatus::Failed(SUBMIT_FAILED),
            ]
        );
        assert_eq!(SubmissionStatus::Sent.notice(), Some(SUBMITTED_TEXT));
    }

    #[tokio::test]
    async fn blank_submission_is_rejected_locally() {
        let (widget, http, view) = widget();

        assert!(!widget.submit_message("   ").await);

        assert!(http.requests().is_empty());
        assert_eq!(
            *view.submissions.borrow(),
            vec![SubmissionStatus::Failed(EMPTY_SUBMISSION)]
        );
    }
}
