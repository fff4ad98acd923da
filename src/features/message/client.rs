//! Client helpers for the public message endpoints. No credentials are ever
//! attached here.

use crate::{
    app_lib::{check_status, ApiRequest, AppError, HttpClient},
    features::message::types::DisplayedMessage,
};

pub const MESSAGE_PATH: &str = "/api/message";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct MessageClient<C> {
    http: C,
}

impl<C: HttpClient> MessageClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Fetches a random approved message.
    pub async fn fetch_message(&self) -> Result<DisplayedMessage, AppError> {
        let response = self.http.send(ApiRequest::get(MESSAGE_PATH)).await?;
        check_status(response)?.json()
    }

    /// Submits a new message for moderation as a form post. Blank content is
    /// rejected before any request is made.
    pub async fn submit_message(&self, content: &str) -> Result<(), AppError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "Message content cannot be empty".to_string(),
            ));
        }

        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("content", trimmed)
            .finish();
        let request = ApiRequest::post(MESSAGE_PATH).body(FORM_CONTENT_TYPE, body);
        check_status(self.http.send(request).await?).map(|_| ())
    }
}
