//! Client wrappers for the moderation endpoints. Every request goes through
//! [`AdminClient::authenticated_fetch`], which is the only place the Basic
//! header is attached; it cannot be called without credentials.

use crate::{
    app_lib::{check_status, ApiRequest, ApiResponse, AppError, HttpClient},
    features::moderation::{
        credentials::Credentials,
        types::{Decision, PendingMessage},
    },
};

/// Lists pending messages; also used as the login probe.
pub const PENDING_PATH: &str = "/api/admin/pending";

pub struct AdminClient<C> {
    http: C,
}

impl<C: HttpClient> AdminClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Sends `request` with the caller's headers plus the Basic header, which
    /// replaces any caller-supplied `Authorization`. A 401 maps to
    /// [`AppError::Unauthorized`]; other non-2xx statuses to [`AppError::Http`].
    pub async fn authenticated_fetch(
        &self,
        credentials: &Credentials,
        request: ApiRequest,
    ) -> Result<ApiResponse, AppError> {
        let request = request.header("Authorization", credentials.authorization());
        let response = self.http.send(request).await?;
        check_status(response)
    }

    /// Fetches the moderation queue in server order.
    pub async fn list_pending(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<PendingMessage>, AppError> {
        self.authenticated_fetch(credentials, ApiRequest::get(PENDING_PATH))
            .await?
            .json()
    }

    /// Applies an approve/reject decision; the response body is ignored.
    pub async fn decide(
        &self,
        credentials: &Credentials,
        id: i64,
        decision: Decision,
    ) -> Result<(), AppError> {
        self.authenticated_fetch(credentials, ApiRequest::post(decision.path(id)))
            .await
            .map(|_| ())
    }
}
