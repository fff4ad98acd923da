//! HTTP plumbing for the JSON API. Feature clients describe requests as
//! [`ApiRequest`] values and send them through an [`HttpClient`], which in the
//! browser is the `gloo-net` backed [`FetchClient`] with an abort timeout. The
//! helpers do not store credentials; they only attach headers provided by
//! callers.

use super::errors::AppError;
use serde::de::DeserializeOwned;

/// Default request timeout (milliseconds) applied by the fetch client.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters kept for diagnostics.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request relative to the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path.into())
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path.into())
    }

    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any existing header with the same name
    /// (compared case-insensitively).
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Sets the request body together with its content type.
    #[must_use]
    pub fn body(self, content_type: &str, body: String) -> Self {
        let mut request = self.header("Content-Type", content_type);
        request.body = Some(body);
        request
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    }
}

/// Transport used by the feature clients.
pub trait HttpClient {
    /// Sends the request. Only transport failures are errors here; HTTP status
    /// handling is left to [`check_status`].
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError>;
}

/// Classifies a response: 401 becomes [`AppError::Unauthorized`], any other
/// non-2xx status becomes [`AppError::Http`] with a sanitized body.
pub fn check_status(response: ApiResponse) -> Result<ApiResponse, AppError> {
    if response.status == 401 {
        return Err(AppError::Unauthorized);
    }
    if !response.ok() {
        return Err(AppError::Http {
            status: response.status,
            message: sanitize_body(&response.body),
        });
    }
    Ok(response)
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Trims and truncates an error body so it is safe to keep around.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchClient;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::{build_url_with_base, ApiRequest, ApiResponse, HttpClient, Method};
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    /// `fetch`-backed client bound to the configured API base URL.
    #[derive(Clone, Debug)]
    pub struct FetchClient {
        base_url: String,
        timeout_ms: u32,
    }

    impl FetchClient {
        pub fn new(config: &AppConfig) -> Self {
            Self {
                base_url: config.api_base_url.clone(),
                timeout_ms: config.request_timeout_ms,
            }
        }
    }

    impl HttpClient for FetchClient {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
            let url = build_url_with_base(&self.base_url, &request.path);
            send_with_timeout(self.timeout_ms, move |signal| {
                let mut builder = match request.method {
                    Method::Get => Request::get(&url),
                    Method::Post => Request::post(&url),
                }
                .abort_signal(Some(signal));

                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }

                let built = match request.body {
                    Some(body) => builder.body(body),
                    None => builder.build(),
                };
                built.map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
            })
            .await
        }
    }

    /// Maps network errors into `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    /// Sends a request and reads its body under one abort timeout, so a server
    /// that stalls either the headers or the body cannot leave the UI waiting
    /// forever.
    async fn send_with_timeout(
        timeout_ms: u32,
        build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
    ) -> Result<ApiResponse, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        let response = request.send().await.map_err(map_request_error)?;
        let status = response.status();
        // `_timeout` must outlive the body read.
        let body = response.text().await.map_err(map_request_error)?;
        Ok(ApiResponse { status, body })
    }
}
