//! HTTP client for the items API.
//!
//! Every call resolves to an [`ApiResponse`]: `data` on success, `error` with
//! a readable message on a non-2xx status or a network failure. The client
//! never retries and sets no timeouts of its own.

pub mod items;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8787";

/// Uniform result of one API call; exactly one of the fields is set
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result` for `?`-style callers
    pub fn into_result(self) -> Result<T, String> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, Some(error)) => Err(error),
            (None, None) => Err("Empty response".to_string()),
        }
    }
}

/// Thin wrapper over `reqwest::Client` bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.request(Method::GET, endpoint, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResponse<T> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResponse<T> {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// DELETE, expecting an empty body on success
    pub async fn delete(&self, endpoint: &str) -> ApiResponse<()> {
        match self.send(Method::DELETE, endpoint, None::<&()>).await {
            Ok(_) => ApiResponse::ok(()),
            Err(message) => ApiResponse::err(message),
        }
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResponse<T> {
        let response = match self.send(method, endpoint, body).await {
            Ok(response) => response,
            Err(message) => return ApiResponse::err(message),
        };

        match response.json::<T>().await {
            Ok(data) => ApiResponse::ok(data),
            Err(e) => ApiResponse::err(e.to_string()),
        }
    }

    /// Send the request; `Err` carries the user-facing message
    async fn send<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!("Request to {} failed: {}", url, e);
            e.to_string()
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_message(status, &body))
    }
}

/// Message for a non-2xx response: the body's `error` or `detail` field,
/// else a generic status line
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "detail"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}
