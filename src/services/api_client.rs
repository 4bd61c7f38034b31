use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const BASE_URL_ENV: &str = "CMMS_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Update/delete responses carry only `success` and a message; nothing the
/// client needs beyond the status check the transport already does.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct Acknowledged {}

/// Thin JSON transport for the CMMS API. Holds the base URL and a pooled
/// `reqwest::Client`; all entity services clone this.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` prefers the
    /// body's `error` field, then `message`, then a generic fallback.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("No response from server. Please check your connection.")]
    Network(#[source] reqwest::Error),
    #[error("Malformed response from server: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL from `CMMS_API_BASE_URL`, falling back to the local dev
    /// server.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.client.get(self.url(path));
        self.execute(request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.url(path)).json(body);
        self.execute(request).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.client.put(self.url(path)).json(body);
        self.execute(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.client.delete(self.url(path));
        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("No response from server. Please check your connection.");
            ApiError::Network(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Network)?;

        let result = parse_response(status, &body);
        if let Err(err) = &result {
            log_api_error(err);
        }
        result
    }
}

/// Decode a response body, turning non-2xx statuses into an `ApiError` that
/// carries the server's own message when it supplied one.
fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value["error"]
                    .as_str()
                    .or_else(|| value["message"].as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "An error occurred".to_string());
        return Err(ApiError::Api { status, message });
    }

    serde_json::from_str(body).map_err(ApiError::Decode)
}

fn log_api_error(err: &ApiError) {
    match err {
        ApiError::Api { status, message } => match *status {
            StatusCode::UNAUTHORIZED => tracing::error!("Unauthorized access"),
            StatusCode::FORBIDDEN => tracing::error!("Forbidden access"),
            StatusCode::NOT_FOUND => tracing::error!("Resource not found"),
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("Server error"),
            _ => tracing::error!("Error {}: {}", status.as_u16(), message),
        },
        // Send failures are logged where they are mapped; decode failures
        // land here.
        ApiError::Network(_) => {}
        ApiError::Decode(e) => tracing::error!("Malformed response from server: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Envelope {
        data: Vec<String>,
    }

    #[test]
    fn success_body_deserializes() {
        let body = r#"{"success": true, "data": ["a", "b"]}"#;
        let parsed: Envelope = parse_response(StatusCode::OK, body).unwrap();
        assert_eq!(parsed.data, vec!["a", "b"]);
    }

    #[test]
    fn server_error_field_wins() {
        let body = r#"{"success": false, "error": "Machine not found", "message": "nope"}"#;
        let err = parse_response::<Envelope>(StatusCode::NOT_FOUND, body).unwrap_err();
        assert_eq!(err.to_string(), "Machine not found");
    }

    #[test]
    fn message_field_is_the_fallback() {
        let body = r#"{"message": "try later"}"#;
        let err = parse_response::<Envelope>(StatusCode::SERVICE_UNAVAILABLE, body).unwrap_err();
        assert_eq!(err.to_string(), "try later");
    }

    #[test]
    fn unparseable_error_body_gets_generic_message() {
        let err = parse_response::<Envelope>(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert_eq!(err.to_string(), "An error occurred");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = parse_response::<Envelope>(StatusCode::OK, r#"{"data": 3}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
