// HTTP client for the TEN Navigator backend API

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Request, Url};
use serde_json::Value;
use ten_navigator_core::{ApiConfig, ApiRequest, HttpMethod};

use crate::errors::ApiError;

/// Header carrying the backend API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Async client for the backend API.
///
/// Holds no per-call state: every [`ApiClient::call`] is a single independent
/// attempt with no retry, timeout or caching. Cloning is cheap and clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    /// Create a client with a default `reqwest::Client`
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self::with_http_client(config, http))
    }

    /// Create a client on top of an existing `reqwest::Client`
    pub fn with_http_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform one API call and return the decoded JSON body
    ///
    /// # Errors
    /// * [`ApiError::Http`] - non-2xx status, with message, status and body
    /// * [`ApiError::Network`] - no response could be obtained
    /// * [`ApiError::Decode`] - the body is not valid JSON (any status)
    pub async fn call(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let http_request = self.build_request(request)?;
        tracing::debug!(
            method = %request.method,
            url = %http_request.url(),
            has_body = http_request.body().is_some(),
            "Sending API request"
        );

        let response = self.http.execute(http_request).await.map_err(|e| {
            tracing::debug!("API request failed before a response: {}", e);
            ApiError::Network
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            tracing::debug!("Failed to read API response body: {}", e);
            ApiError::Network
        })?;
        tracing::debug!(status, bytes = body.len(), "Received API response");

        normalize_response(status, &body)
    }

    /// Build the HTTP request for `request` without sending it
    ///
    /// The URL is the base URL followed by the endpoint, concatenated as-is.
    /// Default headers are `Content-Type` and `Accept` set to
    /// `application/json` plus `X-API-Key`; `extra_headers` override them.
    pub fn build_request(&self, request: &ApiRequest) -> Result<Request, ApiError> {
        let url_text = format!("{}{}", self.config.base_url(), request.endpoint);
        let url = Url::parse(&url_text).map_err(|e| ApiError::InvalidUrl {
            url: url_text.clone(),
            reason: e.to_string(),
        })?;

        let mut http_request = Request::new(to_reqwest_method(request.method), url);
        *http_request.headers_mut() = self.headers(&request.extra_headers)?;

        if let Some(payload) = request.body_payload() {
            let body = serde_json::to_vec(payload).map_err(ApiError::Serialize)?;
            *http_request.body_mut() = Some(body.into());
        }

        Ok(http_request)
    }

    fn headers(&self, extra: &BTreeMap<String, String>) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(self.config.api_key()).map_err(|_| {
            ApiError::InvalidHeader {
                name: API_KEY_HEADER.to_string(),
            }
        })?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        // Header names are case-insensitive, so "x-api-key" replaces the default too
        for (name, value) in extra {
            let invalid = || ApiError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

/// Turn a raw status and body into the call result
///
/// The body is decoded as JSON first, whatever the status. A decode failure
/// is returned as-is; a non-2xx status becomes [`ApiError::Http`].
pub fn normalize_response(status: u16, body: &[u8]) -> Result<Value, ApiError> {
    let data: Value = serde_json::from_slice(body).map_err(ApiError::Decode)?;

    if (200..300).contains(&status) {
        Ok(data)
    } else {
        Err(ApiError::http(status, data))
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}
