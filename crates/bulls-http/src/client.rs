use reqwest::{
    Client as HttpClient, RequestBuilder, Url,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use std::time::Duration;

use bulls_core::backend::{ChatRequest, EmbedRequest, EmbedResponse, ImageRequest, RawResponse};

use crate::error::HttpError;

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP client for the Bulls backend.
///
/// * One request ▶ one response, no retries.
/// * Accepts and returns the wire types from `bulls_core::backend`.
/// * Shares a single `reqwest::Client`, so cloning `BackendClient` is cheap.
#[derive(Clone)]
pub struct BackendClient {
    token: Option<String>,
    http: HttpClient,
    base: String,
}

impl BackendClient {
    /// Build a default `reqwest` client with the given timeout.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http(http, base_url, token))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(http: HttpClient, base_url: impl Into<String>, token: Option<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_owned();
        Self { token, http, base }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn headers(&self) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
        }
        Ok(headers)
    }

    pub(crate) fn chat_url(&self) -> String {
        format!("{}/chat", self.base)
    }

    pub(crate) fn image_url(&self) -> String {
        format!("{}/generate-image", self.base)
    }

    /// The id comes from model output, so it is pushed as a single
    /// percent-encoded path segment.
    pub(crate) fn embed_url(&self, video_id: &str) -> Result<Url, HttpError> {
        let invalid = || HttpError::InvalidUrl(self.base.clone());
        let mut url = Url::parse(&self.base).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["videos", video_id, "embed"]);
        Ok(url)
    }

    /// `POST /chat`.
    pub async fn chat(&self, request: &ChatRequest) -> Result<RawResponse, HttpError> {
        log_event!(
            debug,
            provider = %request.api_provider,
            model = %request.model,
            temperature = request.temperature,
            "sending chat request"
        );
        let builder = self.http.post(self.chat_url()).json(request);
        self.send(builder).await
    }

    /// `POST /generate-image`.
    pub async fn generate_image(&self, request: &ImageRequest) -> Result<RawResponse, HttpError> {
        log_event!(debug, width = request.width, height = request.height, "sending image request");
        let builder = self.http.post(self.image_url()).json(request);
        self.send(builder).await
    }

    /// `POST /videos/{id}/embed`. The player size travels as query parameters.
    pub async fn fetch_embed(&self, request: &EmbedRequest) -> Result<EmbedResponse, HttpError> {
        log_event!(debug, video_id = %request.video_id, "sending embed request");
        let builder = self.http.post(self.embed_url(&request.video_id)?).query(&[
            ("width", request.dimensions.width()),
            ("height", request.dimensions.height()),
        ]);
        self.send(builder).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, HttpError> {
        let resp = builder.headers(self.headers()?).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log_event!(warn, %status, "backend returned non-success status");
            return Err(HttpError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: T = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}
