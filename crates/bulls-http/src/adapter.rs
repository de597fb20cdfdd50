use std::{env, sync::Arc, time::Duration};

use bulls_core::{
    backend::{
        ChatBackend, ChatRequest, EmbedBackend, EmbedRequest, EmbedResponse, ImageBackend,
        ImageRequest, RawResponse,
    },
    error::Result,
};
use futures_core::future::BoxFuture;

use crate::client::{BackendClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub const ENV_BASE_URL: &str = "BULLS_API_BASE_URL";
pub const ENV_TOKEN: &str = "BULLS_API_TOKEN";

/// Wires the HTTP client [`BackendClient`] into a value implementing the
/// backend traits of `bulls_core`.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct BackendAdapter {
    pub(crate) client: Arc<BackendClient>,
}

impl BackendAdapter {
    /// Access the underlying HTTP client.
    pub fn client(&self) -> &BackendClient {
        &self.client
    }
}

impl ChatBackend for BackendAdapter {
    fn chat<'a>(&'a self, request: ChatRequest) -> BoxFuture<'a, Result<RawResponse>> {
        Box::pin(async move { Ok(self.client.chat(&request).await?) })
    }
}

impl ImageBackend for BackendAdapter {
    fn generate_image<'a>(&'a self, request: ImageRequest) -> BoxFuture<'a, Result<RawResponse>> {
        Box::pin(async move { Ok(self.client.generate_image(&request).await?) })
    }
}

impl EmbedBackend for BackendAdapter {
    fn fetch_embed<'a>(&'a self, request: EmbedRequest) -> BoxFuture<'a, Result<EmbedResponse>> {
        Box::pin(async move { Ok(self.client.fetch_embed(&request).await?) })
    }
}

/// Builder for [`BackendAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use bulls_http::BackendAdapterBuilder;
///
/// let backend = BackendAdapterBuilder::new_from_env()
///     .build()
///     .expect("building the HTTP client");
/// ```
#[derive(Default)]
pub struct BackendAdapterBuilder {
    pub(crate) base_url: Option<String>,
    pub(crate) token: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl BackendAdapterBuilder {
    /// Create an *empty* builder pointing at the local default backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `BULLS_API_BASE_URL` and `BULLS_API_TOKEN` from the environment.
    /// Both are optional.
    pub fn new_from_env() -> Self {
        Self {
            base_url: env::var(ENV_BASE_URL).ok().filter(|url| !url.is_empty()),
            token: env::var(ENV_TOKEN).ok().filter(|token| !token.is_empty()),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Bearer token sent on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`bulls_core::BullsError::Backend`] – the HTTP client could not be
    ///   initialised (e.g. TLS backend failure).
    pub fn build(self) -> Result<BackendAdapter> {
        let client = BackendClient::new(
            self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            self.token,
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )?;

        Ok(BackendAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_backend() {
        let adapter = BackendAdapterBuilder::new().build().unwrap();
        assert_eq!(adapter.client().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn explicit_base_url_wins() {
        let adapter = BackendAdapterBuilder::new()
            .with_base_url("https://bulls.example.com/api/")
            .with_token("7")
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(adapter.client().base_url(), "https://bulls.example.com/api");
    }
}
