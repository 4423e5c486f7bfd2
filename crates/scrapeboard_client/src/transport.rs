use std::time::Duration;

use scrapeboard_core::{HttpMethod, PanelId, PanelOutput, RequestSpec};
use url::Url;

use crate::decode::decode_panel;
use crate::{ApiError, ApiErrorKind};

/// Base address of the scraping service when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// When unset, the transport's own defaults apply. There is no retry
    /// policy either way; a failed request needs explicit re-submission.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// Seam between the panel plumbing and the actual HTTP stack, so tests can
/// substitute a scripted service.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, panel: PanelId, spec: &RequestSpec) -> Result<PanelOutput, ApiError>;
}

/// Production transport over a shared `reqwest::Client`. Stateless apart
/// from the connection pool; safe to share across all panels. Each call is
/// exactly one outbound request, no caching.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url).map_err(|err| {
            ApiError::new(
                ApiErrorKind::Network,
                format!("invalid base url {}: {err}", settings.base_url),
            )
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(ApiErrorKind::Network, err.to_string()))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, panel: PanelId, spec: &RequestSpec) -> Result<PanelOutput, ApiError> {
        let url = self.base_url.join(spec.path).map_err(|err| {
            ApiError::new(
                ApiErrorKind::Network,
                format!("invalid route {}: {err}", spec.path),
            )
        })?;

        let request = match spec.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        // Query values are passed verbatim; reqwest percent-encodes them.
        let response = request
            .query(&spec.query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiErrorKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_panel(panel, &bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    ApiError::new(ApiErrorKind::Network, err.to_string())
}
