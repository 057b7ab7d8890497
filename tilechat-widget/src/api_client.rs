use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tilechat_config::WidgetConfig;
use tilechat_config::util::normalize_base_url;
use tilechat_model::{
    ApiErrorBody, ChatRequest, ChatResponse, ChatTurn, Item, SizesRequest,
    SizesResponse, TilesResponse,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to create HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}: {detail}")]
    Status {
        url: String,
        status: StatusCode,
        detail: String,
    },
    #[error("unexpected response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend answers 404 when a category/size has no tiles. Its
    /// catch-all handler can rewrap that as a 500 whose detail starts with
    /// `404:`.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
                true
            }
            Self::Status { status, detail, .. } => {
                *status == StatusCode::INTERNAL_SERVER_ERROR
                    && detail.trim_start().starts_with("404:")
            }
            _ => false,
        }
    }
}

/// Backend operations the widget depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Tiles of `category` in `size`.
    async fn fetch_tiles(
        &self,
        category: &str,
        size: &str,
    ) -> Result<Vec<Item>, ApiError>;

    /// Sizes available for `category`.
    async fn fetch_sizes(
        &self,
        category: &str,
    ) -> Result<Vec<String>, ApiError>;

    async fn chat(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<ChatResponse, ApiError>;
}

/// reqwest client for the catalogue/assistant backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        info!("[ApiClient] Using backend at {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &WidgetConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        url: String,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|source| {
            ApiError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|source| ApiError::Decode { url, source });
        }

        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(status, &body);
        warn!("[ApiClient] {} returned {}: {}", url, status, detail);
        Err(ApiError::Status {
            url,
            status,
            detail,
        })
    }
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn fetch_tiles(
        &self,
        category: &str,
        size: &str,
    ) -> Result<Vec<Item>, ApiError> {
        let url = self.build_url("tiles");
        let request = self
            .client
            .post(&url)
            .query(&[("category", category), ("size", size)]);
        let response: TilesResponse = self.execute(url, request).await?;
        log::debug!(
            "[ApiClient] {} tiles for {category} / {size}",
            response.tiles.len()
        );
        Ok(response.tiles)
    }

    async fn fetch_sizes(
        &self,
        category: &str,
    ) -> Result<Vec<String>, ApiError> {
        let url = self.build_url("size");
        let body = SizesRequest {
            category: category.to_string(),
        };
        let request = self.client.post(&url).json(&body);
        let response: SizesResponse = self.execute(url, request).await?;
        Ok(response.sizes)
    }

    async fn chat(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<ChatResponse, ApiError> {
        let url = self.build_url("chat");
        let body = ChatRequest {
            message: message.to_string(),
            conversation_history: history.to_vec(),
        };
        let request = self.client.post(&url).json(&body);
        self.execute(url, request).await
    }
}

/// Prefer the backend's `detail` field, then the raw body, then the
/// status reason.
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(ApiErrorBody {
        detail: Some(detail),
    }) = serde_json::from_str::<ApiErrorBody>(body)
    {
        return detail;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}
