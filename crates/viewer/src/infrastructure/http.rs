//! HTTP story backend - static JSON documents served under a base URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use ncpview_domain::{Story, StoryDocument, StoryId, StoryIndex, StoryListItem};

use super::error::ApiError;
use super::in_memory::builtin_index;
use super::ports::StoryBackend;

/// Default base URL for story documents.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/examples";

/// Default per-request timeout in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Backend fetching `{base}/{id}.json` documents over HTTP.
///
/// Story bodies may be bare story objects or `{"story": ...}` wrappers;
/// both are accepted transparently via [`StoryDocument`].
#[derive(Clone)]
pub struct HttpStoryBackend {
    client: Client,
    base_url: String,
}

impl HttpStoryBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_FETCH_TIMEOUT_SECS)
    }

    /// Create a backend with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn story_url(&self, id: &StoryId) -> String {
        format!("{}/{}.json", self.base_url, id)
    }

    fn index_url(&self) -> String {
        format!("{}/index.json", self.base_url)
    }
}

#[async_trait]
impl StoryBackend for HttpStoryBackend {
    async fn fetch_index(&self) -> Result<Vec<StoryListItem>, ApiError> {
        let response = self
            .client
            .get(self.index_url())
            .send()
            .await
            .map_err(ApiError::index_unavailable)?;

        if !response.status().is_success() {
            // An index document is optional; sources that only serve story
            // bodies fall back to the built-in list.
            tracing::debug!(
                status = %response.status(),
                "no index document, using built-in story index"
            );
            return Ok(builtin_index());
        }

        let index: StoryIndex = response
            .json()
            .await
            .map_err(|e| ApiError::unexpected("failed to parse story index", e))?;
        Ok(index.stories)
    }

    async fn fetch_story(&self, id: &StoryId) -> Result<Story, ApiError> {
        let response = self
            .client
            .get(self.story_url(id))
            .send()
            .await
            .map_err(|e| ApiError::story_not_found(id.clone(), Some(e.to_string())))?;

        if !response.status().is_success() {
            return Err(ApiError::story_not_found(
                id.clone(),
                Some(format!("HTTP {}", response.status())),
            ));
        }

        let document: StoryDocument = response
            .json()
            .await
            .map_err(|e| ApiError::story_not_found(id.clone(), Some(e.to_string())))?;

        Ok(document.into_story())
    }
}
