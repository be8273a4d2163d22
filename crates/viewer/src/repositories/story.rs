//! Story repository - listing, retrieval, search, and filtering.

use std::sync::Arc;

use ncpview_domain::{Story, StoryFilter, StoryId, StoryListItem};

use crate::infrastructure::{ApiError, StoryBackend};

/// Story data access over a pluggable backend.
///
/// Search and filtering fetch the full index first and narrow the result
/// in memory; the backing sets are small static collections.
#[derive(Clone)]
pub struct Stories {
    backend: Arc<dyn StoryBackend>,
}

impl Stories {
    pub fn new(backend: Arc<dyn StoryBackend>) -> Self {
        Self { backend }
    }

    /// Access the underlying backend port.
    pub fn backend(&self) -> &dyn StoryBackend {
        self.backend.as_ref()
    }

    /// List story summaries in source order.
    pub async fn list(&self) -> Result<Vec<StoryListItem>, ApiError> {
        self.backend.fetch_index().await
    }

    /// Retrieve a full story document.
    pub async fn get(&self, id: &StoryId) -> Result<Story, ApiError> {
        self.backend.fetch_story(id).await
    }

    /// Case-insensitive substring search over title, author, and ID.
    /// An empty query returns the full unfiltered list.
    pub async fn search(&self, query: &str) -> Result<Vec<StoryListItem>, ApiError> {
        let stories = self.backend.fetch_index().await?;
        if query.is_empty() {
            return Ok(stories);
        }

        let needle = query.to_lowercase();
        Ok(stories
            .into_iter()
            .filter(|story| matches_query(story, &needle))
            .collect())
    }

    /// Filter the story list by criteria.
    ///
    /// Only the author allow-list is applied today; items without an
    /// author are excluded whenever the author filter is active. Genre and
    /// tag criteria are accepted but not yet implemented - they log loudly
    /// and are otherwise ignored.
    pub async fn filter(&self, criteria: &StoryFilter) -> Result<Vec<StoryListItem>, ApiError> {
        if !criteria.genres.is_empty() || !criteria.tags.is_empty() {
            tracing::warn!(
                genres = criteria.genres.len(),
                tags = criteria.tags.len(),
                "genre/tag filters are not implemented yet and will be ignored"
            );
        }

        let stories = self.backend.fetch_index().await?;
        if criteria.authors.is_empty() {
            return Ok(stories);
        }

        Ok(stories
            .into_iter()
            .filter(|story| {
                story
                    .author
                    .as_ref()
                    .is_some_and(|author| criteria.authors.contains(author))
            })
            .collect())
    }
}

fn matches_query(story: &StoryListItem, needle: &str) -> bool {
    story.title.to_lowercase().contains(needle)
        || story
            .author
            .as_deref()
            .is_some_and(|author| author.to_lowercase().contains(needle))
        || story.id.as_str().to_lowercase().contains(needle)
}
