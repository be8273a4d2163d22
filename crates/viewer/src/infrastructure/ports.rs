//! Port trait for story storage backends.
//!
//! This is the only abstraction in the data layer. It exists so the
//! backing store can be swapped (static HTTP files -> directory listing ->
//! remote API) behind the same list/get contract, and so the repository
//! and store can be tested against mocks.

use async_trait::async_trait;

use ncpview_domain::{Story, StoryId, StoryListItem};

use super::error::ApiError;

/// Resolves story identifiers to data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoryBackend: Send + Sync {
    /// Fetch the story index, in source order. No pagination.
    async fn fetch_index(&self) -> Result<Vec<StoryListItem>, ApiError>;

    /// Fetch a full story document by ID.
    async fn fetch_story(&self, id: &StoryId) -> Result<Story, ApiError>;
}
