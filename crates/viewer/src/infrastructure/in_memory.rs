//! In-memory story backend and the built-in story index.

use std::collections::HashMap;

use async_trait::async_trait;

use ncpview_domain::{Story, StoryId, StoryListItem};

use super::error::ApiError;
use super::ports::StoryBackend;

/// The fixed set of bundled example stories. Stands in for a real story
/// index until one is served; source order is preserved.
pub fn builtin_index() -> Vec<StoryListItem> {
    vec![
        StoryListItem {
            id: StoryId::new("weaver_of_words__the_catalyst_of_change_251101"),
            title: "Chapter 4: The Catalyst of Change".to_string(),
            author: Some("G.D-Isabelle".to_string()),
            date_written: Some("251021".to_string()),
            metadata: None,
        },
        StoryListItem {
            id: StoryId::new("the-shawshank-redemption"),
            title: "The Shawshank Redemption".to_string(),
            author: None,
            date_written: None,
            metadata: None,
        },
        StoryListItem {
            id: StoryId::new("anora"),
            title: "Anora".to_string(),
            author: None,
            date_written: None,
            metadata: None,
        },
        StoryListItem {
            id: StoryId::new("example-story"),
            title: "Example Story".to_string(),
            author: None,
            date_written: None,
            metadata: None,
        },
    ]
}

/// Story backend over a fixed in-memory index and story map.
pub struct InMemoryStoryBackend {
    index: Vec<StoryListItem>,
    stories: HashMap<StoryId, Story>,
}

impl InMemoryStoryBackend {
    pub fn new(index: Vec<StoryListItem>) -> Self {
        Self {
            index,
            stories: HashMap::new(),
        }
    }

    /// Backend seeded with the built-in index and no story bodies.
    pub fn seeded() -> Self {
        Self::new(builtin_index())
    }

    /// Add a full story document, also appending it to the index.
    pub fn with_story(mut self, story: Story) -> Self {
        self.index.push(story.to_list_item());
        self.stories.insert(story.id.clone(), story);
        self
    }
}

#[async_trait]
impl StoryBackend for InMemoryStoryBackend {
    async fn fetch_index(&self) -> Result<Vec<StoryListItem>, ApiError> {
        Ok(self.index.clone())
    }

    async fn fetch_story(&self, id: &StoryId) -> Result<Story, ApiError> {
        self.stories
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::story_not_found(id.clone(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncpview_domain::Narrative;

    fn story(id: &str) -> Story {
        Story {
            id: StoryId::new(id),
            title: format!("Story {id}"),
            author: None,
            date_written: None,
            narratives: vec![Narrative {
                id: "n1".into(),
                title: "Thread".to_string(),
                subtext: None,
                storytelling: None,
            }],
            metadata: None,
        }
    }

    #[tokio::test]
    async fn seeded_backend_serves_builtin_index_in_source_order() {
        let backend = InMemoryStoryBackend::seeded();
        let index = backend.fetch_index().await.unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(
            index[0].id.as_str(),
            "weaver_of_words__the_catalyst_of_change_251101"
        );
        assert_eq!(index[3].id.as_str(), "example-story");
    }

    #[tokio::test]
    async fn fetch_story_of_unknown_id_is_not_found() {
        let backend = InMemoryStoryBackend::seeded();
        let err = backend
            .fetch_story(&StoryId::new("missing-id"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn with_story_makes_document_retrievable() {
        let backend = InMemoryStoryBackend::new(vec![]).with_story(story("anora"));
        let fetched = backend.fetch_story(&StoryId::new("anora")).await.unwrap();
        assert_eq!(fetched.title, "Story anora");

        let index = backend.fetch_index().await.unwrap();
        assert_eq!(index.len(), 1);
    }
}
