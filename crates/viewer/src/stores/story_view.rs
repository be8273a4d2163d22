//! View state store - the single authoritative holder of what is
//! currently displayed.
//!
//! Every operation is a full state transition. Overlapping loads are
//! resolved with a monotonically increasing request generation: a
//! completion whose generation is no longer current is discarded, so a
//! stale response can never clobber newer state. No error escapes the
//! store; repository failures become part of the observable state.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::{watch, RwLock};

use ncpview_domain::{Story, StoryId, StoryListItem};

use crate::infrastructure::ApiError;
use crate::repositories::Stories;

/// Snapshot of the current view state.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub stories: Vec<StoryListItem>,
    pub current_story: Option<Story>,
    pub loading: bool,
    pub error: Option<ApiError>,
    /// When the story list was last loaded successfully.
    pub loaded_at: Option<DateTime<Utc>>,
}

/// In-memory store over the story repository, observable via a watch
/// channel.
pub struct StoryViewStore {
    stories: Stories,
    state: RwLock<ViewState>,
    generation: AtomicU64,
    tx: watch::Sender<ViewState>,
}

impl StoryViewStore {
    pub fn new(stories: Stories) -> Self {
        let (tx, _rx) = watch::channel(ViewState::default());
        Self {
            stories,
            state: RwLock::new(ViewState::default()),
            generation: AtomicU64::new(0),
            tx,
        }
    }

    /// Current state, cloned.
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    /// The repository behind this store.
    pub fn stories(&self) -> &Stories {
        &self.stories
    }

    /// Mark a new in-flight operation: bump the generation, flip into the
    /// loading state, and clear any prior error.
    async fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
        self.tx.send_replace(state.clone());
        generation
    }

    /// Apply an operation outcome unless a newer operation has started
    /// since. Returns whether the outcome was applied.
    async fn commit(&self, generation: u64, apply: impl FnOnce(&mut ViewState)) -> bool {
        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "discarding stale completion");
            return false;
        }
        apply(&mut state);
        state.loading = false;
        self.tx.send_replace(state.clone());
        true
    }

    /// Load the story list. On failure the previous list is left
    /// untouched.
    pub async fn load_stories(&self) {
        let generation = self.begin().await;
        match self.stories.list().await {
            Ok(stories) => {
                self.commit(generation, |state| {
                    state.stories = stories;
                    state.loaded_at = Some(Utc::now());
                })
                .await;
            }
            Err(error) => {
                tracing::warn!(code = error.code(), "loading story list failed: {error}");
                self.commit(generation, |state| state.error = Some(error)).await;
            }
        }
    }

    /// Load a single story as the current detail view.
    pub async fn load_story(&self, id: &StoryId) {
        let generation = self.begin().await;
        match self.stories.get(id).await {
            Ok(story) => {
                self.commit(generation, |state| state.current_story = Some(story))
                    .await;
            }
            Err(error) => {
                tracing::warn!(code = error.code(), story = %id, "loading story failed: {error}");
                self.commit(generation, |state| {
                    state.current_story = None;
                    state.error = Some(error);
                })
                .await;
            }
        }
    }

    /// Reset the detail view and any displayed error. Does not touch
    /// `loading`.
    pub async fn clear_current_story(&self) {
        let mut state = self.state.write().await;
        state.current_story = None;
        state.error = None;
        self.tx.send_replace(state.clone());
    }

    /// Replace the story list with search results.
    pub async fn search_stories(&self, query: &str) {
        let generation = self.begin().await;
        match self.stories.search(query).await {
            Ok(stories) => {
                self.commit(generation, |state| state.stories = stories).await;
            }
            Err(error) => {
                tracing::warn!(code = error.code(), "story search failed: {error}");
                self.commit(generation, |state| state.error = Some(error)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use ncpview_domain::Narrative;

    use crate::infrastructure::{InMemoryStoryBackend, StoryBackend};

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

    fn seeded_store() -> StoryViewStore {
        let backend = InMemoryStoryBackend::seeded().with_story(story("anora"));
        StoryViewStore::new(Stories::new(Arc::new(backend)))
    }

    #[tokio::test]
    async fn load_stories_populates_list() {
        let store = seeded_store();
        store.load_stories().await;

        let state = store.snapshot().await;
        assert_eq!(state.stories.len(), 5);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.loaded_at.is_some());
    }

    #[tokio::test]
    async fn failed_story_load_keeps_previous_list() {
        let store = seeded_store();
        store.load_stories().await;
        store.load_story(&StoryId::new("missing-id")).await;

        let state = store.snapshot().await;
        let error = state.error.expect("error should be set");
        assert_eq!(error.code(), "STORY_NOT_FOUND");
        assert!(state.current_story.is_none());
        // The list from the first call survives the failed detail load.
        assert_eq!(state.stories.len(), 5);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn successful_load_clears_prior_error() {
        let store = seeded_store();
        store.load_story(&StoryId::new("missing-id")).await;
        assert!(store.snapshot().await.error.is_some());

        store.load_story(&StoryId::new("anora")).await;
        let state = store.snapshot().await;
        assert!(state.error.is_none());
        assert_eq!(
            state.current_story.map(|s| s.id),
            Some(StoryId::new("anora"))
        );
    }

    #[tokio::test]
    async fn clear_current_story_resets_detail_and_error() {
        let store = seeded_store();
        store.load_story(&StoryId::new("anora")).await;
        store.clear_current_story().await;

        let state = store.snapshot().await;
        assert!(state.current_story.is_none());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn search_replaces_list_with_results() {
        let store = seeded_store();
        store.search_stories("shawshank").await;

        let state = store.snapshot().await;
        assert_eq!(state.stories.len(), 1);
        assert_eq!(state.stories[0].id.as_str(), "the-shawshank-redemption");
    }

    #[tokio::test]
    async fn subscribers_observe_transitions() {
        let store = seeded_store();
        let mut rx = store.subscribe();

        store.load_stories().await;
        rx.changed().await.expect("sender alive");
        assert_eq!(rx.borrow().stories.len(), 5);
    }

    /// Backend that parks one specific story fetch until released,
    /// so tests can interleave two in-flight loads deterministically.
    struct GatedBackend {
        slow_id: StoryId,
        entered: Arc<Notify>,
        gate: Arc<Notify>,
        stories: HashMap<StoryId, Story>,
    }

    #[async_trait]
    impl StoryBackend for GatedBackend {
        async fn fetch_index(&self) -> Result<Vec<StoryListItem>, ApiError> {
            Ok(Vec::new())
        }

        async fn fetch_story(&self, id: &StoryId) -> Result<Story, ApiError> {
            if *id == self.slow_id {
                self.entered.notify_one();
                self.gate.notified().await;
            }
            self.stories
                .get(id)
                .cloned()
                .ok_or_else(|| ApiError::story_not_found(id.clone(), None))
        }
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let entered = Arc::new(Notify::new());
        let gate = Arc::new(Notify::new());

        let slow = story("slow");
        let fast = story("fast");
        let backend = GatedBackend {
            slow_id: slow.id.clone(),
            entered: entered.clone(),
            gate: gate.clone(),
            stories: HashMap::from([
                (slow.id.clone(), slow),
                (fast.id.clone(), fast),
            ]),
        };
        let store = Arc::new(StoryViewStore::new(Stories::new(Arc::new(backend))));

        // First load parks inside the backend.
        let slow_store = Arc::clone(&store);
        let slow_task =
            tokio::spawn(async move { slow_store.load_story(&StoryId::new("slow")).await });
        entered.notified().await;

        // Second load completes while the first is still in flight.
        store.load_story(&StoryId::new("fast")).await;
        assert_eq!(
            store.snapshot().await.current_story.as_ref().map(|s| s.id.as_str().to_string()),
            Some("fast".to_string())
        );

        // Release the parked load; its completion must be discarded.
        gate.notify_one();
        slow_task.await.expect("slow load task panicked");

        let state = store.snapshot().await;
        assert_eq!(
            state.current_story.map(|s| s.id),
            Some(StoryId::new("fast"))
        );
        assert!(!state.loading);
    }
}
