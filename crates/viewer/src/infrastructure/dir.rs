//! Directory story backend - a folder of `{id}.json` files.
//!
//! Fills the same contract as the HTTP backend for local use: the index is
//! derived from the directory listing, story lookup reads `{root}/{id}.json`.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use ncpview_domain::{Story, StoryDocument, StoryId, StoryListItem};

use super::error::ApiError;
use super::ports::StoryBackend;

/// Backend reading story documents from a local directory.
pub struct DirStoryBackend {
    root: PathBuf,
}

impl DirStoryBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn story_path(&self, id: &StoryId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    async fn read_story(&self, path: &Path, id: &StoryId) -> Result<Story, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApiError::story_not_found(id.clone(), None),
            _ => ApiError::story_not_found(id.clone(), Some(e.to_string())),
        })?;

        let document: StoryDocument = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::story_not_found(id.clone(), Some(e.to_string())))?;

        Ok(document.into_story())
    }
}

#[async_trait]
impl StoryBackend for DirStoryBackend {
    async fn fetch_index(&self) -> Result<Vec<StoryListItem>, ApiError> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(ApiError::index_unavailable)?;

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(ApiError::index_unavailable)?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push((StoryId::new(stem), path));
            }
        }
        // Directory iteration order is platform-defined; sort for stability.
        ids.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));

        let mut items = Vec::with_capacity(ids.len());
        for (id, path) in ids {
            match self.read_story(&path, &id).await {
                Ok(story) => items.push(story.to_list_item()),
                Err(e) => {
                    // A malformed file should not hide the rest of the index.
                    tracing::warn!(id = %id, error = %e, "skipping unreadable story file");
                }
            }
        }
        Ok(items)
    }

    async fn fetch_story(&self, id: &StoryId) -> Result<Story, ApiError> {
        self.read_story(&self.story_path(id), id).await
    }
}
