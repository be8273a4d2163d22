//! Story - root document of the Narrative Context Protocol.
//!
//! A story is identified by a globally unique slug ID and carries one or
//! more narratives. Viewers only ever read the first narrative; the rest
//! are kept for round-tripping.

use serde::{Deserialize, Serialize};

use crate::entities::Narrative;
use crate::ids::StoryId;

/// A full story document.
///
/// Well-formedness (non-empty `id`/`title`, at least one narrative) is
/// enforced only by [`crate::validation::validate_story`]; the fetch path
/// accepts whatever parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_written: Option<String>,
    #[serde(default)]
    pub narratives: Vec<Narrative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StoryMetadata>,
}

impl Story {
    /// The narrative a viewer displays. Stories may carry several threads
    /// but presentation only reads the first.
    pub fn primary_narrative(&self) -> Option<&Narrative> {
        self.narratives.first()
    }

    /// Summary record for list views.
    pub fn to_list_item(&self) -> StoryListItem {
        StoryListItem {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            date_written: self.date_written.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Optional descriptive metadata attached to a story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Summary record shown in story lists. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryListItem {
    pub id: StoryId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_written: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StoryMetadata>,
}

/// Index document listing available stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryIndex {
    pub stories: Vec<StoryListItem>,
    pub total: usize,
}

impl StoryIndex {
    pub fn new(stories: Vec<StoryListItem>) -> Self {
        let total = stories.len();
        Self { stories, total }
    }
}

/// Wire shape of a fetched story document.
///
/// Sources serve either a bare story object or one wrapped as
/// `{"story": ...}`. The ambiguity is resolved here, at the parse
/// boundary, so callers only ever see [`Story`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoryDocument {
    Wrapped { story: Story },
    Bare(Story),
}

impl StoryDocument {
    pub fn into_story(self) -> Story {
        match self {
            Self::Wrapped { story } => story,
            Self::Bare(story) => story,
        }
    }
}

/// Query criteria for list filtering. `genres` and `tags` are accepted
/// but not yet applied by any backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl StoryFilter {
    pub fn by_authors<I, S>(authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            authors: authors.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn story_json() -> serde_json::Value {
        json!({
            "id": "anora",
            "title": "Anora",
            "author": "Sean Baker",
            "narratives": [
                {"id": "n1", "title": "Main thread"}
            ]
        })
    }

    #[test]
    fn wrapped_and_bare_documents_parse_to_identical_stories() {
        let bare: StoryDocument = serde_json::from_value(story_json()).unwrap();
        let wrapped: StoryDocument =
            serde_json::from_value(json!({"story": story_json()})).unwrap();

        assert_eq!(bare.into_story(), wrapped.into_story());
    }

    #[test]
    fn story_without_narratives_still_parses() {
        // The fetch path does not enforce well-formedness.
        let story: Story =
            serde_json::from_value(json!({"id": "empty", "title": "Empty"})).unwrap();
        assert!(story.narratives.is_empty());
        assert!(story.primary_narrative().is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let story: Story = serde_json::from_value(json!({
            "id": "x",
            "title": "X",
            "narratives": [],
            "schema_version": "1.0"
        }))
        .unwrap();
        assert_eq!(story.id, StoryId::new("x"));
    }

    #[test]
    fn to_list_item_carries_summary_fields() {
        let story: Story = serde_json::from_value(story_json()).unwrap();
        let item = story.to_list_item();
        assert_eq!(item.id, story.id);
        assert_eq!(item.title, "Anora");
        assert_eq!(item.author.as_deref(), Some("Sean Baker"));
    }

    #[test]
    fn story_index_counts_entries() {
        let story: Story = serde_json::from_value(story_json()).unwrap();
        let index = StoryIndex::new(vec![story.to_list_item()]);
        assert_eq!(index.total, 1);
    }
}
