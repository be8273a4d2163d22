//! Storytelling - surface-level telling of a narrative.
//!
//! Moments may reference storybeats by ID. These are soft back-references
//! with no enforced referential integrity; resolution skips unknown IDs.

use serde::{Deserialize, Serialize};

use crate::entities::{StoryBeat, Subtext};
use crate::ids::{MomentId, OverviewId, StoryBeatId};

/// Surface-level storytelling elements of one narrative thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storytelling {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overviews: Vec<Overview>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moments: Vec<Moment>,
}

impl Storytelling {
    /// Resolve a moment's beat references against a subtext. Unknown IDs
    /// are skipped silently.
    pub fn resolve_beats<'a>(&self, moment: &Moment, subtext: &'a Subtext) -> Vec<&'a StoryBeat> {
        moment
            .beat_references
            .iter()
            .filter_map(|id| subtext.storybeat(id))
            .collect()
    }
}

/// A high-level summary of the telling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub id: OverviewId,
    pub title: String,
    pub description: String,
}

/// A storytelling-level scene tied to one or more storybeats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub id: MomentId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub beat_references: Vec<StoryBeatId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative_technique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_register: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significance: Option<String>,
}
