//! Subtext - the deep structure of a narrative.
//!
//! Groups five optional ordered sequences: perspectives, players,
//! storypoints, storybeats, and dynamics. Storybeats carry a `sequence`
//! integer used for ordering and percent-through-story computation.

use serde::{Deserialize, Serialize};

use crate::ids::{DynamicId, PerspectiveId, PlayerId, StoryBeatId, StoryPointId};

/// Deep narrative structure of one narrative thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subtext {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perspectives: Vec<Perspective>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<Player>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storypoints: Vec<StoryPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storybeats: Vec<StoryBeat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamics: Vec<Dynamic>,
}

impl Subtext {
    /// Storybeats sorted by their `sequence` number. Ties keep source order.
    pub fn beats_in_order(&self) -> Vec<&StoryBeat> {
        let mut beats: Vec<&StoryBeat> = self.storybeats.iter().collect();
        beats.sort_by_key(|b| b.sequence);
        beats
    }

    /// Percent-through-story position of a beat, derived from its rank
    /// among the sorted sequences. The first beat sits at 0%, the last at
    /// 100%. `None` when the beat is not part of this subtext.
    pub fn beat_progress(&self, id: &StoryBeatId) -> Option<f64> {
        let beats = self.beats_in_order();
        let rank = beats.iter().position(|b| &b.id == id)?;
        if beats.len() < 2 {
            return Some(0.0);
        }
        Some(rank as f64 / (beats.len() - 1) as f64 * 100.0)
    }

    /// Look up a storybeat by ID.
    pub fn storybeat(&self, id: &StoryBeatId) -> Option<&StoryBeat> {
        self.storybeats.iter().find(|b| &b.id == id)
    }
}

/// A thematic viewpoint/throughline within a narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perspective {
    pub id: PerspectiveId,
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thematic_question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorial_position: Option<String>,
}

/// A character entity with a structural role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structural_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desire: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thematic_representation: Option<String>,
}

/// A major structural turning point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryPoint {
    pub id: StoryPointId,
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structural_significance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation_catalyst: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ripple_effect: Option<String>,
}

/// A sequenced narrative event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryBeat {
    pub id: StoryBeatId,
    pub sequence: i64,
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structural_function: Option<String>,
}

/// A narrative force driving change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dynamic {
    pub id: DynamicId,
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative_force: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifestation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thematic_significance: Option<String>,
}
