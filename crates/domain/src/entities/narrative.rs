//! Narrative - one storyline/thread within a story.

use serde::{Deserialize, Serialize};

use crate::entities::{Storytelling, Subtext};
use crate::ids::NarrativeId;

/// A single narrative thread. Structure lives in `subtext`, surface-level
/// telling in `storytelling`; both are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub id: NarrativeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<Subtext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storytelling: Option<Storytelling>,
}
