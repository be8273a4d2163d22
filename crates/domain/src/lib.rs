//! NCP viewer domain.
//!
//! Document types for the Narrative Context Protocol (NCP) JSON schema,
//! slug-style typed IDs, and the structural validation routine. This crate
//! is I/O-free; fetching and view state live in `ncpview-viewer`.

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;

pub use entities::{
    Dynamic, Moment, Narrative, Overview, Perspective, Player, Story, StoryBeat, StoryDocument,
    StoryFilter, StoryIndex, StoryListItem, StoryMetadata, StoryPoint, Storytelling, Subtext,
};
pub use error::DomainError;
pub use ids::{
    DynamicId, MomentId, NarrativeId, OverviewId, PerspectiveId, PlayerId, StoryBeatId, StoryId,
    StoryPointId,
};
pub use validation::{validate_story, NarrativeDraft, StoryDraft, ValidationReport};
