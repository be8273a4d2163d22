//! NCP document entities.

pub mod narrative;
pub mod story;
pub mod storytelling;
pub mod subtext;

pub use narrative::Narrative;
pub use story::{Story, StoryDocument, StoryFilter, StoryIndex, StoryListItem, StoryMetadata};
pub use storytelling::{Moment, Overview, Storytelling};
pub use subtext::{Dynamic, Perspective, Player, StoryBeat, StoryPoint, Subtext};
