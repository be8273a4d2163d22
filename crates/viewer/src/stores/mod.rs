//! Store modules - observable view state over the repositories.

pub mod story_view;

pub use story_view::{StoryViewStore, ViewState};
