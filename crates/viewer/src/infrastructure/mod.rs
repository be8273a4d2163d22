//! Infrastructure - ports plus the concrete story backends.

pub mod config;
pub mod dir;
pub mod error;
pub mod http;
pub mod in_memory;
pub mod ports;

pub use config::{AppConfig, BackendKind};
pub use dir::DirStoryBackend;
pub use error::ApiError;
pub use http::HttpStoryBackend;
pub use in_memory::{builtin_index, InMemoryStoryBackend};
pub use ports::StoryBackend;

#[cfg(test)]
pub use ports::MockStoryBackend;
