//! Repository modules - data access wrappers around the backend port.

pub mod story;

pub use story::Stories;
