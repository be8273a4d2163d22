//! NCP viewer library.
//!
//! Story data access for the Narrative Context Protocol viewer.
//!
//! ## Structure
//!
//! - `infrastructure/` - backend port, concrete backends, configuration
//! - `repositories/` - data access wrappers (list, get, search, filter)
//! - `stores/` - observable view state over the repositories
//! - `app` - application composition

pub mod app;
pub mod infrastructure;
pub mod repositories;
pub mod stores;

pub use app::App;
