//! Application composition.
//!
//! Wires the configured backend into the repository and view state store,
//! and hosts the binary entry point.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ncpview_domain::StoryId;

use crate::infrastructure::{
    AppConfig, BackendKind, DirStoryBackend, HttpStoryBackend, StoryBackend,
};
use crate::repositories::Stories;
use crate::stores::StoryViewStore;

/// Composed application: repository plus view state store.
pub struct App {
    pub stories: Stories,
    pub store: StoryViewStore,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let backend: Arc<dyn StoryBackend> = match config.backend {
            BackendKind::Http => Arc::new(HttpStoryBackend::with_timeout(
                &config.base_url,
                config.fetch_timeout_secs,
            )),
            BackendKind::Dir => Arc::new(DirStoryBackend::new(config.data_dir.clone())),
        };
        let stories = Stories::new(backend);
        let store = StoryViewStore::new(stories.clone());
        Self { stories, store }
    }
}

pub async fn run() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ncpview_viewer=debug,ncpview_domain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NCP story viewer");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Backend: {:?}", config.backend);
    match config.backend {
        BackendKind::Http => tracing::info!("  Base URL: {}", config.base_url),
        BackendKind::Dir => tracing::info!("  Data dir: {}", config.data_dir.display()),
    }

    let app = App::new(&config);

    app.store.load_stories().await;
    let state = app.store.snapshot().await;
    match &state.error {
        Some(error) => {
            tracing::error!(code = error.code(), "failed to load story index: {error}")
        }
        None => {
            tracing::info!("Loaded {} stories", state.stories.len());
            for item in &state.stories {
                tracing::info!("  {} - {}", item.id, item.title);
            }
        }
    }

    // Optionally show one story in detail.
    if let Some(id) = std::env::args().nth(1) {
        let id = StoryId::new(id);
        app.store.load_story(&id).await;
        let state = app.store.snapshot().await;
        match (&state.current_story, &state.error) {
            (Some(story), _) => {
                tracing::info!("Story: {}", story.title);
                if let Some(narrative) = story.primary_narrative() {
                    tracing::info!("  Narrative: {}", narrative.title);
                    if let Some(subtext) = &narrative.subtext {
                        for beat in subtext.beats_in_order() {
                            let progress = subtext.beat_progress(&beat.id).unwrap_or(0.0);
                            tracing::info!(
                                "  Beat #{} ({progress:.0}%): {}",
                                beat.sequence,
                                beat.event
                            );
                        }
                    }
                }
            }
            (None, Some(error)) => {
                tracing::error!(code = error.code(), "failed to load story: {error}");
            }
            (None, None) => {}
        }
    }

    Ok(())
}
