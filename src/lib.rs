pub mod appresult;
pub mod auth;
pub mod broadcast;
pub mod config;
pub mod events;
pub mod index;
pub mod quiz;
pub mod render;
pub mod res;
pub mod rooms;

use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};
use tower_http::trace::TraceLayer;

pub use appresult::{AppError, AppResult};

use broadcast::Broadcaster;
use config::Config;
use quiz::{
    Quiz,
    catalog::{self, CatalogError},
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub quiz: Arc<Quiz>,
    pub broadcaster: Broadcaster,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the rooms from the configured catalog and opens one update
    /// stream per room.
    pub fn new(config: Config) -> Result<Self, CatalogError> {
        let rooms = match &config.rooms_file {
            Some(path) => catalog::from_file(path)?,
            None => catalog::builtin(),
        };

        let quiz = Quiz::new(rooms);
        let broadcaster = Broadcaster::new(
            quiz.rooms().iter().map(|room| room.slug()),
            config.event_channel_capacity,
        );

        Ok(Self {
            quiz: Arc::new(quiz),
            broadcaster,
            config: Arc::new(config),
        })
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/health", get(index::health))
        .route("/events", get(events::events))
        .route("/web/{*path}", get(res::web))
        .nest("/room", rooms::router())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
