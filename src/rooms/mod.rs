mod answer;
mod join;
mod room;

use std::sync::Arc;

use axum::{
    Router,
    extract::{FromRef, FromRequestParts, Path},
    http::request::Parts,
    routing::{get, post},
};

use crate::{
    AppError, AppState,
    broadcast::Broadcaster,
    quiz::{Quiz, Room, Standings},
    render,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(room::room))
        .route("/{slug}/join", post(join::join))
        .route("/{slug}/answer", post(answer::answer))
}

/// The room named by the `{slug}` path segment. Unknown slugs are a 404.
pub struct CurrentRoom(pub Arc<Room>);

impl<S> FromRequestParts<S> for CurrentRoom
where
    Arc<Quiz>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(slug) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("room"))?;

        Arc::<Quiz>::from_ref(state)
            .find_room(&slug)
            .map(CurrentRoom)
            .ok_or(AppError::NotFound("room"))
    }
}

/// Renders `standings` and pushes them to the room's viewers. Must be called
/// without the room's scoreboard lock held.
pub(crate) async fn publish_scoreboard(
    broadcaster: &Broadcaster,
    room: &Room,
    standings: &Standings,
) {
    let fragment = render::scoreboard(&standings.rows);
    broadcaster
        .publish(room.slug(), standings.revision, &fragment)
        .await;
}
