use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::{
    AppError, AppResult,
    broadcast::{Broadcaster, SCOREBOARD_EVENT, single_line},
    config::Config,
    quiz::Quiz,
    render,
};

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    stream: String,
}

/// `GET /events?stream={slug}`: live scoreboard updates for one room.
///
/// The current scoreboard is sent first so a new viewer is never stale.
pub async fn events(
    State(quiz): State<Arc<Quiz>>,
    State(broadcaster): State<Broadcaster>,
    State(config): State<Arc<Config>>,
    Query(EventsQuery { stream: slug }): Query<EventsQuery>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let room = quiz.find_room(&slug).ok_or(AppError::NotFound("stream"))?;
    let rx = broadcaster
        .subscribe(room.slug())
        .ok_or(AppError::NotFound("stream"))?;

    tracing::debug!(room = %room.slug(), "Viewer subscribed");

    let current = single_line(&render::scoreboard(&room.standings().await.rows));
    let feed = stream::once(async move { current }).chain(updates(rx, room.slug().to_owned()));

    Ok(Sse::new(feed.map(|payload| Ok::<_, Infallible>(scoreboard_event(payload))))
        .keep_alive(KeepAlive::new().interval(config.sse_keep_alive)))
}

fn scoreboard_event(payload: String) -> Event {
    Event::default().event(SCOREBOARD_EVENT).data(payload)
}

/// Turns a room's receiver into a stream that ends when the channel closes.
/// A viewer that falls behind skips what it missed and keeps going.
fn updates(rx: broadcast::Receiver<String>, slug: String) -> impl Stream<Item = String> {
    stream::unfold((rx, slug), |(mut rx, slug)| async move {
        loop {
            match rx.recv().await {
                Ok(payload) => return Some((payload, (rx, slug))),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(room = %slug, skipped, "Viewer lagged behind updates");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    })
}
