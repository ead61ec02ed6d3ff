use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::{AppResult, auth::CurrentPlayer, broadcast::Broadcaster, render};

use super::{CurrentRoom, publish_scoreboard};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn room(
    State(broadcaster): State<Broadcaster>,
    CurrentRoom(room): CurrentRoom,
    CurrentPlayer(player): CurrentPlayer,
) -> AppResult<Response> {
    let Some(player) = player else {
        return Ok(Html(render::login(&room)).into_response());
    };

    let standings = room.enter(&player).await;
    publish_scoreboard(&broadcaster, &room, &standings).await;

    Ok(Html(render::game(&room, &standings.rows)).into_response())
}
