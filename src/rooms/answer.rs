use axum::{
    Form, debug_handler,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppError, AppResult, auth::CurrentPlayer, broadcast::Broadcaster};

use super::{CurrentRoom, publish_scoreboard};

/// Every submission is worth one point; answers are not checked.
pub(crate) const POINTS_PER_ANSWER: i64 = 1;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnswerForm {
    #[serde(default)]
    answer: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn answer(
    State(broadcaster): State<Broadcaster>,
    CurrentRoom(room): CurrentRoom,
    CurrentPlayer(player): CurrentPlayer,
    form: Result<Form<AnswerForm>, FormRejection>,
) -> AppResult<Response> {
    let AnswerForm { answer } = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable form, treating fields as empty");
        AnswerForm::default()
    });
    let player = player.ok_or(AppError::NotFound("player"))?;

    tracing::info!(
        room = %room.slug(),
        player = %player.id(),
        answer = %answer,
        "Answer submitted"
    );

    let standings = room.update_score(&player, POINTS_PER_ANSWER).await;
    publish_scoreboard(&broadcaster, &room, &standings).await;

    Ok(StatusCode::NO_CONTENT.into_response())
}
