use std::sync::Arc;

use axum::{
    Form, debug_handler,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppResult, auth::ISSUED_TOKEN_HEADER, broadcast::Broadcaster, quiz::Quiz};

use super::{CurrentRoom, publish_scoreboard};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JoinForm {
    #[serde(default)]
    name: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn join(
    State(quiz): State<Arc<Quiz>>,
    State(broadcaster): State<Broadcaster>,
    CurrentRoom(room): CurrentRoom,
    form: Result<Form<JoinForm>, FormRejection>,
) -> AppResult<Response> {
    let JoinForm { name } = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable form, treating fields as empty");
        JoinForm::default()
    });
    let (player, standings) = quiz.register_player(&room, name.trim().to_owned()).await;
    publish_scoreboard(&broadcaster, &room, &standings).await;

    Ok((
        StatusCode::OK,
        [(ISSUED_TOKEN_HEADER, player.token().as_str().to_owned())],
    )
        .into_response())
}
