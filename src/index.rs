use std::sync::Arc;

use axum::{debug_handler, extract::State, response::Html};

use crate::{quiz::Quiz, render};

#[debug_handler(state = crate::AppState)]
pub async fn index(State(quiz): State<Arc<Quiz>>) -> Html<String> {
    Html(render::home(quiz.rooms()))
}

#[debug_handler]
pub async fn health() -> &'static str {
    "ok"
}
