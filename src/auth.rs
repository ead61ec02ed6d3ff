use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::quiz::{Player, Quiz};

/// Header a returning player sends their token in.
pub const AUTH_TOKEN_HEADER: &str = "Authentication-Token";

/// Header the join response carries the freshly issued token in.
pub const ISSUED_TOKEN_HEADER: &str = "Quiz-Auth-Token";

/// The player behind the request's token, or `None` for anonymous callers.
/// A missing, empty or unknown token is never an error.
pub struct CurrentPlayer(pub Option<Arc<Player>>);

impl<S> FromRequestParts<S> for CurrentPlayer
where
    Arc<Quiz>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
        else {
            return Ok(CurrentPlayer(None));
        };

        let quiz = Arc::<Quiz>::from_ref(state);
        Ok(CurrentPlayer(quiz.find_player_by_token(token.trim()).await))
    }
}
