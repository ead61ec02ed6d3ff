use std::{
    path::{Component, Path as FsPath, PathBuf},
    sync::Arc,
};

use axum::{
    debug_handler,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{AppError, AppResult, config::Config};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// Serves files under the configured web directory at `/web/{*path}`.
#[debug_handler(state = crate::AppState)]
pub async fn web(
    State(config): State<Arc<Config>>,
    Path(path): Path<String>,
) -> AppResult<Response> {
    let Some(file) = resolve(&config.web_dir, &path) else {
        return Err(AppError::NotFound("file"));
    };

    match tokio::fs::metadata(&file).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(AppError::NotFound("file")),
    }

    let body = match tokio::fs::read(&file).await {
        Ok(body) => body,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("file"));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(([(header::CONTENT_TYPE, content_type(&path))], body).into_response())
}

pub fn content_type(path: &str) -> &'static str {
    if path.ends_with(".js") {
        "text/javascript"
    } else if path.ends_with(".css") {
        "text/css"
    } else {
        "image/svg+xml"
    }
}

/// Joins `path` onto `root`, refusing anything that could climb out of it.
fn resolve(root: &FsPath, path: &str) -> Option<PathBuf> {
    let relative = FsPath::new(path);
    if path.is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    Some(root.join(relative))
}
