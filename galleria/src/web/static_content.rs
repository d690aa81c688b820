use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;

use crate::web::error::WebError;

/// In release mode, return the files from a statically included dir
#[cfg(not(debug_assertions))]
fn get_static_file(path: &str) -> Option<&'static [u8]> {
    use include_dir::include_dir;
    static STATIC_DIR: include_dir::Dir = include_dir!("$CARGO_MANIFEST_DIR/static");
    let dir = &STATIC_DIR;
    let file = dir.get_file(path)?;
    Some(file.contents())
}

/// In debug mode, just load the files from disk
#[cfg(debug_assertions)]
fn get_static_file(path: &str) -> Option<Vec<u8>> {
    use std::path::{Component, PathBuf};

    let relative = std::path::Path::new(path);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    let file = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")).join(relative);
    std::fs::read(file).ok()
}

async fn get_file(path: &str) -> Result<Response<Body>, WebError> {
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    match get_static_file(path) {
        None => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())?),
        Some(file) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime_type.as_ref())
            .header(
                header::CACHE_CONTROL,
                #[cfg(not(debug_assertions))]
                "public, max-age=86400",
                #[cfg(debug_assertions)]
                "no-cache",
            )
            .body(Body::from(file))?),
    }
}

pub(crate) async fn favicon() -> impl IntoResponse {
    get_file("favicon.ico").await
}

pub(crate) async fn static_path(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');
    get_file(path).await
}
