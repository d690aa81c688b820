use galleria_api_types::{ArtistDetail, SearchResultItem};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

pub(crate) async fn search_artists(path: &str) -> AppResult<Vec<SearchResultItem>> {
    fetch_api(path).await?.ok_or(AppError::NoData)
}

/// `Ok(None)` when the server has no such artist.
pub(crate) async fn get_artist(path: &str) -> AppResult<Option<ArtistDetail>> {
    fetch_api(path).await
}

/// GETs `path` and decodes the JSON body. A 404, or a literal `null`, comes back as `None`.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_api<T>(path: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
{
    let response = gloo_net::http::Request::get(path).send().await?;
    match response.status() {
        404 => return Ok(None),
        status if !response.ok() => return Err(AppError::Status(status)),
        _ => {}
    }
    let json = response.text().await?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(feature = "ssr")]
pub async fn fetch_api<T>(path: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
{
    // server side there is no page origin, so go through the public address
    let hostname =
        std::env::var("GALLERIA_SITE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let url = format!("{hostname}{path}");
    let response = reqwest::get(&url)
        .await
        .inspect_err(|e| log::error!("Response {e}. {url}"))?;
    match response.status() {
        reqwest::StatusCode::NOT_FOUND => return Ok(None),
        status if !status.is_success() => return Err(AppError::Status(status.as_u16())),
        _ => {}
    }
    let json = response.text().await?;
    serde_json::from_str(&json)
        .inspect_err(|e| log::error!("{e} {url} returned: json text {json}"))
        .map_err(AppError::from)
}
