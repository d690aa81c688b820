use artsy::{ArtsyClient, SearchHit};
use axum::{
    extract::{Query, State},
    Json,
};
use galleria_api_types::{SearchResultItem, PLACEHOLDER_IMAGE};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::web::error::ApiError;

#[derive(Deserialize, Debug)]
pub(crate) struct SearchParams {
    q: Option<String>,
}

#[instrument(skip(artsy))]
pub(crate) async fn search(
    State(artsy): State<ArtsyClient>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResultItem>>, ApiError> {
    let Some(query) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
        return Ok(Json(vec![]));
    };
    let hits = match artsy.search_artists(query).await {
        Ok(hits) => hits,
        // Artsy having a bad day reads as "no results" to the page
        Err(artsy::Error::UnexpectedStatus(status)) => {
            warn!("Artsy search returned {status}");
            return Ok(Json(vec![]));
        }
        Err(e) => return Err(e.into()),
    };
    let results: Vec<_> = hits.iter().filter_map(to_result_item).collect();
    info!("Sending {} artists to the frontend", results.len());
    Ok(Json(results))
}

fn to_result_item(hit: &SearchHit) -> Option<SearchResultItem> {
    if !hit.is_artist() {
        return None;
    }
    Some(SearchResultItem {
        id: hit.artist_id()?.to_string(),
        name: hit.title.clone(),
        image: hit.thumbnail().unwrap_or(PLACEHOLDER_IMAGE).to_string(),
    })
}
