use artsy::{Artist, ArtsyClient};
use axum::{
    extract::{Path, State},
    Json,
};
use galleria_api_types::{ArtistDetail, PLACEHOLDER_IMAGE};
use tracing::instrument;

use crate::web::error::ApiError;

#[instrument(skip(artsy))]
pub(crate) async fn artist_details(
    State(artsy): State<ArtsyClient>,
    Path(artist_id): Path<String>,
) -> Result<Json<ArtistDetail>, ApiError> {
    let artist = artsy
        .get_artist(&artist_id)
        .await?
        .ok_or(ApiError::ArtistNotFound)?;
    Ok(Json(to_artist_detail(artist)))
}

/// Fields pass through untouched; the page decides how to show missing values.
fn to_artist_detail(artist: Artist) -> ArtistDetail {
    let image = artist.thumbnail().unwrap_or(PLACEHOLDER_IMAGE).to_string();
    ArtistDetail {
        name: artist.name,
        birthday: artist.birthday,
        deathday: artist.deathday,
        nationality: artist.nationality,
        biography: artist.biography,
        image: Some(image),
    }
}
