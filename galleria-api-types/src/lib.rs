mod artist;
mod search;

pub mod result;

pub use artist::ArtistDetail;
pub use search::SearchResultItem;

/// Logo shown wherever an artist has no usable image.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/artsy_logo.svg";

/// Artsy serves this file in place of artwork it doesn't have.
pub const MISSING_IMAGE_MARKER: &str = "missing_image.png";
