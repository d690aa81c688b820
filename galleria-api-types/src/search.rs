use serde::{Deserialize, Serialize};

use crate::{MISSING_IMAGE_MARKER, PLACEHOLDER_IMAGE};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchResultItem {
    pub id: String,
    pub name: String,
    pub image: String,
}

impl SearchResultItem {
    /// The image a card should display, swapping Artsy's "missing image" file for our logo.
    pub fn display_image(&self) -> &str {
        if self.image.contains(MISSING_IMAGE_MARKER) {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }
}
