use serde::{Deserialize, Serialize};

/// Everything the detail panel knows about an artist. Artsy reports unknown values
/// as empty strings, which are treated the same as missing ones.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct ArtistDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ArtistDetail {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn birthday(&self) -> Option<&str> {
        non_empty(&self.birthday)
    }

    pub fn deathday(&self) -> Option<&str> {
        non_empty(&self.deathday)
    }

    pub fn nationality(&self) -> Option<&str> {
        non_empty(&self.nationality)
    }

    pub fn biography(&self) -> Option<&str> {
        non_empty(&self.biography)
    }
}
