use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub(crate) struct TokenRequest<'a> {
    pub(crate) client_id: &'a str,
    pub(crate) client_secret: &'a str,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TokenResponse {
    pub(crate) token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub thumbnail: Option<Link>,
}

/// One entry of `_embedded.results` from `/api/search`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    #[serde(rename = "type")]
    pub hit_type: String,
    pub title: String,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl SearchHit {
    pub fn is_artist(&self) -> bool {
        self.hit_type == "artist"
    }

    /// The artist id is the last path segment of the hit's self link.
    pub fn artist_id(&self) -> Option<&str> {
        let href = &self.links.self_link.as_ref()?.href;
        href.trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.links.thumbnail.as_ref().map(|t| t.href.as_str())
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SearchEmbedded {
    #[serde(default)]
    pub(crate) results: Vec<SearchHit>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchResponse {
    #[serde(rename = "_embedded", default)]
    pub(crate) embedded: SearchEmbedded,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub nationality: Option<String>,
    pub biography: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Artist {
    pub fn thumbnail(&self) -> Option<&str> {
        self.links.thumbnail.as_ref().map(|t| t.href.as_str())
    }
}
