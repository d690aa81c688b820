//! Minimal async client for the public Artsy API.
//!
//! Artsy hands out application ("xapp") tokens in exchange for client credentials.
//! The client fetches one lazily, keeps it for [`token::TOKEN_LIFETIME_DAYS`] and
//! attaches it to every search and artist request.

mod models;
mod token;

pub use models::{Artist, Link, Links, SearchHit};
pub use token::{XappToken, TOKEN_LIFETIME_DAYS};

use chrono::Utc;
use log::{info, warn};
use models::{SearchResponse, TokenRequest, TokenResponse};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use token::TokenCache;

pub const ARTSY_BASE_URL: &str = "https://api.artsy.net";
const TOKEN_HEADER: &str = "X-Xapp-Token";
const SEARCH_PAGE_SIZE: &str = "10";

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Artsy refused to issue a token, status {0}")]
    TokenRejected(StatusCode),
    #[error("Artsy token response did not contain a token")]
    MissingToken,
    #[error("Artsy returned status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("Base url {0} cannot have path segments")]
    BadBaseUrl(Url),
}

#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ArtsyClient {
    client: Client,
    credentials: Credentials,
    base_url: Url,
    token: TokenCache,
}

impl ArtsyClient {
    pub fn new(credentials: Credentials, base_url: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(concat!("galleria/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::BadBaseUrl(base_url));
        }
        Ok(Self {
            client,
            credentials,
            base_url,
            token: TokenCache::default(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::BadBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Requests a fresh token from Artsy, bypassing the cache.
    pub async fn fetch_token(&self) -> Result<XappToken, Error> {
        info!("Fetching new Artsy token");
        let url = self.endpoint(&["api", "tokens", "xapp_token"])?;
        let response = self
            .client
            .post(url)
            .json(&TokenRequest {
                client_id: &self.credentials.client_id,
                client_secret: &self.credentials.client_secret,
            })
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            warn!("Failed to fetch Artsy token. Status: {status}, response: {body}");
            return Err(Error::TokenRejected(status));
        }
        let body: TokenResponse = response.json().await?;
        let token = body.token.ok_or(Error::MissingToken)?;
        info!("New Artsy token fetched");
        Ok(XappToken::issued_at(token, Utc::now()))
    }

    /// Returns the cached token, fetching a new one when none is held or it expired.
    pub async fn ensure_valid_token(&self) -> Result<String, Error> {
        self.token
            .get_or_refresh(Utc::now(), || self.fetch_token())
            .await
    }

    /// Searches Artsy for artists. The hits are returned as Artsy sent them,
    /// callers filter on [`SearchHit::is_artist`].
    pub async fn search_artists(&self, query: &str) -> Result<Vec<SearchHit>, Error> {
        let token = self.ensure_valid_token().await?;
        let url = self.endpoint(&["api", "search"])?;
        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, token)
            .query(&[("q", query), ("size", SEARCH_PAGE_SIZE), ("type", "artist")])
            .send()
            .await?;
        let status = response.status();
        info!("Artsy search for {query:?} returned {status}");
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status));
        }
        let text = response.text().await?;
        let search: SearchResponse = serde_json::from_str(&text)?;
        Ok(search.embedded.results)
    }

    /// Looks up a single artist. `Ok(None)` means Artsy doesn't know the id.
    pub async fn get_artist(&self, artist_id: &str) -> Result<Option<Artist>, Error> {
        let token = self.ensure_valid_token().await?;
        let url = self.endpoint(&["api", "artists", artist_id])?;
        info!("Fetching details for artist {artist_id}");
        let response = self.client.get(url).header(TOKEN_HEADER, token).send().await?;
        match response.status() {
            StatusCode::OK => {
                let text = response.text().await?;
                Ok(Some(serde_json::from_str(&text)?))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(Error::UnexpectedStatus(status)),
        }
    }
}
