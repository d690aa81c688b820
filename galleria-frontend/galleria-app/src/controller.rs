//! State behind the search page.
//!
//! [`SearchController`] owns everything the page renders: the text in the search
//! field, the result cards, the selected card, the detail panel and whether a request
//! is outstanding. Components read it through a signal and mutate it only through the
//! methods here, which keeps the page logic testable without a browser.
//!
//! Every request gets a [`Ticket`]. Completions carrying anything but the latest ticket
//! of their kind are dropped, so a slow response can never overwrite a newer one.

use galleria_api_types::{ArtistDetail, SearchResultItem};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::AppResult;

/// Matches javascript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const SEARCH_FAILED_MESSAGE: &str = "No results found.";
pub const DETAIL_FAILED_MESSAGE: &str = "Could not load artist details.";
/// Custom validity set on the search field when a blank query is rejected.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter an artist name.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Whether results render as selectable cards with a detail panel. When off the page
    /// only submits searches and relies on the browser's field validation.
    pub details_enabled: bool,
}

impl SearchConfig {
    pub fn full() -> Self {
        Self {
            details_enabled: true,
        }
    }

    pub fn reduced() -> Self {
        Self {
            details_enabled: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: Ticket,
    pub query: String,
}

impl SearchRequest {
    pub fn path(&self) -> String {
        search_path(&self.query)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    pub ticket: Ticket,
    pub artist_id: String,
}

impl DetailRequest {
    pub fn path(&self) -> String {
        artist_path(&self.artist_id)
    }
}

/// What submitting the search field led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Search(SearchRequest),
    /// Blank query on the full page, nothing happens.
    Ignored,
    /// Blank query on the reduced page, the field should report its validity.
    Invalid,
}

impl Submission {
    /// The message the search field reports, if this submission was rejected.
    pub fn validity_message(&self) -> Option<&'static str> {
        match self {
            Submission::Invalid => Some(EMPTY_QUERY_MESSAGE),
            Submission::Search(_) | Submission::Ignored => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultsView {
    #[default]
    Idle,
    Cards(Vec<SearchResultItem>),
    NoResults,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailView {
    /// Nothing rendered, either never loaded or cleared for a new request.
    #[default]
    Empty,
    /// The server had nothing for the artist, the panel is hidden.
    Hidden,
    Shown(ArtistDetail),
    Failed,
}

#[derive(Clone, Debug)]
pub struct SearchController {
    config: SearchConfig,
    query: String,
    last_ticket: u64,
    pending_search: Option<Ticket>,
    pending_detail: Option<Ticket>,
    results: ResultsView,
    selected: Option<String>,
    detail: DetailView,
}

impl SearchController {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            query: String::new(),
            last_ticket: 0,
            pending_search: None,
            pending_detail: None,
            results: ResultsView::Idle,
            selected: None,
            detail: DetailView::Empty,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, artist_id: &str) -> bool {
        self.selected.as_deref() == Some(artist_id)
    }

    pub fn is_loading(&self) -> bool {
        self.pending_search.is_some() || self.pending_detail.is_some()
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        Ticket(self.last_ticket)
    }

    /// Submits whatever is in the search field. The search icon and the Enter key both
    /// land here.
    pub fn submit(&mut self) -> Submission {
        let query = self.query.trim();
        if query.is_empty() {
            return if self.config.details_enabled {
                Submission::Ignored
            } else {
                Submission::Invalid
            };
        }
        let query = query.to_string();
        let ticket = self.issue_ticket();
        self.pending_search = Some(ticket);
        if self.config.details_enabled {
            self.pending_detail = None;
            self.detail = DetailView::Empty;
        }
        Submission::Search(SearchRequest { ticket, query })
    }

    /// Applies a search response. Returns false when the response was superseded.
    pub fn complete_search(
        &mut self,
        ticket: Ticket,
        result: AppResult<Vec<SearchResultItem>>,
    ) -> bool {
        if self.pending_search != Some(ticket) {
            return false;
        }
        self.pending_search = None;
        if !self.config.details_enabled {
            if let Err(e) = result {
                log::error!("Error fetching search results: {e}");
            }
            return true;
        }
        self.selected = None;
        self.results = match result {
            Ok(items) if items.is_empty() => ResultsView::NoResults,
            Ok(items) => ResultsView::Cards(items),
            Err(e) => {
                log::error!("Error fetching search results: {e}");
                ResultsView::Failed
            }
        };
        true
    }

    /// Marks a card as the selection and starts loading its details. The selection is a
    /// single id, so marking one card unmarks the previous one.
    pub fn select(&mut self, artist_id: String) -> Option<DetailRequest> {
        if !self.config.details_enabled {
            return None;
        }
        let ResultsView::Cards(items) = &self.results else {
            return None;
        };
        if !items.iter().any(|item| item.id == artist_id) {
            return None;
        }
        self.selected = Some(artist_id.clone());
        self.detail = DetailView::Empty;
        let ticket = self.issue_ticket();
        self.pending_detail = Some(ticket);
        Some(DetailRequest { ticket, artist_id })
    }

    /// Applies an artist lookup. `Ok(None)` is the server saying it has no such artist.
    pub fn complete_detail(
        &mut self,
        ticket: Ticket,
        result: AppResult<Option<ArtistDetail>>,
    ) -> bool {
        if self.pending_detail != Some(ticket) {
            return false;
        }
        self.pending_detail = None;
        self.detail = match result {
            Ok(Some(detail)) => DetailView::Shown(detail),
            Ok(None) => DetailView::Hidden,
            Err(e) => {
                log::error!("Error fetching artist details: {e}");
                DetailView::Failed
            }
        };
        true
    }

    /// Empties the search field. On the full page this also drops the results, the
    /// selection, the detail panel and anything still in flight.
    pub fn clear(&mut self) {
        self.query.clear();
        if !self.config.details_enabled {
            return;
        }
        self.pending_search = None;
        self.pending_detail = None;
        self.results = ResultsView::Idle;
        self.selected = None;
        self.detail = DetailView::Empty;
    }
}

pub fn search_path(query: &str) -> String {
    format!("/search?q={}", utf8_percent_encode(query, URI_COMPONENT))
}

pub fn artist_path(artist_id: &str) -> String {
    format!("/artist/{}", utf8_percent_encode(artist_id, URI_COMPONENT))
}

pub fn date_range(birthday: Option<&str>, deathday: Option<&str>) -> String {
    match (birthday, deathday) {
        (Some(birth), Some(death)) => format!(" ({birth} - {death})"),
        (Some(birth), None) => format!(" ({birth} - )"),
        (None, Some(death)) => format!(" ( - {death})"),
        (None, None) => " (-)".to_string(),
    }
}

/// Heading of the detail panel, e.g. `Pablo Picasso (1881 - 1973)`.
pub fn header_text(detail: &ArtistDetail) -> String {
    format!(
        "{}{}",
        detail.name().unwrap_or(UNKNOWN_ARTIST),
        date_range(detail.birthday(), detail.deathday())
    )
}
