use leptos::prelude::*;

use crate::components::artist_card::*;
use crate::controller::{SearchController, ResultsView, SEARCH_FAILED_MESSAGE};

/// The result cards plus the "no results" note shown for an empty response.
#[component]
pub fn SearchResults(controller: RwSignal<SearchController>) -> impl IntoView {
    let results = Memo::new(move |_| controller.with(|c| c.results().clone()));
    let no_results = move || results.with(|r| matches!(r, ResultsView::NoResults));

    view! {
        <div id="results">
            {move || match results.get() {
                ResultsView::Cards(items) => {
                    view! {
                        <div class="card-container">
                            {items
                                .into_iter()
                                .map(|item| view! { <ArtistCard item controller /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                ResultsView::Failed => view! { <p>{SEARCH_FAILED_MESSAGE}</p> }.into_any(),
                ResultsView::Idle | ResultsView::NoResults => ().into_any(),
            }}
        </div>
        <p id="noResults" style:display=move || if no_results() { "block" } else { "none" }>
            "No results found."
        </p>
    }
}
