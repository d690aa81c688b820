use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    artist_details::*, loading::*, search_box::*, search_results::*,
};
use crate::controller::{SearchConfig, SearchController};

/// The artist search page. All page state lives in the one controller signal created
/// here and handed down to the children.
#[component]
pub fn SearchPage(config: SearchConfig) -> impl IntoView {
    let controller = RwSignal::new(SearchController::new(config));
    let loading = Signal::derive(move || controller.with(|c| c.is_loading()));

    view! {
        <Title text="Artist Search" />
        <div class="page">
            <h1 class="title">"Artist Search"</h1>
            <SearchBox controller />
            <Loading visible=loading />
            {config
                .details_enabled
                .then(|| {
                    view! {
                        <SearchResults controller />
                        <ArtistDetails controller />
                    }
                })}
        </div>
    }
}
