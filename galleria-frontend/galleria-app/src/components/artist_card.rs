use galleria_api_types::SearchResultItem;
use leptos::prelude::*;

use crate::actions::select_artist;
use crate::controller::SearchController;

#[component]
pub fn ArtistCard(item: SearchResultItem, controller: RwSignal<SearchController>) -> impl IntoView {
    let id = item.id.clone();
    let selected = {
        let id = id.clone();
        move || controller.with(|c| c.is_selected(&id))
    };
    let image = item.display_image().to_string();
    let data_id = id.clone();
    view! {
        <div
            class="artist-card"
            class:selected=selected
            data-artist-id=data_id
            on:click=move |_| select_artist(controller, id.clone())
        >
            <img class="artist-image" src=image alt=item.name.clone() />
            <p class="artist-name">{item.name.clone()}</p>
        </div>
    }
}
