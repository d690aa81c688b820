use icondata as i;
use leptos::{
    ev::{Event, KeyboardEvent},
    html::Input,
    prelude::*,
};
use leptos_icons::Icon;

use crate::actions::submit_search;
use crate::controller::SearchController;

#[component]
pub fn SearchBox(controller: RwSignal<SearchController>) -> impl IntoView {
    let text_input = NodeRef::<Input>::new();

    let submit = move || {
        let submission = submit_search(controller);
        if let (Some(message), Some(input)) = (submission.validity_message(), text_input.get()) {
            // `required` alone accepts whitespace
            input.set_custom_validity(message);
            let _ = input.report_validity();
        }
    };
    let keypress = move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            submit();
        }
    };
    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        if let Some(input) = text_input.get() {
            input.set_custom_validity("");
        }
        controller.update(|c| c.set_query(value));
    };

    view! {
        <div class="search-container">
            <input
                id="searchInput"
                node_ref=text_input
                type="text"
                required
                placeholder="Please enter an artist name."
                prop:value=move || controller.with(|c| c.query().to_string())
                on:input=on_input
                on:keypress=keypress
            />
            <span id="searchIcon" class="search-icon" title="Search" on:click=move |_| submit()>
                <Icon icon=i::AiSearchOutlined />
            </span>
            <span
                id="clearIcon"
                class="clear-icon"
                title="Clear"
                on:click=move |_| controller.update(SearchController::clear)
            >
                <Icon icon=i::AiCloseOutlined />
            </span>
        </div>
    }
}
