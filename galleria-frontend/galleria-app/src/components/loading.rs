use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            id="loading"
            class="lds-ellipsis"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div></div>
            <div></div>
            <div></div>
            <div></div>
        </div>
    }
}
