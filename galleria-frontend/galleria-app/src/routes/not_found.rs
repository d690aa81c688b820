use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Artist Search" />
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for doesn't exist."</p>
            <A href="/">"Back to search"</A>
        </div>
    }
}
