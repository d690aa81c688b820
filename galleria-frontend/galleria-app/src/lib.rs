mod actions;
pub mod api;
pub mod components;
pub mod controller;
pub mod error;
pub mod routes;

use crate::controller::SearchConfig;
use crate::routes::{not_found::*, search::*};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// Document wrapper used when rendering on the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" type="image/svg+xml" href="/static/images/artsy_logo.svg" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/galleria.css" />
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <SearchPage config=SearchConfig::full() /> }
                    />
                    <Route
                        path=path!("/lite")
                        view=|| view! { <SearchPage config=SearchConfig::reduced() /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
