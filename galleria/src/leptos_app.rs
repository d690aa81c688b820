//! Serves the leptos pages and the wasm bundle built by cargo-leptos.
use axum::Router;
use galleria_app::*;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

use crate::web::WebState;

/// Reads the `[[workspace.metadata.leptos]]` settings, or their `LEPTOS_*` env overrides.
pub(crate) fn leptos_options() -> anyhow::Result<LeptosOptions> {
    let conf = get_configuration(None)?;
    Ok(conf.leptos_options)
}

pub(crate) fn create_leptos_app(state: &WebState) -> Router<WebState> {
    let routes = generate_route_list(App);
    let options = state.leptos_options.clone();
    tracing::info!(
        "Serving pkg dir: {}/{}",
        options.site_root,
        options.site_pkg_dir
    );
    Router::new()
        .leptos_routes(state, routes, move || shell(options.clone()))
        // pkg files live under the site root; everything else renders the app's 404
        .fallback(leptos_axum::file_and_error_handler::<WebState, _>(shell))
}
