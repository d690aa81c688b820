use artsy::ArtsyClient;
use axum::extract::FromRef;
use leptos::config::LeptosOptions;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) artsy: ArtsyClient,
    pub(crate) leptos_options: LeptosOptions,
}

impl FromRef<WebState> for ArtsyClient {
    fn from_ref(input: &WebState) -> Self {
        input.artsy.clone()
    }
}

impl FromRef<WebState> for LeptosOptions {
    fn from_ref(input: &WebState) -> Self {
        input.leptos_options.clone()
    }
}
