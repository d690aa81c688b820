mod config;
mod leptos_app;
mod web;

use crate::config::Config;
use crate::web::WebState;
use anyhow::Result;
use artsy::ArtsyClient;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        info!("loaded environment from {}", path.display());
    }
    let config = Config::from_env()?;
    info!("starting with {config:?}");
    let artsy = ArtsyClient::new(config.credentials.clone(), &config.artsy_url)?;
    // not fatal, the first request tries again
    if let Err(e) = artsy.ensure_valid_token().await {
        warn!("Unable to fetch an Artsy token at startup: {e}");
    }
    let web_state = WebState {
        artsy,
        leptos_options: leptos_app::leptos_options()?,
    };
    web::start_web(web_state, config.port).await
}
