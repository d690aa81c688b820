mod api;
pub(crate) mod error;
mod state;
mod static_content;

pub(crate) use state::WebState;

use std::net::SocketAddr;

use artsy::ArtsyClient;
use axum::{extract::FromRef, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::leptos_app::create_leptos_app;
use self::static_content::{favicon, static_path};

/// The JSON endpoints, static assets and favicon, independent of the rendered pages.
pub(crate) fn api_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ArtsyClient: FromRef<S>,
{
    Router::new()
        .route("/search", get(api::search))
        .route("/artist/{id}", get(api::artist_details))
        .route("/static/{*path}", get(static_path))
        .route("/favicon.ico", get(favicon))
}

pub(crate) async fn start_web(state: WebState, port: u16) -> anyhow::Result<()> {
    let app = api_router()
        .merge(create_leptos_app(&state))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use artsy::Credentials;
    use axum::body::{to_bytes, Body};
    use axum::extract::{Path, Query};
    use axum::http::{header, Request, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::post;
    use axum::Json;
    use galleria_api_types::{ArtistDetail, SearchResultItem, PLACEHOLDER_IMAGE};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct Upstream {
        token_requests: Arc<AtomicUsize>,
    }

    async fn issue_token(
        axum::extract::State(upstream): axum::extract::State<Upstream>,
    ) -> (StatusCode, Json<Value>) {
        upstream.token_requests.fetch_add(1, Ordering::SeqCst);
        (StatusCode::CREATED, Json(json!({ "token": "xapp" })))
    }

    async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
        match params.get("q").map(String::as_str) {
            Some("explode") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            _ => Json(json!({
                "_embedded": { "results": [
                    {
                        "type": "artist",
                        "title": "Andy Warhol",
                        "_links": {
                            "self": { "href": "https://api.artsy.net/api/artists/4d8b92b34eb68a1b2c0003f4" },
                            "thumbnail": { "href": "https://d32dm0rphc51dk.cloudfront.net/warhol/square.jpg" }
                        }
                    },
                    {
                        "type": "artist",
                        "title": "Andy Goldsworthy",
                        "_links": {
                            "self": { "href": "https://api.artsy.net/api/artists/andy-goldsworthy" }
                        }
                    },
                    {
                        "type": "artwork",
                        "title": "Campbell's Soup Cans",
                        "_links": {
                            "self": { "href": "https://api.artsy.net/api/artworks/soup" }
                        }
                    }
                ]}
            }))
            .into_response(),
        }
    }

    async fn artist(Path(id): Path<String>) -> Response {
        if id == "andy-warhol" {
            Json(json!({
                "id": "andy-warhol",
                "name": "Andy Warhol",
                "birthday": "1928",
                "deathday": "1987",
                "nationality": "American",
                "biography": "",
                "_links": {
                    "thumbnail": { "href": "https://d32dm0rphc51dk.cloudfront.net/warhol/square.jpg" }
                }
            }))
            .into_response()
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    }

    async fn spawn_upstream() -> (String, Upstream) {
        let upstream = Upstream::default();
        let app = Router::new()
            .route("/api/tokens/xapp_token", post(issue_token))
            .route("/api/search", get(search))
            .route("/api/artists/{id}", get(artist))
            .with_state(upstream.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), upstream)
    }

    fn client(base: &str) -> ArtsyClient {
        let credentials = Credentials {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
        };
        ArtsyClient::new(credentials, base).unwrap()
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn blank_query_skips_artsy() {
        let (base, upstream) = spawn_upstream().await;
        let app = api_router().with_state(client(&base));
        for uri in ["/search", "/search?q=", "/search?q=%20%20"] {
            let (status, body) = get_json(app.clone(), uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!([]));
        }
        assert_eq!(upstream.token_requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn search_keeps_only_artists() {
        let (base, _) = spawn_upstream().await;
        let app = api_router().with_state(client(&base));
        let (status, body) = get_json(app, "/search?q=andy").await;
        assert_eq!(status, StatusCode::OK);
        let items: Vec<SearchResultItem> = serde_json::from_value(body).unwrap();
        assert_eq!(
            items,
            vec![
                SearchResultItem {
                    id: "4d8b92b34eb68a1b2c0003f4".to_string(),
                    name: "Andy Warhol".to_string(),
                    image: "https://d32dm0rphc51dk.cloudfront.net/warhol/square.jpg".to_string(),
                },
                SearchResultItem {
                    id: "andy-goldsworthy".to_string(),
                    name: "Andy Goldsworthy".to_string(),
                    image: PLACEHOLDER_IMAGE.to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn failing_artsy_search_is_empty() {
        let (base, _) = spawn_upstream().await;
        let app = api_router().with_state(client(&base));
        let (status, body) = get_json(app, "/search?q=explode").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn unreachable_artsy_is_a_server_error() {
        let app = api_router().with_state(client("http://127.0.0.1:1"));
        let (status, body) = get_json(app, "/search?q=andy").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error_message"].is_string());
    }

    #[tokio::test]
    async fn artist_details() {
        let (base, upstream) = spawn_upstream().await;
        let app = api_router().with_state(client(&base));

        let (status, body) = get_json(app.clone(), "/artist/andy-warhol").await;
        assert_eq!(status, StatusCode::OK);
        let detail: ArtistDetail = serde_json::from_value(body).unwrap();
        assert_eq!(detail.name.as_deref(), Some("Andy Warhol"));
        assert_eq!(detail.nationality.as_deref(), Some("American"));
        assert_eq!(detail.biography.as_deref(), Some(""));
        assert_eq!(
            detail.image.as_deref(),
            Some("https://d32dm0rphc51dk.cloudfront.net/warhol/square.jpg")
        );

        let (status, body) = get_json(app, "/artist/nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error_message": "Artist not found" }));
        assert_eq!(upstream.token_requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn serves_static_files() {
        let app: Router = api_router().with_state(client("http://127.0.0.1:1"));
        let response = app
            .clone()
            .oneshot(
                Request::get("/static/images/artsy_logo.svg")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");

        let icon = app
            .clone()
            .oneshot(Request::get("/favicon.ico").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(icon.status(), StatusCode::OK);
        assert_eq!(icon.headers()[header::CONTENT_TYPE], "image/x-icon");
        let bytes = to_bytes(icon.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..4], &[0, 0, 1, 0]);

        let missing = app
            .oneshot(Request::get("/static/nope.txt").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
