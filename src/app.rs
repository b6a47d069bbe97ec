use std::net::SocketAddr;
use std::path::Path;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::auth;
use crate::state::AppState;

pub fn build_app(state: AppState) -> Router {
    // Debug builds the route listing at "/"; otherwise unknown paths fall
    // back to the static directory with an index.html SPA fallback.
    let root: Router<AppState> = if state.config.debug {
        Router::new().route("/", get(sitemap))
    } else {
        let dir = state.config.static_dir.clone();
        let index = Path::new(&dir).join("index.html");
        Router::new().fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)))
    };

    Router::new()
        .merge(auth::router())
        .nest("/api", Router::new().route("/health", get(|| async { "ok" })))
        .merge(root)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

async fn sitemap() -> Json<serde_json::Value> {
    Json(json!({
        "endpoints": [
            "POST /signup",
            "POST /login",
            "GET /private",
            "GET /api/health",
        ],
    }))
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
