//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page
//! GET  /index.html      - Home page
//! GET  /health          - Health check
//!
//! # Auth
//! GET  /login           - Login form, or a greeting when logged in
//! GET  /login.html      - Same as GET /login
//! POST /login           - Login action (sets the `username` cookie)
//! GET  /logout          - Logout action (expires the cookie)
//!
//! # Catalog
//! GET  /productos.html  - Product table
//! GET  /productos.xls   - Product table as a spreadsheet download
//! GET  /productos.json  - Products as a JSON download
//!
//! GET  /static/*        - Stylesheets
//! ```

pub mod auth;
pub mod catalog;
pub mod home;

use axum::{
    Router,
    http::{Request, Response, Uri},
    middleware::from_fn,
    routing::get,
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::error::AppError;
use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/login.html", get(auth::login_page))
        .route("/logout", get(auth::logout))
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/productos.html", get(catalog::catalog))
        .route("/productos.xls", get(catalog::catalog))
        .route("/productos.json", get(catalog::catalog))
}

/// Create all page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        .route("/index.html", get(home::home))
        // Auth routes
        .merge(auth_routes())
        // Catalog routes
        .merge(catalog_routes())
}

/// Build the complete application: routes, static files, fallback and the
/// middleware stack.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(home::health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &Response<_>, latency: std::time::Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Fallback for every unrouted path.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
