//! HTTP transport for books-graphql
//!
//! ## Routes
//!
//! - `POST /graphql` — execute a GraphQL request (JSON body).
//! - `GET /graphql?query=...` — execute a query (mutations are rejected).
//! - `GET /graphql` — embedded GraphiQL page (unless disabled).
//! - `GET /health` — `{ "ok": true, "books": <count> }`.
//!
//! Requests carrying an operation (`POST`, or `GET` with a query string) must
//! be CSRF-safe: a non-simple `Content-Type`, or a non-empty
//! `x-apollo-operation-name` / `apollo-require-preflight` header.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use async_graphql::http::GraphiQLSource;
use async_graphql::parser::types::OperationType;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{FromRequest, Request, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::graphql::{build_schema, BooksSchema};
use crate::application::service::CatalogService;
use crate::config::Config;

pub const GRAPHQL_PATH: &str = "/graphql";

const SIMPLE_CONTENT_TYPES: [&str; 3] = [
    "text/plain",
    "application/x-www-form-urlencoded",
    "multipart/form-data",
];

const PREFLIGHT_HEADERS: [&str; 2] = ["x-apollo-operation-name", "apollo-require-preflight"];

#[derive(Clone)]
struct AppState {
    schema: BooksSchema,
    service: Arc<CatalogService>,
    playground: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpOptions {
    pub playground: bool,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self { playground: true }
    }
}

// =============================================================================
// Public entry points
// =============================================================================

/// Build the axum `Router` for the given catalog.
pub fn router(service: Arc<CatalogService>, options: HttpOptions) -> Router {
    let state = AppState {
        schema: build_schema(service.clone()),
        service,
        playground: options.playground,
    };

    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_handler))
        .route("/health", get(health_handler))
        .route_layer(middleware::from_fn(csrf_guard))
        .with_state(state)
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn serve(listener: tokio::net::TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Config から Catalog を組み立ててサーバを起動する。
pub async fn run(config: Config) -> anyhow::Result<()> {
    let service = Arc::new(config.catalog_service());
    log::info!(
        "catalog ready: {:?} store, {} books",
        config.store,
        service.len()
    );

    let app = router(
        service,
        HttpOptions {
            playground: !config.no_playground,
        },
    );

    let addr: SocketAddr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;
    log::info!("server ready at http://{local}{GRAPHQL_PATH}");

    serve(listener, app).await.context("server error")?;
    log::info!("server stopped");
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// query string 付きなら実行、なければ GraphiQL を返す。
async fn graphql_get(State(state): State<AppState>, request: Request) -> Response {
    if request.uri().query().is_none() {
        if state.playground {
            return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
        }
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let extracted: Result<GraphQLRequest, _> = GraphQLRequest::from_request(request, &state).await;
    let req = match extracted {
        Ok(req) => req.into_inner(),
        Err(rejection) => return rejection.into_response(),
    };
    if is_mutation(&req.query) {
        log::warn!("rejected mutation sent over GET");
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            "mutations can only be sent with POST",
        )
            .into_response();
    }

    GraphQLResponse::from(state.schema.execute(req).await).into_response()
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "ok": true, "books": state.service.len() }))
}

async fn csrf_guard(request: Request, next: Next) -> Response {
    if carries_operation(&request) && !is_preflighted(request.headers()) {
        log::warn!("blocked {} without CSRF-safe headers", request.method());
        return (
            StatusCode::BAD_REQUEST,
            "This operation has been blocked as a potential Cross-Site Request Forgery (CSRF). \
             Specify a 'content-type' header that is not one of \
             application/x-www-form-urlencoded, multipart/form-data, text/plain, \
             or provide a non-empty value for one of: x-apollo-operation-name, apollo-require-preflight.",
        )
            .into_response();
    }
    next.run(request).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutdown requested");
}

// =============================================================================
// Helpers
// =============================================================================

fn carries_operation(request: &Request) -> bool {
    match *request.method() {
        Method::POST => true,
        Method::GET => request.uri().query().is_some(),
        _ => false,
    }
}

/// 構文エラーの文書は実行側でエラーとして返すため、ここでは false。
fn is_mutation(query: &str) -> bool {
    match async_graphql::parser::parse_query(query) {
        Ok(doc) => doc
            .operations
            .iter()
            .any(|(_, op)| op.node.ty == OperationType::Mutation),
        Err(_) => false,
    }
}

/// ブラウザが preflight なしに送れないリクエストかを判定する。
fn is_preflighted(headers: &HeaderMap) -> bool {
    let has_preflight_header = PREFLIGHT_HEADERS.iter().any(|name| {
        headers
            .get(*name)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| !v.is_empty())
    });
    if has_preflight_header {
        return true;
    }

    match headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        Some(content_type) => {
            let mime = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            !SIMPLE_CONTENT_TYPES.contains(&mime.as_str())
        }
        None => false,
    }
}
