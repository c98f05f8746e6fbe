use std::sync::Arc;

use crate::application::http::catalog::{entities::Catalog, router::catalog_routes};
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, routing::get};
use ferrisquery_core::domain::query::services::QueryService;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, info_span};
use utoipa::OpenApi;

pub fn state(args: Arc<Args>, query_service: QueryService) -> Result<AppState, anyhow::Error> {
    let allow_list = args.catalog.columns.clone();
    let catalog = match &args.catalog.path {
        Some(path) => Catalog::load(path, allow_list)?,
        None => Catalog::new(Vec::new(), allow_list),
    };
    info!(
        items = catalog.items.len(),
        columns = catalog.allow_list.len(),
        "catalog loaded"
    );

    Ok(AppState::new(args, query_service, catalog))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();

    let router = axum::Router::new()
        .route(
            &format!("{}/api-docs/openapi.json", root_path),
            get(move || async move { Json(openapi) }),
        )
        .merge(catalog_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
