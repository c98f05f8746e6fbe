use super::handlers::list_items::{__path_list_items, list_items};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_items))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/items", state.args.server.root_path),
        get(list_items),
    )
}
