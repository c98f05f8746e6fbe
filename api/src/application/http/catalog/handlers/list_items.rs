use axum::extract::State;
use ferrisquery_core::{
    domain::query::entities::{Combinator, PageRange},
    infrastructure::query::memory::InMemoryBackend,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::ListQueryExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListItemsResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Value>,
    /// Number of items matching the filter.
    pub total: i64,
    /// Inclusive bounds of the returned items, `end` is -1 for an empty page.
    #[serde(flatten)]
    pub range: PageRange,
}

#[utoipa::path(
    get,
    path = "",
    tag = "catalog",
    summary = "List catalog items",
    description = "List catalog items with filtering, ordering, and pagination",
    params(
        (
            "filter" = Option<String>,
            Query,
            description = "Clauses like `name=acme OR version=v1*`, matched case-insensitively"
        ),
        (
            "orderBy" = Option<String>,
            Query,
            description = "Sort clauses like `name asc, createTime desc`"
        ),
        ("pageSize" = Option<i32>, Query, description = "Items per page, 0 for all"),
        ("offset" = Option<i32>, Query, description = "Index of the first item (default: 0)"),
    ),
    responses(
        (status = 200, body = ListItemsResponse),
        (status = 400, description = "Invalid filter, orderBy or pagination parameters")
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    ListQueryExtractor(input): ListQueryExtractor,
) -> Result<Response<ListItemsResponse>, ApiError> {
    let query = state
        .query_service
        .compile(&input, &state.catalog.allow_list, Combinator::Any)?;

    let page_size = input
        .page_size
        .unwrap_or(state.args.catalog.default_page_size);
    let offset = input.offset.unwrap_or(0);

    let page = InMemoryBackend.execute(&query, &state.catalog.items, |total| {
        state.query_service.page_range(page_size, offset, total)
    });

    Ok(Response::OK(ListItemsResponse {
        items: page.items.into_iter().map(Value::from).collect(),
        total: page.total,
        range: page.range,
    }))
}
