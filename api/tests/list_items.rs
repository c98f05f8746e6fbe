use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use ferrisquery_api::{
    application::http::{
        catalog::entities::{Catalog, CatalogItem},
        server::{
            api_entities::api_error::ErrorResponse, app_state::AppState, http_server::router,
        },
    },
    args::{Args, CatalogArgs, LogArgs, ServerArgs},
};
use ferrisquery_core::domain::query::{
    services::QueryService, value_objects::ColumnAllowList,
};
use serde_json::{Value, json};

fn args(default_page_size: i32) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:5555".to_string()],
        },
        log: LogArgs {
            filter: "debug".to_string(),
            json: false,
        },
        catalog: CatalogArgs {
            path: None,
            columns: allow_list(),
            default_page_size,
        },
    }
}

fn allow_list() -> ColumnAllowList {
    ColumnAllowList::new()
        .with("name", "name")
        .with("description", "description")
        .with("version", "version")
        .with("createTime", "create_time")
        .with("secret", "")
}

fn items() -> Vec<CatalogItem> {
    [
        json!({"name": "Acme", "description": "Widget company", "version": "v1.0", "create_time": "2024-01-05"}),
        json!({"name": "Globex", "description": "Energy", "version": "v2.1", "create_time": "2023-11-20"}),
        json!({"name": "Initech", "description": "Software widgets", "version": "v1.5", "create_time": "2024-03-14"}),
        json!({"name": "Umbrella", "description": "Pharmaceuticals", "version": "v3.0", "create_time": "2022-07-01", "secret": "x"}),
    ]
    .into_iter()
    .map(|value| match value {
        Value::Object(map) => CatalogItem(map),
        _ => unreachable!(),
    })
    .collect()
}

fn server(default_page_size: i32) -> TestServer {
    let args = Arc::new(args(default_page_size));
    let catalog = Catalog::new(items(), args.catalog.columns.clone());
    let state = AppState::new(args, QueryService::silent(), catalog);
    TestServer::new(router(state).unwrap()).unwrap()
}

fn names(body: &Value) -> Vec<&str> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_without_parameters() {
    let response = server(20).get("/items").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 4);
    assert_eq!(body["start"], 0);
    assert_eq!(body["end"], 3);
    assert_eq!(names(&body), vec!["Acme", "Globex", "Initech", "Umbrella"]);
}

#[tokio::test]
async fn test_filter_joins_clauses_with_or() {
    let response = server(20)
        .get("/items")
        .add_query_param("filter", "description=WIDGET OR version=v3*")
        .add_query_param("orderBy", "name desc")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 3);
    assert_eq!(names(&body), vec!["Umbrella", "Initech", "Acme"]);
}

#[tokio::test]
async fn test_multi_word_value() {
    let response = server(20)
        .get("/items")
        .add_query_param("filter", "description = software   widgets")
        .await;
    response.assert_status_ok();
    assert_eq!(names(&response.json::<Value>()), vec!["Initech"]);
}

#[tokio::test]
async fn test_pagination() {
    let response = server(20)
        .get("/items")
        .add_query_param("orderBy", "createTime")
        .add_query_param("pageSize", 2)
        .add_query_param("offset", 2)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 4);
    assert_eq!(body["start"], 2);
    assert_eq!(body["end"], 3);
    assert_eq!(names(&body), vec!["Acme", "Initech"]);
}

#[tokio::test]
async fn test_default_page_size() {
    let response = server(3).get("/items").await;
    let body: Value = response.json();
    assert_eq!(names(&body).len(), 3);
    assert_eq!(body["end"], 2);
}

#[tokio::test]
async fn test_offset_past_end_returns_empty_page() {
    let response = server(20)
        .get("/items")
        .add_query_param("offset", 10)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 4);
    assert_eq!(body["start"], 0);
    assert_eq!(body["end"], -1);
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn test_invalid_filter_is_bad_request() {
    let response = server(20)
        .get("/items")
        .add_query_param("filter", "name=acme OR")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "E_VALIDATION");
    assert_eq!(body.status, 400);
    assert!(body.message.contains("name=acme OR"));
}

#[tokio::test]
async fn test_disallowed_attribute_is_bad_request() {
    let response = server(20)
        .get("/items")
        .add_query_param("orderBy", "secret desc")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: ErrorResponse = response.json();
    assert_eq!(body.message, "attribute secret cannot be used for orderBy");
}

#[tokio::test]
async fn test_unknown_attribute_is_bad_request() {
    let response = server(20)
        .get("/items")
        .add_query_param("filter", "owner=bob")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: ErrorResponse = response.json();
    assert_eq!(body.message, "unknown filter attribute: owner");
}

#[tokio::test]
async fn test_malformed_page_size_is_bad_request() {
    let response = server(20)
        .get("/items")
        .add_query_param("pageSize", "ten")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "E_BAD_REQUEST");
}

#[tokio::test]
async fn test_openapi_document() {
    let response = server(20).get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["paths"]["/items"]["get"].is_object());
    assert!(body.to_string().contains("PageRange"), "{body}");
}
