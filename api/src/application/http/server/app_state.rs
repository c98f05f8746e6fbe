use std::sync::Arc;

use ferrisquery_core::domain::query::services::QueryService;

use crate::{application::http::catalog::entities::Catalog, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub query_service: QueryService,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(args: Arc<Args>, query_service: QueryService, catalog: Catalog) -> Self {
        Self {
            args,
            query_service,
            catalog: Arc::new(catalog),
        }
    }
}
