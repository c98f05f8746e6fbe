use crate::application::http::catalog::router::CatalogApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FerrisQuery API"
    ),
    nest(
        (path = "/items", api = CatalogApiDoc),
    )
)]
pub struct ApiDoc;
