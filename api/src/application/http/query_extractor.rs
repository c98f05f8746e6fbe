use axum::{extract::FromRequestParts, http::request::Parts};
use ferrisquery_core::domain::query::value_objects::ListQueryInput;
use tracing::debug;

use super::server::api_entities::api_error::ApiError;

/// Extractor for the `filter`, `orderBy`, `pageSize` and `offset` query parameters
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ListQueryExtractor(input): ListQueryExtractor,
/// ) -> Result<Response<Items>, ApiError> {
///     // Compile input.filter and input.order_by with a QueryService
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListQueryExtractor(pub ListQueryInput);

impl<S> FromRequestParts<S> for ListQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let input = serde_urlencoded::from_str::<ListQueryInput>(query_string).map_err(|e| {
            debug!("Invalid list query '{}': {}", query_string, e);
            ApiError::BadRequest(format!("Invalid query parameters: {}", e))
        })?;

        Ok(ListQueryExtractor(input))
    }
}
