use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use pressroom_lineage::{DEFAULT_SEARCH_LIMIT, EntityType, resolver::UnknownEntityType};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/search", get(search_documents))
        .route("/:entity_type/:entity_id", get(get_timeline))
}

pub async fn search_documents(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

    match services.timeline.search(&params.q, limit).await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(e) => errors::lineage_error_to_response(e),
    }
}

pub async fn get_timeline(
    Extension(services): Extension<Arc<AppServices>>,
    Path((entity_type, entity_id)): Path<(String, String)>,
) -> axum::response::Response {
    let entity_type: EntityType = match entity_type.parse() {
        Ok(v) => v,
        Err(UnknownEntityType(bad)) => {
            // Indistinguishable from "no such document" at this boundary, so
            // 404 rather than a validation error; the message names the value.
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("unknown entity type: {bad}"),
            );
        }
    };

    // Same reasoning for malformed ids.
    let entity_id: Uuid = match entity_id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "document not found");
        }
    };

    match services.timeline.timeline(entity_type, entity_id).await {
        Ok(graph) => (StatusCode::OK, Json(graph)).into_response(),
        Err(e) => errors::lineage_error_to_response(e),
    }
}
