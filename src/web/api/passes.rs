use axum::{extract::State, Json};

use crate::groundtrack::PassSummarySet;
use crate::web::api::error::ApiResult;
use crate::web::server::AppState;

#[utoipa::path(
    get,
    path = "/api/passes",
    responses(
        (status = 200, description = "Pass summaries", body = PassSummarySet),
        (status = 500, description = "Dataset unavailable",
         body = crate::web::api::error::ErrorResponse)
    ),
    tag = "passes"
)]
pub async fn list_passes(State(state): State<AppState>) -> ApiResult<Json<PassSummarySet>> {
    // Read per request: a missing or corrupt file becomes a fetch error
    // on the table, which handles it as its error state.
    let set = PassSummarySet::from_file(&state.config.datasets.passes)?;
    Ok(Json(set))
}
