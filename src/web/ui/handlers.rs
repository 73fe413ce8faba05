use axum::{extract::State, response::IntoResponse};

use crate::web::server::AppState;

use super::templates::DashboardTemplate;

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let metadata = &state.dataset.metadata;
    let params = &metadata.calculation_parameters;
    DashboardTemplate {
        satellite_name: metadata.satellite_name.clone(),
        norad_id: metadata.norad_id,
        period_start: params.start.format("%Y-%m-%d %H:%M UTC").to_string(),
        period_end: params.end.format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}
