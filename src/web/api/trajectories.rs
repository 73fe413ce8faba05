use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::groundtrack::RenderablePass;
use crate::web::server::AppState;

/// One pass as the map layer consumes it: shifted coordinates, color,
/// and pre-built tooltip text.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Trajectory {
    pub pass_id: u32,
    #[schema(value_type = Vec<Vec<f64>>)]
    pub coords: Vec<(f64, f64)>,
    pub color: String,
    pub point_count: usize,
    pub tooltip: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrajectoriesResponse {
    pub satellite_name: String,
    pub norad_id: u32,
    pub breakpoint_deg: f64,
    pub trajectories: Vec<Trajectory>,
}

pub fn tooltip(pass: &RenderablePass, satellite_name: &str, norad_id: u32) -> String {
    format!(
        "Pass #{} | Points: {} | Satellite: {} | NORAD ID: {}",
        pass.pass_id, pass.point_count, satellite_name, norad_id
    )
}

#[utoipa::path(
    get,
    path = "/api/trajectories",
    responses(
        (status = 200, description = "Render-ready ground tracks", body = TrajectoriesResponse)
    ),
    tag = "trajectories"
)]
pub async fn list_trajectories(State(state): State<AppState>) -> Json<TrajectoriesResponse> {
    let metadata = &state.dataset.metadata;
    let trajectories = state
        .trajectories
        .iter()
        .map(|pass| Trajectory {
            pass_id: pass.pass_id,
            coords: pass.coords.clone(),
            color: pass.color.clone(),
            point_count: pass.point_count,
            tooltip: tooltip(pass, &metadata.satellite_name, metadata.norad_id),
        })
        .collect();

    Json(TrajectoriesResponse {
        satellite_name: metadata.satellite_name.clone(),
        norad_id: metadata.norad_id,
        breakpoint_deg: state.config.map.breakpoint_deg,
        trajectories,
    })
}
