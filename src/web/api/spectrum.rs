use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::spectrum::{frequency_axis, time_axis};
use crate::web::server::AppState;

/// Atomic snapshot of the waterfall: the full window oldest-first, the
/// newest slice for the line plot, and the static axes.
#[derive(Debug, Serialize, ToSchema)]
pub struct SpectrumSnapshot {
    pub latest: Vec<f64>,
    pub window: Vec<Vec<f64>>,
    pub frequency_mhz: Vec<f64>,
    pub time_sec: Vec<f64>,
    pub capacity: usize,
    pub width: usize,
}

#[utoipa::path(
    get,
    path = "/api/spectrum",
    responses(
        (status = 200, description = "Current spectrum window", body = SpectrumSnapshot)
    ),
    tag = "spectrum"
)]
pub async fn get_spectrum(State(state): State<AppState>) -> Json<SpectrumSnapshot> {
    let window = {
        let feed = state.feed.lock().await;
        feed.snapshot()
    };

    let spectrum = &state.config.spectrum;
    Json(SpectrumSnapshot {
        latest: window.latest().to_vec(),
        window: window.to_rows(),
        frequency_mhz: frequency_axis(
            window.width(),
            spectrum.frequency_start_mhz,
            spectrum.frequency_step_mhz,
        ),
        time_sec: time_axis(window.capacity(), spectrum.time_step_sec),
        capacity: window.capacity(),
        width: window.width(),
    })
}
