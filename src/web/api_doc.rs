use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::spectrum::SpectrumSnapshot;
use super::api::trajectories::{TrajectoriesResponse, Trajectory};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::trajectories::list_trajectories,
        super::api::passes::list_passes,
        super::api::spectrum::get_spectrum,
    ),
    components(
        schemas(
            TrajectoriesResponse,
            Trajectory,
            SpectrumSnapshot,
            ErrorResponse,
            crate::groundtrack::PassSummary,
            crate::groundtrack::PassSummarySet,
        )
    ),
    info(
        title = "Sat-O-Scope Dashboard API",
        description = "Ground tracks, pass summaries, and live spectrum for the dashboard",
        version = "0.1.0"
    ),
    tags(
        (name = "trajectories", description = "Render-ready ground tracks"),
        (name = "passes", description = "Pass summary table data"),
        (name = "spectrum", description = "Waterfall window and latest slice")
    )
)]
pub struct ApiDoc;
