use axum::{routing::get, Router};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::groundtrack::{adapt, segment, EphemerisDataset, GroundTrackError, RenderablePass};
use crate::spectrum::{SpectrumError, SpectrumFeed, SyntheticSource};

use super::api::passes as pass_handlers;
use super::api::spectrum as spectrum_handlers;
use super::api::trajectories as trajectory_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui::handlers as ui_handlers;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ephemeris dataset error: {0}")]
    Dataset(#[from] GroundTrackError),
    #[error("spectrum feed error: {0}")]
    Spectrum(#[from] SpectrumError),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dataset: Arc<EphemerisDataset>,
    pub trajectories: Arc<Vec<RenderablePass>>,
    pub feed: Arc<Mutex<SpectrumFeed>>,
}

pub async fn run_server(config: Config) -> Result<(), ServeError> {
    let bind_addr = config.web.bind.clone();

    // The ephemeris dataset is loaded once and immutable for the
    // session, so trajectories are computed here rather than per request.
    let dataset = EphemerisDataset::from_file(&config.datasets.ephemeris)?;
    dataset.validate()?;
    log::info!(
        "Loaded ephemeris for {} (NORAD {}): {} points",
        dataset.metadata.satellite_name,
        dataset.metadata.norad_id,
        dataset.ephemeris.len()
    );
    if dataset.ephemeris.is_empty() {
        log::warn!("Ephemeris dataset is empty; the map will show no trajectories");
    }

    let groups = segment(&dataset.ephemeris);
    let trajectories = adapt(&groups, config.map.breakpoint_deg, &config.map.palette)?;
    log::info!("Prepared {} trajectories", trajectories.len());

    let mut feed = SpectrumFeed::initialize(
        config.spectrum.capacity,
        config.spectrum.width,
        Box::new(SyntheticSource::new()),
    )?;
    feed.start(config.spectrum.cadence)?;
    let feed = Arc::new(Mutex::new(feed));

    let state = AppState {
        config: Arc::new(config),
        dataset: Arc::new(dataset),
        trajectories: Arc::new(trajectories),
        feed: feed.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // UI routes
        .route("/", get(ui_handlers::dashboard))
        // API endpoints
        .route(
            "/api/trajectories",
            get(trajectory_handlers::list_trajectories),
        )
        .route("/api/passes", get(pass_handlers::list_passes))
        .route("/api/spectrum", get(spectrum_handlers::get_spectrum))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the timer before exit; a leaked feed would keep appending
    // to a window nobody observes.
    feed.lock().await.stop().await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
