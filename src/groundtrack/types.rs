use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Geodetic coordinate of a single ephemeris sample.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
pub struct Geodesic {
    pub lat: f64,
    pub lon: f64,
}

/// One sample of the ephemeris stream. Points arrive ordered; the order
/// within a pass is significant and must survive grouping.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EphemerisPoint {
    pub pass_id: u32,
    pub geodesic: Geodesic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CalculationParameters {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EphemerisMetadata {
    pub satellite_name: String,
    pub norad_id: u32,
    pub calculation_parameters: CalculationParameters,
}

/// The ephemeris dataset as loaded from disk. Immutable for the session.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EphemerisDataset {
    pub metadata: EphemerisMetadata,
    pub ephemeris: Vec<EphemerisPoint>,
}

/// Summary of one predicted pass, supplied by an external tool. Served to
/// the passes table untransformed; its ids may or may not line up with the
/// ephemeris pass ids.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PassSummary {
    pub pass_id: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_sec: f64,
    pub max_elevation: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PassSummarySet {
    pub passes: Vec<PassSummary>,
}

/// A pass ready for the map layer: longitudes already shifted, color
/// assigned, point count fixed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RenderablePass {
    pub pass_id: u32,
    /// (lat, shifted lon) pairs in arrival order.
    #[schema(value_type = Vec<Vec<f64>>)]
    pub coords: Vec<(f64, f64)>,
    pub color: String,
    pub point_count: usize,
}
