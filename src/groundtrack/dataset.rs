use std::path::Path;

use super::error::GroundTrackError;
use super::types::{EphemerisDataset, PassSummarySet};

impl EphemerisDataset {
    /// Load and parse an ephemeris dataset. The dataset is loaded once at
    /// startup and stays immutable for the session.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GroundTrackError> {
        let content = std::fs::read_to_string(path)?;
        let dataset: EphemerisDataset = serde_json::from_str(&content)?;
        Ok(dataset)
    }

    /// Range-check every geodetic sample. The render path trusts the
    /// dataset; this runs at the trust boundary (`validate` subcommand and
    /// startup load).
    pub fn validate(&self) -> Result<(), GroundTrackError> {
        for point in &self.ephemeris {
            let geo = &point.geodesic;
            if !(-90.0..=90.0).contains(&geo.lat) {
                return Err(GroundTrackError::LatitudeOutOfRange(geo.lat));
            }
            if !(-180.0..=180.0).contains(&geo.lon) {
                return Err(GroundTrackError::LongitudeOutOfRange(geo.lon));
            }
        }
        Ok(())
    }
}

impl PassSummarySet {
    /// Read the pass-summary dataset. Called per request so that a broken
    /// or missing file surfaces as a fetch error on the table, not as a
    /// stale cache.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GroundTrackError> {
        let content = std::fs::read_to_string(path)?;
        let set: PassSummarySet = serde_json::from_str(&content)?;
        Ok(set)
    }
}
