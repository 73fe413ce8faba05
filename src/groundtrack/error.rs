use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroundTrackError {
    #[error("ephemeris file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("ephemeris parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("color palette is empty")]
    EmptyPalette,
}
