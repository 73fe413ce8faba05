mod adapter;
mod dataset;
mod error;
mod geo;
mod segmenter;
mod types;

pub use adapter::{adapt, default_palette};
pub use error::GroundTrackError;
pub use geo::shift_longitude;
pub use segmenter::{segment, PassGroups};
pub use types::{EphemerisDataset, PassSummary, PassSummarySet, RenderablePass};
