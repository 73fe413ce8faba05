mod axes;
mod error;
mod feed;
mod ring;
mod source;

pub use axes::{frequency_axis, time_axis};
pub use error::SpectrumError;
pub use feed::SpectrumFeed;
pub use ring::SpectrogramWindow;
pub use source::{SliceSource, SyntheticSource};
