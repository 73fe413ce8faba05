use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpectrumError {
    #[error("spectrogram capacity must be at least 1")]
    ZeroCapacity,
    #[error("slice width must be at least 1")]
    ZeroWidth,
    #[error("slice width {got} does not match buffer width {expected}")]
    WidthMismatch { expected: usize, got: usize },
    #[error("spectrum feed already running")]
    AlreadyRunning,
}
