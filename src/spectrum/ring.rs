use std::collections::VecDeque;

use super::error::SpectrumError;

/// Fixed-depth rolling window of spectrum slices, the backing store for
/// the waterfall display. Always holds exactly `capacity` slices of
/// `width` bins each; `append` evicts the oldest slice as it inserts, so
/// readers never observe a partially updated window.
#[derive(Debug, Clone)]
pub struct SpectrogramWindow {
    slices: VecDeque<Vec<f64>>,
    capacity: usize,
    width: usize,
}

impl SpectrogramWindow {
    /// Build a window pre-filled with `capacity` slices drawn from `fill`.
    /// Zero capacity or width is a construction failure, as is a fill
    /// slice of the wrong width.
    pub fn initialize(
        capacity: usize,
        width: usize,
        mut fill: impl FnMut() -> Vec<f64>,
    ) -> Result<Self, SpectrumError> {
        if capacity == 0 {
            return Err(SpectrumError::ZeroCapacity);
        }
        if width == 0 {
            return Err(SpectrumError::ZeroWidth);
        }

        let mut window = Self {
            slices: VecDeque::with_capacity(capacity + 1),
            capacity,
            width,
        };
        for _ in 0..capacity {
            window.append(fill())?;
        }
        Ok(window)
    }

    /// Push the newest slice and evict the oldest. Strict FIFO; the
    /// window length never deviates from `capacity` once initialized.
    pub fn append(&mut self, slice: Vec<f64>) -> Result<(), SpectrumError> {
        if slice.len() != self.width {
            return Err(SpectrumError::WidthMismatch {
                expected: self.width,
                got: slice.len(),
            });
        }
        self.slices.push_back(slice);
        if self.slices.len() > self.capacity {
            self.slices.pop_front();
        }
        Ok(())
    }

    /// The most recently appended slice.
    pub fn latest(&self) -> &[f64] {
        // Non-empty by construction.
        self.slices.back().map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// All slices, oldest first.
    pub fn window(&self) -> impl Iterator<Item = &[f64]> {
        self.slices.iter().map(|s| s.as_slice())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.slices.iter().cloned().collect()
    }
}
