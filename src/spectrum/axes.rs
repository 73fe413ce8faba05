/// Frequency axis for the spectrum plots: `width` evenly spaced values
/// starting at `start_mhz`.
pub fn frequency_axis(width: usize, start_mhz: f64, step_mhz: f64) -> Vec<f64> {
    (0..width).map(|i| start_mhz + i as f64 * step_mhz).collect()
}

/// Time axis for the waterfall: `capacity` evenly spaced values from zero.
pub fn time_axis(capacity: usize, step_sec: f64) -> Vec<f64> {
    (0..capacity).map(|i| i as f64 * step_sec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_evenly_spaced() {
        let freq = frequency_axis(100, 100.0, 0.1);
        assert_eq!(freq.len(), 100);
        assert_eq!(freq[0], 100.0);
        assert!((freq[99] - 109.9).abs() < 1e-9);

        let time = time_axis(50, 0.1);
        assert_eq!(time.len(), 50);
        assert_eq!(time[0], 0.0);
        assert!((time[49] - 4.9).abs() < 1e-9);
    }

    #[test]
    fn zero_length_axes_are_empty() {
        assert!(frequency_axis(0, 100.0, 0.1).is_empty());
        assert!(time_axis(0, 0.1).is_empty());
    }
}
