/// Shift a longitude so the map's rendering discontinuity falls at
/// `breakpoint_deg` instead of the antimeridian. A polyline crossing ±180°
/// otherwise draws a spurious segment across the whole map.
///
/// For `lon` in [-180, 180] the result differs from the input by exactly
/// 0 or 360 and, for breakpoints in [0, 180], lies in the contiguous range
/// `(breakpoint_deg - 540, breakpoint_deg - 180]`. Must not be applied
/// twice to the same value.
pub fn shift_longitude(lon: f64, breakpoint_deg: f64) -> f64 {
    if lon > breakpoint_deg - 180.0 {
        lon - 360.0
    } else {
        lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_discontinuity_to_breakpoint() {
        // Breakpoint over Europe: everything east of -160 wraps west.
        assert_eq!(shift_longitude(170.0, 20.0), -190.0);
        assert_eq!(shift_longitude(175.0, 20.0), -185.0);
        assert_eq!(shift_longitude(-170.0, 20.0), -170.0);
        assert_eq!(shift_longitude(-160.0, 20.0), -160.0);
    }

    #[test]
    fn output_range_and_delta() {
        // The shifted coordinates occupy one contiguous 360-degree span,
        // which is what keeps a wrapped polyline free of long segments.
        for bp in [0.0, 20.0, 150.0, 180.0] {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let shifted = shift_longitude(lon, bp);
                assert!(
                    shifted > bp - 540.0 && shifted <= bp - 180.0,
                    "lon={lon} bp={bp}"
                );
                let delta = lon - shifted;
                assert!(delta == 0.0 || delta == 360.0, "lon={lon} bp={bp}");
                lon += 7.5;
            }
        }
    }

    #[test]
    fn shift_is_identity_or_full_wrap_for_any_breakpoint() {
        for bp in [-150.0, -20.0, 45.0] {
            for lon in [-180.0, -100.0, 0.0, 100.0, 180.0] {
                let delta = lon - shift_longitude(lon, bp);
                assert!(delta == 0.0 || delta == 360.0);
            }
        }
    }
}
