use super::error::GroundTrackError;
use super::geo::shift_longitude;
use super::segmenter::PassGroups;
use super::types::RenderablePass;

/// Default palette, cycled over passes in first-seen order.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff",
];

/// Turn grouped passes into render-ready polylines: shift every longitude
/// past the configured breakpoint and assign each pass a palette color by
/// its position in the grouping order.
///
/// Produces exactly one `RenderablePass` per distinct pass id; the shift
/// never drops or reorders points.
pub fn adapt(
    groups: &PassGroups,
    breakpoint_deg: f64,
    palette: &[String],
) -> Result<Vec<RenderablePass>, GroundTrackError> {
    if palette.is_empty() {
        return Err(GroundTrackError::EmptyPalette);
    }

    let passes = groups
        .iter()
        .enumerate()
        .map(|(index, (pass_id, coords))| {
            let shifted: Vec<(f64, f64)> = coords
                .iter()
                .map(|&(lat, lon)| (lat, shift_longitude(lon, breakpoint_deg)))
                .collect();
            let point_count = shifted.len();
            RenderablePass {
                pass_id,
                coords: shifted,
                color: palette[index % palette.len()].clone(),
                point_count,
            }
        })
        .collect();

    Ok(passes)
}

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groundtrack::segmenter::segment;
    use crate::groundtrack::types::{EphemerisPoint, Geodesic};

    fn point(pass_id: u32, lat: f64, lon: f64) -> EphemerisPoint {
        EphemerisPoint {
            pass_id,
            geodesic: Geodesic { lat, lon },
            timestamp: None,
        }
    }

    #[test]
    fn shifts_coordinates_per_pass() {
        // Three points, two passes, breakpoint over Europe.
        let points = vec![
            point(1, 10.0, 170.0),
            point(2, 20.0, -170.0),
            point(1, 30.0, 175.0),
        ];
        let groups = segment(&points);
        let passes = adapt(&groups, 20.0, &default_palette()).unwrap();

        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].pass_id, 1);
        assert_eq!(passes[0].coords, vec![(10.0, -190.0), (30.0, -185.0)]);
        assert_eq!(passes[0].point_count, 2);
        assert_eq!(passes[1].pass_id, 2);
        assert_eq!(passes[1].coords, vec![(20.0, -170.0)]);
        assert_eq!(passes[1].point_count, 1);
    }

    #[test]
    fn palette_cycles_by_group_position() {
        let points: Vec<EphemerisPoint> =
            (0..8).map(|i| point(i, 0.0, 0.0)).collect();
        let groups = segment(&points);
        let palette = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let passes = adapt(&groups, 20.0, &palette).unwrap();

        let colors: Vec<&str> = passes.iter().map(|p| p.color.as_str()).collect();
        assert_eq!(colors, vec!["a", "b", "c", "a", "b", "c", "a", "b"]);
    }

    #[test]
    fn one_renderable_per_distinct_id_and_counts_preserved() {
        let points = vec![
            point(4, 1.0, 10.0),
            point(4, 2.0, 20.0),
            point(9, 3.0, 30.0),
            point(4, 4.0, 40.0),
        ];
        let groups = segment(&points);
        let passes = adapt(&groups, 20.0, &default_palette()).unwrap();
        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].point_count, 3);
        assert_eq!(passes[1].point_count, 1);
    }

    #[test]
    fn empty_grouping_yields_empty_list() {
        let groups = segment(&[]);
        let passes = adapt(&groups, 20.0, &default_palette()).unwrap();
        assert!(passes.is_empty());
    }

    #[test]
    fn empty_palette_is_rejected() {
        let groups = segment(&[point(1, 0.0, 0.0)]);
        assert!(matches!(
            adapt(&groups, 20.0, &[]),
            Err(GroundTrackError::EmptyPalette)
        ));
    }
}
