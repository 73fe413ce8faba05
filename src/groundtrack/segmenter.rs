use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::types::EphemerisPoint;

/// Ephemeris points grouped by pass id. The grouping keeps an explicit
/// first-seen key order so that render order and color assignment never
/// depend on map iteration order.
#[derive(Debug, Default)]
pub struct PassGroups {
    groups: HashMap<u32, Vec<(f64, f64)>>,
    order: Vec<u32>,
}

impl PassGroups {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn coords(&self, pass_id: u32) -> Option<&[(f64, f64)]> {
        self.groups.get(&pass_id).map(|c| c.as_slice())
    }

    /// Iterate groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[(f64, f64)])> {
        self.order
            .iter()
            .map(|id| (*id, self.groups[id].as_slice()))
    }

    fn push(&mut self, pass_id: u32, coord: (f64, f64)) {
        match self.groups.entry(pass_id) {
            Entry::Vacant(entry) => {
                self.order.push(pass_id);
                entry.insert(vec![coord]);
            }
            Entry::Occupied(mut entry) => entry.get_mut().push(coord),
        }
    }
}

/// Group an ordered ephemeris stream into per-pass coordinate lists.
///
/// Single pass over the input; within each group the coordinates keep
/// their arrival order even when points of different passes interleave.
/// Input is trusted: no deduplication, no range checks.
pub fn segment(points: &[EphemerisPoint]) -> PassGroups {
    let mut groups = PassGroups::default();
    for point in points {
        groups.push(point.pass_id, (point.geodesic.lat, point.geodesic.lon));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groundtrack::types::Geodesic;

    fn point(pass_id: u32, lat: f64, lon: f64) -> EphemerisPoint {
        EphemerisPoint {
            pass_id,
            geodesic: Geodesic { lat, lon },
            timestamp: None,
        }
    }

    #[test]
    fn groups_interleaved_points_in_arrival_order() {
        let points = vec![
            point(1, 10.0, 170.0),
            point(2, 20.0, -170.0),
            point(1, 30.0, 175.0),
        ];
        let groups = segment(&points);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.coords(1).unwrap(), &[(10.0, 170.0), (30.0, 175.0)]);
        assert_eq!(groups.coords(2).unwrap(), &[(20.0, -170.0)]);
    }

    #[test]
    fn key_order_is_first_seen() {
        let points = vec![
            point(7, 0.0, 0.0),
            point(3, 1.0, 1.0),
            point(7, 2.0, 2.0),
            point(5, 3.0, 3.0),
        ];
        let groups = segment(&points);
        let order: Vec<u32> = groups.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![7, 3, 5]);
    }

    #[test]
    fn empty_input_yields_empty_grouping() {
        let groups = segment(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.iter().count(), 0);
    }

    #[test]
    fn grouping_is_deterministic() {
        let points: Vec<EphemerisPoint> = (0..50)
            .map(|i| point(i % 4, i as f64, (i as f64) - 25.0))
            .collect();
        let a: Vec<_> = segment(&points).iter().map(|(id, c)| (id, c.to_vec())).collect();
        let b: Vec<_> = segment(&points).iter().map(|(id, c)| (id, c.to_vec())).collect();
        assert_eq!(a, b);
    }
}
