//! Heading statistics over the points on either side of a candidate boundary.
//!
//! A boundary between segment `A` (ending at `p`) and segment `B` (starting at
//! `q`) is judged by the spread of headings near the junction: the last
//! `window` point-pair azimuths of `A`, optionally the bridging azimuth
//! `p → q`, and the first `window` point-pair azimuths of `B`. Coincident pairs
//! have no azimuth and are skipped, so a side may contribute fewer headings
//! than requested, or none at all.
use crate::angle::{population_variance, unwrap_headings};
use crate::geometry::GeoMetrics;
use crate::types::{Sample, Segment};
use serde::{Deserialize, Serialize};

/// How the spread of a heading sequence is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingSpread {
    /// Population variance of the raw angles.
    Linear,
    /// Population variance after unwrapping across the 0°/360° (or ±180°) seam.
    #[default]
    Unwrapped,
}

/// Window configuration for [`boundary_variance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowOptions {
    /// Point pairs examined on each side (>= 1).
    pub window: usize,
    /// Include the azimuth from the last point of `A` to the first point of `B`.
    pub bridge_heading: bool,
    pub spread: HeadingSpread,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            window: 4,
            bridge_heading: false,
            spread: HeadingSpread::Unwrapped,
        }
    }
}

fn pair_headings(samples: &[Sample], first: usize, last: usize, metrics: &GeoMetrics) -> Vec<f64> {
    (first..last)
        .filter_map(|j| metrics.azimuth(&samples[j], &samples[j + 1]).ok())
        .collect()
}

/// Azimuths of the last `min(k, len - 1)` consecutive pairs of `segment`.
pub fn trailing_headings(
    samples: &[Sample],
    segment: Segment,
    k: usize,
    metrics: &GeoMetrics,
) -> Vec<f64> {
    let first = segment.end.saturating_sub(k).max(segment.start);
    pair_headings(samples, first, segment.end, metrics)
}

/// Azimuths of the first `min(k, len - 1)` consecutive pairs of `segment`.
pub fn leading_headings(
    samples: &[Sample],
    segment: Segment,
    k: usize,
    metrics: &GeoMetrics,
) -> Vec<f64> {
    let last = segment.start.saturating_add(k).min(segment.end);
    pair_headings(samples, segment.start, last, metrics)
}

/// Headings considered at the `a | b` boundary, in chronological order.
pub fn boundary_headings(
    samples: &[Sample],
    a: Segment,
    b: Segment,
    opts: &WindowOptions,
    metrics: &GeoMetrics,
) -> Vec<f64> {
    let mut headings = trailing_headings(samples, a, opts.window, metrics);
    if opts.bridge_heading {
        if let Ok(h) = metrics.azimuth(&samples[a.end], &samples[b.start]) {
            headings.push(h);
        }
    }
    headings.extend(leading_headings(samples, b, opts.window, metrics));
    headings
}

/// Heading variance at the `a | b` boundary (degrees²).
///
/// Returns `None` when fewer than two headings are available, in which case
/// the boundary cannot be rejected on heading grounds.
pub fn boundary_variance(
    samples: &[Sample],
    a: Segment,
    b: Segment,
    opts: &WindowOptions,
    metrics: &GeoMetrics,
) -> Option<f64> {
    let headings = boundary_headings(samples, a, b, opts, metrics);
    if headings.len() < 2 {
        return None;
    }
    match opts.spread {
        HeadingSpread::Linear => population_variance(&headings),
        HeadingSpread::Unwrapped => population_variance(&unwrap_headings(&headings)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EARTH_RADIUS_M;
    use approx::assert_relative_eq;

    const STEP: f64 = 10.0 / EARTH_RADIUS_M;

    /// Four points heading east along the equator, then three heading north.
    fn east_then_north() -> Vec<Sample> {
        let mut pts: Vec<Sample> = (0..4)
            .map(|i| Sample::new(0.0, i as f64 * STEP, 0.0, i as f64))
            .collect();
        let lon = 3.0 * STEP;
        for i in 1..=3 {
            pts.push(Sample::new(i as f64 * STEP, lon, 0.0, 3.0 + i as f64));
        }
        pts
    }

    #[test]
    fn trailing_takes_last_pairs() {
        let pts = east_then_north();
        let m = GeoMetrics::default();
        let seg = Segment { start: 0, end: 4 };
        let h = trailing_headings(&pts, seg, 2, &m);
        assert_eq!(h.len(), 2);
        assert_relative_eq!(h[0], 90.0, epsilon = 1e-9);
        assert_relative_eq!(h[1], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn short_segments_clip_the_window() {
        let pts = east_then_north();
        let m = GeoMetrics::default();
        assert!(trailing_headings(&pts, Segment::singleton(2), 4, &m).is_empty());
        assert!(leading_headings(&pts, Segment::singleton(2), 4, &m).is_empty());
        let lead = leading_headings(&pts, Segment { start: 3, end: 6 }, 10, &m);
        assert_eq!(lead.len(), 3);
    }

    #[test]
    fn variance_at_turn_depends_on_bridge() {
        let pts = east_then_north();
        let m = GeoMetrics::default();
        let opts = WindowOptions {
            window: 2,
            ..Default::default()
        };
        let a = Segment { start: 0, end: 3 };
        let b = Segment::singleton(4);
        let var = boundary_variance(&pts, a, b, &opts, &m).unwrap();
        assert_relative_eq!(var, 0.0, epsilon = 1e-9);

        let bridged = WindowOptions {
            bridge_heading: true,
            ..opts
        };
        let var = boundary_variance(&pts, a, b, &bridged, &m).unwrap();
        assert_relative_eq!(var, 1800.0, epsilon = 1e-6);
    }

    #[test]
    fn too_few_headings_is_compatible() {
        let pts = east_then_north();
        let m = GeoMetrics::default();
        let opts = WindowOptions::default();
        let var = boundary_variance(&pts, Segment::singleton(0), Segment::singleton(1), &opts, &m);
        assert_eq!(var, None);
    }

    #[test]
    fn coincident_pairs_contribute_nothing() {
        let pts = vec![
            Sample::new(0.0, 0.0, 0.0, 0.0),
            Sample::new(0.0, 0.0, 0.0, 1.0),
            Sample::new(0.0, STEP, 0.0, 2.0),
        ];
        let m = GeoMetrics::default();
        let h = trailing_headings(&pts, Segment { start: 0, end: 2 }, 4, &m);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn unwrapped_spread_ignores_the_north_seam() {
        // Headings of roughly 350° and 10° alternate around due north.
        let d = STEP;
        let pts = vec![
            Sample::new(0.0, 0.0, 0.0, 0.0),
            Sample::new(d, -0.17 * d, 0.0, 1.0),
            Sample::new(2.0 * d, 0.0, 0.0, 2.0),
            Sample::new(3.0 * d, -0.17 * d, 0.0, 3.0),
        ];
        let m = GeoMetrics::default();
        let a = Segment { start: 0, end: 2 };
        let b = Segment::singleton(3);
        let unwrapped = boundary_variance(&pts, a, b, &WindowOptions::default(), &m).unwrap();
        let linear = boundary_variance(
            &pts,
            a,
            b,
            &WindowOptions {
                spread: HeadingSpread::Linear,
                ..Default::default()
            },
            &m,
        )
        .unwrap();
        assert!(unwrapped < 200.0, "unwrapped variance {unwrapped}");
        assert!(linear > 10_000.0, "linear variance {linear}");
    }
}
