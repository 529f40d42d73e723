//! Merge predicate evaluated at the junction of two adjacent segments.
//!
//! Checks run in a fixed order and the first failing one names the split:
//! invalid sample, non-positive time delta, distance, time gap, speed, heading
//! variance. Geometry errors never escape; they either force the boundary
//! (`NonMonotonicTime`) or drop a heading from the window (`DegenerateSegment`).
use crate::geometry::GeoMetrics;
use crate::types::{Sample, Segment};
use crate::window::{boundary_variance, WindowOptions};
use serde::Serialize;
use std::cmp::Ordering;

use super::params::SegmentationParams;

/// Why a boundary was kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SplitReason {
    InvalidSample,
    NonMonotonicTime,
    Distance,
    TimeGap,
    Speed,
    Heading,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryVerdict {
    Merge,
    Split(SplitReason),
}

impl BoundaryVerdict {
    #[inline]
    pub fn is_merge(&self) -> bool {
        matches!(self, BoundaryVerdict::Merge)
    }
}

/// Immutable view over the samples and thresholds for one run.
#[derive(Clone, Copy, Debug)]
pub struct MergePredicate<'a> {
    samples: &'a [Sample],
    params: &'a SegmentationParams,
    metrics: GeoMetrics,
    window: WindowOptions,
}

impl<'a> MergePredicate<'a> {
    pub fn new(samples: &'a [Sample], params: &'a SegmentationParams) -> Self {
        Self {
            samples,
            params,
            metrics: params.metrics(),
            window: params.window_options(),
        }
    }

    pub fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    /// Evaluates the boundary between `a` and the segment `b` that follows it.
    pub fn check(&self, a: Segment, b: Segment) -> BoundaryVerdict {
        let p = &self.samples[a.end];
        let q = &self.samples[b.start];
        if !p.is_finite() || !q.is_finite() {
            return BoundaryVerdict::Split(SplitReason::InvalidSample);
        }

        let time_gap = q.timestamp - p.timestamp;
        if time_gap <= 0.0 {
            return BoundaryVerdict::Split(SplitReason::NonMonotonicTime);
        }

        let dist = self.metrics.distance(p, q);
        if !within(dist, self.params.eps) {
            return BoundaryVerdict::Split(SplitReason::Distance);
        }

        if !within(time_gap, self.params.time_bound()) {
            return BoundaryVerdict::Split(SplitReason::TimeGap);
        }

        let speed = match self.metrics.speed(p, q) {
            Ok(v) => v,
            Err(_) => return BoundaryVerdict::Split(SplitReason::NonMonotonicTime),
        };
        if !within(self.params.min_speed, speed) || !within(speed, self.params.max_speed) {
            return BoundaryVerdict::Split(SplitReason::Speed);
        }

        if let Some(var) = boundary_variance(self.samples, a, b, &self.window, &self.metrics) {
            if !within(var, self.params.alpha) {
                return BoundaryVerdict::Split(SplitReason::Heading);
            }
        }

        BoundaryVerdict::Merge
    }
}

/// `value <= bound`; false when either side is NaN, so a NaN threshold keeps
/// the boundary.
#[inline]
fn within(value: f64, bound: f64) -> bool {
    matches!(value.partial_cmp(&bound), Some(Ordering::Less | Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EARTH_RADIUS_M;

    const STEP: f64 = 10.0 / EARTH_RADIUS_M;

    fn params() -> SegmentationParams {
        SegmentationParams::default()
            .with_speed_range(0.0, 100.0)
            .with_window(2)
    }

    fn east(i: usize, t: f64) -> Sample {
        Sample::new(0.0, i as f64 * STEP, 0.0, t)
    }

    #[test]
    fn adjacent_points_merge() {
        let samples = [east(0, 0.0), east(1, 1.0)];
        let p = params();
        let pred = MergePredicate::new(&samples, &p);
        assert!(pred.check(Segment::singleton(0), Segment::singleton(1)).is_merge());
    }

    #[test]
    fn reasons_follow_check_order() {
        let p = params().with_eps(50.0).with_time_eps(Some(5.0));
        let cases = [
            (east(1, f64::NAN), SplitReason::InvalidSample),
            (east(1, 0.0), SplitReason::NonMonotonicTime),
            (east(1, -3.0), SplitReason::NonMonotonicTime),
            (east(9, 1.0), SplitReason::Distance),
            (east(1, 10.0), SplitReason::TimeGap),
            (east(4, 0.2), SplitReason::Speed),
        ];
        for (next, reason) in cases {
            let samples = [east(0, 0.0), next];
            let pred = MergePredicate::new(&samples, &p);
            assert_eq!(
                pred.check(Segment::singleton(0), Segment::singleton(1)),
                BoundaryVerdict::Split(reason),
                "next sample {next:?}"
            );
        }
    }

    #[test]
    fn sharp_reversal_is_a_heading_split() {
        let samples = [
            east(0, 0.0),
            east(1, 1.0),
            east(2, 2.0),
            east(1, 3.0),
            east(0, 4.0),
        ];
        let p = params().with_alpha(100.0);
        let pred = MergePredicate::new(&samples, &p);
        let verdict = pred.check(Segment { start: 0, end: 2 }, Segment { start: 3, end: 4 });
        assert_eq!(verdict, BoundaryVerdict::Split(SplitReason::Heading));
    }

    #[test]
    fn nan_thresholds_keep_the_boundary() {
        let samples = [east(0, 0.0), east(1, 1.0), east(2, 2.0), east(1, 3.0)];
        let cases = [
            (params().with_eps(f64::NAN), SplitReason::Distance),
            (params().with_time_eps(Some(f64::NAN)), SplitReason::TimeGap),
            (params().with_speed_range(f64::NAN, 100.0), SplitReason::Speed),
            (params().with_speed_range(0.0, f64::NAN), SplitReason::Speed),
        ];
        for (p, reason) in cases {
            let pred = MergePredicate::new(&samples, &p);
            assert_eq!(
                pred.check(Segment::singleton(0), Segment::singleton(1)),
                BoundaryVerdict::Split(reason)
            );
        }

        let p = params().with_alpha(f64::NAN);
        let pred = MergePredicate::new(&samples, &p);
        assert_eq!(
            pred.check(Segment { start: 0, end: 2 }, Segment::singleton(3)),
            BoundaryVerdict::Split(SplitReason::Heading)
        );
    }

    #[test]
    fn slow_boundary_fails_min_speed() {
        let samples = [east(0, 0.0), east(1, 100.0)];
        let p = params().with_speed_range(1.0, 100.0);
        let pred = MergePredicate::new(&samples, &p);
        assert_eq!(
            pred.check(Segment::singleton(0), Segment::singleton(1)),
            BoundaryVerdict::Split(SplitReason::Speed)
        );
    }
}
