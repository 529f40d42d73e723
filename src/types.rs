use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One geolocated observation. Latitude and longitude are in radians once the
/// sample reaches the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub timestamp: f64,
}

impl Sample {
    pub fn new(lat: f64, lon: f64, alt: f64, timestamp: f64) -> Self {
        Self {
            lat,
            lon,
            alt,
            timestamp,
        }
    }

    /// Builds a sample from a `[lat, lon, alt, timestamp]` row.
    pub fn from_row(row: [f64; 4]) -> Self {
        Self::new(row[0], row[1], row[2], row[3])
    }

    /// Same sample with latitude and longitude converted from degrees.
    pub fn to_radians(self) -> Self {
        Self {
            lat: self.lat.to_radians(),
            lon: self.lon.to_radians(),
            ..self
        }
    }

    /// True when every field is finite; other samples always sit on a boundary.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && self.alt.is_finite()
            && self.timestamp.is_finite()
    }

    #[inline]
    pub fn coincides_with(&self, other: &Sample) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }
}

/// Contiguous, inclusive run of sample indices forming one trajectory cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn singleton(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Segments always hold at least one sample.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Concatenation with the segment that immediately follows this one.
    pub fn merged_with(&self, next: &Segment) -> Segment {
        debug_assert_eq!(self.end + 1, next.start, "segments must be adjacent");
        Segment {
            start: self.start,
            end: next.end,
        }
    }
}

/// Output of one clustering run: one id per input sample, in input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResult {
    pub labels: Vec<usize>,
    pub segments: Vec<Segment>,
    pub latency_ms: f64,
}

impl ClusterResult {
    pub fn cluster_count(&self) -> usize {
        self.segments.len()
    }
}

/// Expands a partition of `[0, n)` into per-sample ids numbered by segment start.
pub fn labels_from_segments(segments: &[Segment], n: usize) -> Vec<usize> {
    let mut labels = vec![0usize; n];
    for (id, seg) in segments.iter().enumerate() {
        for idx in seg.indices() {
            labels[idx] = id;
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_segment_order() {
        let segments = [
            Segment { start: 0, end: 1 },
            Segment::singleton(2),
            Segment { start: 3, end: 5 },
        ];
        assert_eq!(labels_from_segments(&segments, 6), vec![0, 0, 1, 2, 2, 2]);
    }

    #[test]
    fn merging_concatenates_ranges() {
        let a = Segment { start: 2, end: 4 };
        let b = Segment { start: 5, end: 5 };
        let m = a.merged_with(&b);
        assert_eq!(m, Segment { start: 2, end: 5 });
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn nan_fields_make_sample_invalid() {
        assert!(Sample::new(0.1, 0.2, 0.0, 1.0).is_finite());
        assert!(!Sample::new(f64::NAN, 0.2, 0.0, 1.0).is_finite());
        assert!(!Sample::new(0.1, 0.2, 0.0, f64::INFINITY).is_finite());
    }
}
