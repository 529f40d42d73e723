//! Agglomerative driving loop over temporally adjacent segments.
//!
//! Every sample starts as a singleton segment. A pass walks the segments left
//! to right, pushing each one onto a stack of closed segments and then
//! re-testing the top boundary until it no longer merges. A merge therefore
//! re-examines the boundary with the preceding segment before the scan moves
//! on, since the merged segment's heading window has changed. Passes repeat
//! until one completes without a merge; each merge removes a boundary, so at
//! most `n - 1` merges happen and the loop terminates at a fixed point.
use super::params::SegmentationParams;
use super::predicate::{BoundaryVerdict, MergePredicate, SplitReason};
use crate::types::{Sample, Segment};
use log::{debug, warn};
use serde::Serialize;

/// Number of final boundaries kept for each reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitCounts {
    pub invalid_sample: usize,
    pub non_monotonic_time: usize,
    pub distance: usize,
    pub time_gap: usize,
    pub speed: usize,
    pub heading: usize,
}

impl SplitCounts {
    pub fn record(&mut self, reason: SplitReason) {
        match reason {
            SplitReason::InvalidSample => self.invalid_sample += 1,
            SplitReason::NonMonotonicTime => self.non_monotonic_time += 1,
            SplitReason::Distance => self.distance += 1,
            SplitReason::TimeGap => self.time_gap += 1,
            SplitReason::Speed => self.speed += 1,
            SplitReason::Heading => self.heading += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.invalid_sample
            + self.non_monotonic_time
            + self.distance
            + self.time_gap
            + self.speed
            + self.heading
    }
}

/// Result of driving the merge loop to its fixed point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentationOutcome {
    pub segments: Vec<Segment>,
    pub passes: usize,
    pub merges: usize,
    /// Split reasons observed on the final pass, one per remaining boundary.
    pub splits: SplitCounts,
}

pub struct Segmenter<'a> {
    predicate: MergePredicate<'a>,
}

impl<'a> Segmenter<'a> {
    pub fn new(samples: &'a [Sample], params: &'a SegmentationParams) -> Self {
        Self {
            predicate: MergePredicate::new(samples, params),
        }
    }

    pub fn samples(&self) -> &'a [Sample] {
        self.predicate.samples()
    }

    /// One singleton segment per sample.
    pub fn singletons(&self) -> Vec<Segment> {
        (0..self.samples().len()).map(Segment::singleton).collect()
    }

    /// Runs the merge loop starting from singletons.
    pub fn run(&self) -> SegmentationOutcome {
        self.warn_invalid_samples();
        self.run_from(self.singletons())
    }

    /// Logs how many samples carry a non-finite field and returns the count.
    pub fn warn_invalid_samples(&self) -> usize {
        let invalid = self.samples().iter().filter(|s| !s.is_finite()).count();
        if invalid > 0 {
            warn!(
                "Segmenter: {} of {} samples are not finite and force boundaries",
                invalid,
                self.samples().len()
            );
        }
        invalid
    }

    /// Runs the merge loop from an existing partition of the samples.
    ///
    /// `segments` must be ordered, adjacent and cover the index range they
    /// span; chunk stitching relies on this accepting any such partition.
    pub fn run_from(&self, segments: Vec<Segment>) -> SegmentationOutcome {
        debug!(
            "Segmenter::run_from start samples={} segments={}",
            self.samples().len(),
            segments.len()
        );
        let mut current = segments;
        let mut passes = 0usize;
        let mut merges = 0usize;
        let splits = loop {
            passes += 1;
            let (next, merged, splits) = self.pass(&current);
            current = next;
            merges += merged;
            if merged == 0 {
                break splits;
            }
        };
        debug!(
            "Segmenter::run_from done passes={} merges={} segments={}",
            passes,
            merges,
            current.len()
        );
        SegmentationOutcome {
            segments: current,
            passes,
            merges,
            splits,
        }
    }

    /// Checks the boundary between two adjacent segments.
    pub fn check_boundary(&self, a: Segment, b: Segment) -> BoundaryVerdict {
        self.predicate.check(a, b)
    }

    fn pass(&self, segments: &[Segment]) -> (Vec<Segment>, usize, SplitCounts) {
        let mut stack: Vec<Segment> = Vec::with_capacity(segments.len());
        let mut merged = 0usize;
        for &seg in segments {
            stack.push(seg);
            while stack.len() >= 2 {
                let b = stack[stack.len() - 1];
                let a = stack[stack.len() - 2];
                if !self.predicate.check(a, b).is_merge() {
                    break;
                }
                stack.pop();
                if let Some(top) = stack.last_mut() {
                    *top = a.merged_with(&b);
                }
                merged += 1;
            }
        }

        let mut splits = SplitCounts::default();
        if merged == 0 {
            for pair in stack.windows(2) {
                if let BoundaryVerdict::Split(reason) = self.predicate.check(pair[0], pair[1]) {
                    splits.record(reason);
                }
            }
        }
        (stack, merged, splits)
    }
}

/// Convenience wrapper running the full merge loop on `samples`.
pub fn segment(samples: &[Sample], params: &SegmentationParams) -> SegmentationOutcome {
    Segmenter::new(samples, params).run()
}
