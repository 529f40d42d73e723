use super::timing::TimingBreakdown;
use crate::engine::{SegmentationOutcome, SplitCounts};
use crate::types::ClusterResult;
use serde::Serialize;

/// Result produced by
/// [`TrajectoryClusterer::predict_with_diagnostics`](crate::TrajectoryClusterer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterReport {
    pub result: ClusterResult,
    pub trace: SegmentationTrace,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub samples: usize,
    pub invalid_samples: usize,
}

/// What the merge loop did to reach its fixed point.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationTrace {
    pub input: InputDescriptor,
    pub passes: usize,
    pub merges: usize,
    pub segments: usize,
    pub splits: SplitCounts,
    pub timings: TimingBreakdown,
}

impl SegmentationTrace {
    pub fn from_outcome(
        input: InputDescriptor,
        outcome: &SegmentationOutcome,
        timings: TimingBreakdown,
    ) -> Self {
        Self {
            input,
            passes: outcome.passes,
            merges: outcome.merges,
            segments: outcome.segments.len(),
            splits: outcome.splits,
            timings,
        }
    }
}
