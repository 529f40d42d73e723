//! Serializable run report returned alongside the labels.
//!
//! `ClusterReport` bundles the compact [`ClusterResult`](crate::ClusterResult)
//! with a `SegmentationTrace` describing the input, how many passes and merges
//! the loop needed, why each remaining boundary was kept, and stage timings.

pub mod timing;
pub mod trace;

pub use timing::{StageTiming, TimingBreakdown};
pub use trace::{ClusterReport, InputDescriptor, SegmentationTrace};
