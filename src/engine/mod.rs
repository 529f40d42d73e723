//! Segmentation engine assigning samples to trajectory segments.
//!
//! Overview
//! - Every sample starts as its own segment.
//! - Adjacent segments are merged when the [`predicate`] holds at their
//!   junction: distance, time gap, speed range and heading variance over a
//!   window of point pairs on both sides.
//! - The [`segmenter`] drives left-to-right passes until a fixed point; ties
//!   between simultaneously eligible boundaries resolve chronologically.
//! - [`chunked`] splits long inputs into chunks, segments them independently
//!   and stitches the results with one more fixed-point run.
//!
//! Samples carrying a non-finite field never merge with either neighbour, and
//! a zero or negative time delta always keeps its boundary, so the engine is
//! total over any finite input.

pub mod chunked;
pub mod params;
pub mod predicate;
pub mod segmenter;

pub use chunked::segment_chunked;
pub use params::SegmentationParams;
pub use predicate::{BoundaryVerdict, MergePredicate, SplitReason};
pub use segmenter::{segment, SegmentationOutcome, Segmenter, SplitCounts};
