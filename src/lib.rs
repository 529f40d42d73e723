#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod clusterer;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod table;
pub mod types;

// Building blocks, public for tools and tests.
pub mod angle;
pub mod config;
pub mod geometry;
pub mod io;
pub mod window;

// --- High-level re-exports -------------------------------------------------

pub use crate::clusterer::{cluster_many, cluster_samples, TrajectoryClusterer};
pub use crate::engine::{segment, segment_chunked, SegmentationParams, Segmenter};
pub use crate::error::{ClusteringError, GeometryError};
pub use crate::table::{ColumnMapping, InputOptions, TrackTable};
pub use crate::types::{labels_from_segments, ClusterResult, Sample, Segment};

pub use crate::diagnostics::{ClusterReport, SegmentationTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use trajectory_clustering::prelude::*;
///
/// let samples = vec![
///     Sample::new(0.0, 0.0, 0.0, 0.0),
///     Sample::new(0.0, 0.0, 0.0, 0.0),
/// ];
/// let mut clusterer = TrajectoryClusterer::new(SegmentationParams::default());
/// clusterer.fit_samples(samples).unwrap();
/// assert_eq!(clusterer.predict().unwrap(), vec![0, 1]);
/// ```
pub mod prelude {
    pub use crate::{Sample, SegmentationParams, TrajectoryClusterer};
}
