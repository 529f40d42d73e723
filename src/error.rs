//! Error taxonomy shared by the geometry primitives and the clustering façade.
//!
//! Geometry errors are recoverable: the segmentation engine turns each of them
//! into a forced boundary (or a skipped heading) and never surfaces them from
//! `predict`. Clustering errors are contract violations caught at `fit` or
//! `predict` time and abort only the offending call.

use thiserror::Error;

/// Failures of a single pairwise computation between two samples.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// Both samples share the same latitude and longitude; no bearing exists.
    #[error("coincident samples at lat={lat}, lon={lon} have no azimuth")]
    DegenerateSegment { lat: f64, lon: f64 },
    /// The time delta between the samples is zero, negative or not finite.
    #[error("non-monotonic time delta ({dt}) between samples")]
    NonMonotonicTime { dt: f64 },
}

/// Failures of the façade contract.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ClusteringError {
    #[error("invalid input shape: {reason}")]
    InvalidInputShape { reason: String },
    #[error("column {column:?} is not present in the input table")]
    MissingColumn { column: String },
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameters { name: &'static str, reason: String },
    #[error("predict called before a successful fit")]
    UninitializedModel,
}

impl ClusteringError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        ClusteringError::InvalidInputShape {
            reason: reason.into(),
        }
    }

    pub(crate) fn param(name: &'static str, reason: impl Into<String>) -> Self {
        ClusteringError::InvalidParameters {
            name,
            reason: reason.into(),
        }
    }
}
