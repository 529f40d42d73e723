//! Façade holding the parameters and the fitted samples.
//!
//! Typical usage:
//! ```
//! use trajectory_clustering::{InputOptions, SegmentationParams, TrackTable, TrajectoryClusterer};
//!
//! let table = TrackTable::Rows(vec![
//!     vec![32.0000, 34.0, 0.0, 0.0],
//!     vec![32.0001, 34.0, 0.0, 1.0],
//!     vec![32.0002, 34.0, 0.0, 2.0],
//! ]);
//! let options = InputOptions { cast_to_radians: true, ..Default::default() };
//! let params = SegmentationParams::default().with_speed_range(0.0, 100.0);
//!
//! let mut clusterer = TrajectoryClusterer::new(params);
//! let labels = clusterer.fit_predict(&table, &options).unwrap();
//! assert_eq!(labels, vec![0, 0, 0]);
//! ```
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{ClusterReport, InputDescriptor, SegmentationTrace, TimingBreakdown};
use crate::engine::{segment_chunked, SegmentationParams, Segmenter};
use crate::error::ClusteringError;
use crate::table::{InputOptions, TrackTable};
use crate::types::{labels_from_segments, ClusterResult, Sample};
use log::debug;
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct TrajectoryClusterer {
    params: SegmentationParams,
    samples: Option<Vec<Sample>>,
}

impl TrajectoryClusterer {
    pub fn new(params: SegmentationParams) -> Self {
        Self {
            params,
            samples: None,
        }
    }

    pub fn params(&self) -> &SegmentationParams {
        &self.params
    }

    /// Fitted samples, if any.
    pub fn samples(&self) -> Option<&[Sample]> {
        self.samples.as_deref()
    }

    pub fn is_fitted(&self) -> bool {
        self.samples.is_some()
    }

    /// Validates `table` against `options` and stores the resulting samples.
    ///
    /// On error the previously fitted state is left untouched.
    pub fn fit(&mut self, table: &TrackTable, options: &InputOptions) -> Result<(), ClusteringError> {
        let samples = table.to_samples(options)?;
        self.fit_samples(samples)
    }

    /// Stores samples that are already in engine shape (radians, time-ordered).
    pub fn fit_samples(&mut self, samples: Vec<Sample>) -> Result<(), ClusteringError> {
        self.params.validate()?;
        debug!("TrajectoryClusterer::fit samples={}", samples.len());
        self.samples = Some(samples);
        Ok(())
    }

    /// Labels for the fitted samples, one id per sample in input order.
    pub fn predict(&self) -> Result<Vec<usize>, ClusteringError> {
        Ok(self.predict_result()?.labels)
    }

    /// Labels together with the segment list and latency.
    pub fn predict_result(&self) -> Result<ClusterResult, ClusteringError> {
        let samples = self.fitted()?;
        Ok(cluster_samples(samples, &self.params))
    }

    /// Labels with a trace of the merge loop.
    pub fn predict_with_diagnostics(&self) -> Result<ClusterReport, ClusteringError> {
        self.report(None)
    }

    /// Same as [`Self::predict_chunked`], with the trace of the stitched run.
    pub fn predict_chunked_with_diagnostics(
        &self,
        chunk_len: usize,
    ) -> Result<ClusterReport, ClusteringError> {
        self.report(Some(chunk_len))
    }

    fn report(&self, chunk_len: Option<usize>) -> Result<ClusterReport, ClusteringError> {
        let samples = self.fitted()?;
        let total = Instant::now();
        let mut timings = TimingBreakdown::default();

        let outcome = timings.time("segmentation", || match chunk_len {
            Some(chunk_len) => segment_chunked(samples, &self.params, chunk_len),
            None => Segmenter::new(samples, &self.params).run(),
        });
        let labels = timings.time("labeling", || {
            labels_from_segments(&outcome.segments, samples.len())
        });
        timings.total_ms = elapsed_ms(total);

        let input = InputDescriptor {
            samples: samples.len(),
            invalid_samples: samples.iter().filter(|s| !s.is_finite()).count(),
        };
        let trace = SegmentationTrace::from_outcome(input, &outcome, timings);
        let result = ClusterResult {
            labels,
            latency_ms: trace.timings.total_ms,
            segments: outcome.segments,
        };
        Ok(ClusterReport { result, trace })
    }

    /// Labels computed chunk by chunk and stitched; see [`segment_chunked`].
    pub fn predict_chunked(&self, chunk_len: usize) -> Result<ClusterResult, ClusteringError> {
        let samples = self.fitted()?;
        let start = Instant::now();
        let outcome = segment_chunked(samples, &self.params, chunk_len);
        Ok(ClusterResult {
            labels: labels_from_segments(&outcome.segments, samples.len()),
            segments: outcome.segments,
            latency_ms: elapsed_ms(start),
        })
    }

    pub fn fit_predict(
        &mut self,
        table: &TrackTable,
        options: &InputOptions,
    ) -> Result<Vec<usize>, ClusteringError> {
        self.fit(table, options)?;
        self.predict()
    }

    fn fitted(&self) -> Result<&[Sample], ClusteringError> {
        self.samples
            .as_deref()
            .ok_or(ClusteringError::UninitializedModel)
    }
}

/// Runs the segmentation engine and finalizes labels for one trajectory.
pub fn cluster_samples(samples: &[Sample], params: &SegmentationParams) -> ClusterResult {
    let start = Instant::now();
    let outcome = Segmenter::new(samples, params).run();
    let labels = labels_from_segments(&outcome.segments, samples.len());
    ClusterResult {
        labels,
        segments: outcome.segments,
        latency_ms: elapsed_ms(start),
    }
}

/// Clusters independent trajectories with shared parameters.
///
/// Tracks are processed on the rayon pool when the `parallel` feature is on.
pub fn cluster_many(
    tracks: &[Vec<Sample>],
    params: &SegmentationParams,
) -> Result<Vec<ClusterResult>, ClusteringError> {
    params.validate()?;
    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        tracks
            .par_iter()
            .map(|track| cluster_samples(track, params))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results = tracks
        .iter()
        .map(|track| cluster_samples(track, params))
        .collect();
    Ok(results)
}
