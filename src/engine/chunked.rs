//! Chunked segmentation: independent chunks are segmented on their own and
//! then stitched by running the merge loop once more over the concatenated
//! result, which re-tests every chunk boundary until a fixed point.
//!
//! With the `parallel` feature the chunks run on the rayon pool.
use super::params::SegmentationParams;
use super::segmenter::{SegmentationOutcome, Segmenter};
use crate::types::{Sample, Segment};
use log::debug;

/// Segments `samples` in chunks of `chunk_len` samples, then stitches.
///
/// `chunk_len == 0` or a chunk at least as long as the input falls back to a
/// single sequential run.
pub fn segment_chunked(
    samples: &[Sample],
    params: &SegmentationParams,
    chunk_len: usize,
) -> SegmentationOutcome {
    let segmenter = Segmenter::new(samples, params);
    if chunk_len == 0 || chunk_len >= samples.len() {
        return segmenter.run();
    }

    segmenter.warn_invalid_samples();
    let ranges: Vec<(usize, usize)> = (0..samples.len())
        .step_by(chunk_len)
        .map(|start| (start, (start + chunk_len).min(samples.len())))
        .collect();
    debug!(
        "segment_chunked samples={} chunks={} chunk_len={}",
        samples.len(),
        ranges.len(),
        chunk_len
    );

    let run_chunk = |&(start, end): &(usize, usize)| {
        let seeds: Vec<Segment> = (start..end).map(Segment::singleton).collect();
        segmenter.run_from(seeds)
    };

    #[cfg(feature = "parallel")]
    let chunks: Vec<SegmentationOutcome> = {
        use rayon::prelude::*;
        ranges.par_iter().map(run_chunk).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let chunks: Vec<SegmentationOutcome> = ranges.iter().map(run_chunk).collect();

    let chunk_merges: usize = chunks.iter().map(|c| c.merges).sum();
    let stitched: Vec<Segment> = chunks.into_iter().flat_map(|c| c.segments).collect();
    let mut outcome = segmenter.run_from(stitched);
    debug!(
        "segment_chunked stitched merges={} (chunks {})",
        outcome.merges, chunk_merges
    );
    outcome.merges += chunk_merges;
    outcome
}
