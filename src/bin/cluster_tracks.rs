use serde::Serialize;
use std::env;
use std::path::Path;
use trajectory_clustering::config::cluster;
use trajectory_clustering::io::{read_json_file, write_json_file};
use trajectory_clustering::{TrackTable, TrajectoryClusterer};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = cluster::load_config(Path::new(&config_path))?;

    let table: TrackTable = read_json_file(&config.input)?;
    let mut clusterer = TrajectoryClusterer::new(config.params.clone());
    clusterer
        .fit(&table, &config.input_options)
        .map_err(|e| format!("Failed to fit {}: {e}", config.input.display()))?;

    // Labels and report come from the same run so the two files agree.
    let report = match (&config.output.report_json, config.chunk_len) {
        (None, _) => None,
        (Some(_), Some(chunk_len)) => Some(clusterer.predict_chunked_with_diagnostics(chunk_len)),
        (Some(_), None) => Some(clusterer.predict_with_diagnostics()),
    }
    .transpose()
    .map_err(|e| e.to_string())?;
    let result = match (&report, config.chunk_len) {
        (Some(report), _) => Ok(report.result.clone()),
        (None, Some(chunk_len)) => clusterer.predict_chunked(chunk_len),
        (None, None) => clusterer.predict_result(),
    }
    .map_err(|e| e.to_string())?;

    let summary = LabelsOutput {
        samples: result.labels.len(),
        clusters: result.cluster_count(),
        latency_ms: result.latency_ms,
        labels: &result.labels,
    };
    write_json_file(&config.output.labels_json, &summary)?;
    println!(
        "Saved {} labels ({} clusters) to {}",
        summary.samples,
        summary.clusters,
        config.output.labels_json.display()
    );

    if let (Some(report_path), Some(report)) = (&config.output.report_json, &report) {
        write_json_file(report_path, report)?;
        println!(
            "Saved segmentation report ({} passes, {} merges) to {}",
            report.trace.passes,
            report.trace.merges,
            report_path.display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: cluster_tracks <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LabelsOutput<'a> {
    samples: usize,
    clusters: usize,
    latency_ms: f64,
    labels: &'a [usize],
}
