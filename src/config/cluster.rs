use crate::engine::SegmentationParams;
use crate::table::InputOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ClusterToolConfig {
    /// JSON track table (rows, columns or records).
    pub input: PathBuf,
    #[serde(default)]
    pub input_options: InputOptions,
    #[serde(default)]
    pub params: SegmentationParams,
    /// Split the input into chunks of this many samples before stitching.
    #[serde(default)]
    pub chunk_len: Option<usize>,
    pub output: ClusterOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ClusterOutputConfig {
    pub labels_json: PathBuf,
    /// Full report with the segmentation trace; skipped when absent.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ClusterToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<ClusterToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
