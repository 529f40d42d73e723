//! Parameter types configuring the segmentation engine.
//!
//! The six numeric knobs gate every candidate boundary:
//!
//! - `eps`: maximum distance in meters between the last point of one segment
//!   and the first point of the next.
//! - `alpha`: maximum heading variance (degrees²) over the boundary window.
//! - `time_eps`: maximum time gap across the boundary; `None` means unbounded.
//! - `min_speed` / `max_speed`: plausible speed range across the boundary, in
//!   meters per timestamp unit.
//! - `window`: point pairs examined on each side of the boundary.
//!
//! The remaining fields pick the geometric conventions. Every field carries a
//! default, so configuration files only list what they change.

use crate::error::ClusteringError;
use crate::geometry::{AzimuthModel, DistanceModel, GeoMetrics};
use crate::window::{HeadingSpread, WindowOptions};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationParams {
    pub eps: f64,
    pub alpha: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_eps: Option<f64>,
    pub max_speed: f64,
    pub min_speed: f64,
    pub window: usize,
    pub distance_model: DistanceModel,
    pub azimuth_model: AzimuthModel,
    pub heading_spread: HeadingSpread,
    /// Include the azimuth across the boundary itself in the heading window.
    pub bridge_heading: bool,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            eps: 200.0,
            alpha: 2500.0,
            time_eps: None,
            max_speed: 300.0,
            min_speed: 100.0,
            window: 4,
            distance_model: DistanceModel::Haversine,
            azimuth_model: AzimuthModel::Bearing,
            heading_spread: HeadingSpread::Unwrapped,
            bridge_heading: false,
        }
    }
}

impl SegmentationParams {
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_time_eps(mut self, time_eps: Option<f64>) -> Self {
        self.time_eps = time_eps;
        self
    }

    pub fn with_speed_range(mut self, min_speed: f64, max_speed: f64) -> Self {
        self.min_speed = min_speed;
        self.max_speed = max_speed;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_bridge_heading(mut self, bridge_heading: bool) -> Self {
        self.bridge_heading = bridge_heading;
        self
    }

    /// Effective time bound; unbounded maps to `+∞`.
    #[inline]
    pub fn time_bound(&self) -> f64 {
        self.time_eps.unwrap_or(f64::INFINITY)
    }

    pub fn metrics(&self) -> GeoMetrics {
        GeoMetrics::new(self.distance_model, self.azimuth_model)
    }

    pub fn window_options(&self) -> WindowOptions {
        WindowOptions {
            window: self.window,
            bridge_heading: self.bridge_heading,
            spread: self.heading_spread,
        }
    }

    /// Rejects thresholds the merge predicate cannot interpret.
    pub fn validate(&self) -> Result<(), ClusteringError> {
        non_negative("eps", self.eps)?;
        non_negative("alpha", self.alpha)?;
        non_negative("min_speed", self.min_speed)?;
        non_negative("max_speed", self.max_speed)?;
        if let Some(t) = self.time_eps {
            non_negative("time_eps", t)?;
        }
        if self.min_speed > self.max_speed {
            return Err(ClusteringError::param(
                "min_speed",
                format!(
                    "must not exceed max_speed ({} > {})",
                    self.min_speed, self.max_speed
                ),
            ));
        }
        if self.window == 0 {
            return Err(ClusteringError::param("window", "must be at least 1"));
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ClusteringError> {
    if value.is_nan() || value < 0.0 {
        return Err(ClusteringError::param(
            name,
            format!("expected a non-negative number, got {value}"),
        ));
    }
    Ok(())
}
