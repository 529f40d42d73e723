//! Pairwise metrics between two samples: distance, azimuth and speed.
//!
//! Latitude and longitude are expected in radians. Distances are meters and
//! azimuths degrees; speed is meters per timestamp unit.
//!
//! - [`DistanceModel::Haversine`] measures the great-circle distance on a
//!   sphere of radius [`EARTH_RADIUS_M`] and ignores altitude.
//! - [`DistanceModel::Ecef`] places both samples at radius `R + alt` and
//!   measures the straight chord between them, so climbs count.
//! - [`AzimuthModel::Bearing`] is the initial great-circle bearing, clockwise
//!   from north in `[0, 360)`.
//! - [`AzimuthModel::Planar`] treats `(lon, lat)` as planar `(x, y)` and
//!   returns `atan2(Δlat, Δlon)` in `(-180, 180]`.
use crate::angle::wrap_compass_deg;
use crate::error::GeometryError;
use crate::types::Sample;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceModel {
    #[default]
    Haversine,
    Ecef,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AzimuthModel {
    #[default]
    Bearing,
    Planar,
}

/// Distance and azimuth conventions bundled for the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeoMetrics {
    pub distance: DistanceModel,
    pub azimuth: AzimuthModel,
}

impl GeoMetrics {
    pub fn new(distance: DistanceModel, azimuth: AzimuthModel) -> Self {
        Self { distance, azimuth }
    }

    #[inline]
    pub fn distance(&self, a: &Sample, b: &Sample) -> f64 {
        match self.distance {
            DistanceModel::Haversine => haversine_distance(a, b),
            DistanceModel::Ecef => ecef_distance(a, b),
        }
    }

    #[inline]
    pub fn azimuth(&self, a: &Sample, b: &Sample) -> Result<f64, GeometryError> {
        if a.coincides_with(b) {
            return Err(GeometryError::DegenerateSegment {
                lat: a.lat,
                lon: a.lon,
            });
        }
        Ok(match self.azimuth {
            AzimuthModel::Bearing => initial_bearing(a, b),
            AzimuthModel::Planar => planar_angle(a, b),
        })
    }

    #[inline]
    pub fn speed(&self, a: &Sample, b: &Sample) -> Result<f64, GeometryError> {
        speed_with_distance(a, b, self.distance(a, b))
    }
}

/// Great-circle distance in meters.
pub fn haversine_distance(a: &Sample, b: &Sample) -> f64 {
    let dlat = b.lat - a.lat;
    let dlon = b.lon - a.lon;
    let h = (dlat / 2.0).sin().powi(2) + a.lat.cos() * b.lat.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_M * c
}

fn to_ecef(s: &Sample) -> Vector3<f64> {
    let r = EARTH_RADIUS_M + s.alt;
    Vector3::new(
        r * s.lat.cos() * s.lon.cos(),
        r * s.lat.cos() * s.lon.sin(),
        r * s.lat.sin(),
    )
}

/// Chord distance in meters between the samples lifted to their altitudes.
pub fn ecef_distance(a: &Sample, b: &Sample) -> f64 {
    (to_ecef(b) - to_ecef(a)).norm()
}

fn initial_bearing(a: &Sample, b: &Sample) -> f64 {
    let dlon = b.lon - a.lon;
    let y = dlon.sin() * b.lat.cos();
    let x = a.lat.cos() * b.lat.sin() - a.lat.sin() * b.lat.cos() * dlon.cos();
    wrap_compass_deg(y.atan2(x).to_degrees())
}

fn planar_angle(a: &Sample, b: &Sample) -> f64 {
    (b.lat - a.lat).atan2(b.lon - a.lon).to_degrees()
}

/// Default distance (haversine) between two samples.
pub fn distance(a: &Sample, b: &Sample) -> f64 {
    GeoMetrics::default().distance(a, b)
}

/// Default azimuth (compass bearing, degrees) from `a` to `b`.
pub fn azimuth(a: &Sample, b: &Sample) -> Result<f64, GeometryError> {
    GeoMetrics::default().azimuth(a, b)
}

/// Default speed (haversine meters per timestamp unit) between two samples.
pub fn speed(a: &Sample, b: &Sample) -> Result<f64, GeometryError> {
    GeoMetrics::default().speed(a, b)
}

fn speed_with_distance(a: &Sample, b: &Sample, dist: f64) -> Result<f64, GeometryError> {
    let dt = b.timestamp - a.timestamp;
    if dt == 0.0 || !dt.is_finite() {
        return Err(GeometryError::NonMonotonicTime { dt });
    }
    Ok(dist / dt.abs())
}
