//! Heading utilities used by the azimuth statistics. All angles are degrees.

/// Wraps an angle into the range (-180, 180].
#[inline]
pub fn wrap_signed_deg(angle: f64) -> f64 {
    let norm = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if norm <= -180.0 {
        norm + 360.0
    } else {
        norm
    }
}

/// Wraps an angle into the compass range [0, 360).
#[inline]
pub fn wrap_compass_deg(angle: f64) -> f64 {
    let norm = angle.rem_euclid(360.0);
    if norm >= 360.0 {
        0.0
    } else {
        norm
    }
}

/// Smallest signed rotation taking heading `from` onto heading `to`.
#[inline]
pub fn heading_difference(from: f64, to: f64) -> f64 {
    wrap_signed_deg(to - from)
}

/// Unwraps a heading sequence so that every value lies within 180° of its
/// predecessor. The first heading is kept as is.
pub fn unwrap_headings(headings: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(headings.len());
    let mut prev: Option<f64> = None;
    for &h in headings {
        let next = match prev {
            Some(p) => p + heading_difference(p, h),
            None => h,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Population variance; `None` for an empty slice.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some(sq / n)
}
