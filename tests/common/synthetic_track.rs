use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trajectory_clustering::geometry::EARTH_RADIUS_M;
use trajectory_clustering::Sample;

/// Angular size of a 10 m step on the sphere.
pub const STEP_10M: f64 = 10.0 / EARTH_RADIUS_M;

/// `n` samples heading east along the equator, 10 m and 1 s apart.
pub fn straight_east(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| Sample::new(0.0, i as f64 * STEP_10M, 0.0, i as f64))
        .collect()
}

/// `east` samples heading east, then `north` more heading north from the
/// last one, all 10 m and 1 s apart.
pub fn east_then_north(east: usize, north: usize) -> Vec<Sample> {
    let mut samples = straight_east(east);
    let Some(corner) = samples.last().copied() else {
        return samples;
    };
    for i in 1..=north {
        samples.push(Sample::new(
            corner.lat + i as f64 * STEP_10M,
            corner.lon,
            0.0,
            corner.timestamp + i as f64,
        ));
    }
    samples
}

/// Straight eastbound track whose step `i -> i + 1` is `gaps_m[i]` meters,
/// one second apart.
pub fn east_with_gaps(gaps_m: &[f64]) -> Vec<Sample> {
    let mut lon = 0.0;
    let mut samples = vec![Sample::new(0.0, 0.0, 0.0, 0.0)];
    for (i, gap) in gaps_m.iter().enumerate() {
        lon += gap / EARTH_RADIUS_M;
        samples.push(Sample::new(0.0, lon, 0.0, (i + 1) as f64));
    }
    samples
}

/// Straight eastbound track, 10 m apart, whose step `i -> i + 1` takes
/// `dts[i]` time units.
pub fn east_with_time_steps(dts: &[f64]) -> Vec<Sample> {
    let mut t = 0.0;
    let mut samples = vec![Sample::new(0.0, 0.0, 0.0, 0.0)];
    for (i, dt) in dts.iter().enumerate() {
        t += dt;
        samples.push(Sample::new(0.0, (i + 1) as f64 * STEP_10M, 0.0, t));
    }
    samples
}

/// Seeded random walk with occasional jumps, duplicates, stalls and NaNs.
pub fn noisy_walk(seed: u64, n: usize) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lat = 0.55;
    let mut lon = 0.61;
    let mut t = 0.0;
    let mut heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let roll: f64 = rng.gen_range(0.0..1.0);
        heading += rng.gen_range(-0.4..0.4);
        let step_m = if roll < 0.05 {
            rng.gen_range(300.0..2000.0)
        } else if roll < 0.10 {
            0.0
        } else {
            rng.gen_range(2.0..30.0)
        };
        lat += step_m / EARTH_RADIUS_M * heading.cos();
        lon += step_m / EARTH_RADIUS_M * heading.sin();
        if roll >= 0.15 || roll < 0.10 {
            t += rng.gen_range(0.5..3.0);
        }
        let mut s = Sample::new(lat, lon, rng.gen_range(0.0..50.0), t);
        if rng.gen_range(0.0..1.0) < 0.02 {
            s.lon = f64::NAN;
        }
        out.push(s);
    }
    out
}
