use trajectory_clustering::geometry::EARTH_RADIUS_M;
use trajectory_clustering::{Sample, SegmentationParams, TrajectoryClusterer};

fn main() {
    // Demo: ten samples heading east, a 90° turn, then ten heading north,
    // 10 m and 1 s apart.
    let step = 10.0 / EARTH_RADIUS_M;
    let mut samples: Vec<Sample> = (0..10)
        .map(|i| Sample::new(0.0, i as f64 * step, 0.0, i as f64))
        .collect();
    let corner_lon = 9.0 * step;
    samples.extend((1..=10).map(|i| Sample::new(i as f64 * step, corner_lon, 0.0, 9.0 + i as f64)));

    let params = SegmentationParams::default()
        .with_speed_range(0.0, 50.0)
        .with_alpha(500.0)
        .with_window(3);
    let mut clusterer = TrajectoryClusterer::new(params);
    if let Err(err) = clusterer.fit_samples(samples) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    match clusterer.predict_result() {
        Ok(res) => println!(
            "clusters={} labels={:?} latency_ms={:.3}",
            res.cluster_count(),
            res.labels,
            res.latency_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
