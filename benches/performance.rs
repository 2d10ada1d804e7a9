//! Performance benchmarks for track-tracer
//!
//! Run with: cargo bench
//!
//! Covers the three call paths a tracing session exercises per operator
//! action: projection, next-line choice, and reconciliation.

use criterion::{Criterion, criterion_group, criterion_main};
use geo::{Coord, Geometry, LineString, Point, coord};
use track_tracer::{Trace, choose_next_line, process_next_line, project};

/// Generate a meandering line with the specified number of vertices.
fn generate_line(num_points: usize, base_lon: f64, base_lat: f64) -> LineString<f64> {
    let coords: Vec<Coord<f64>> = (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64;
            coord! {
                x: base_lon + t * 0.1 + (t * 30.0).cos() * 0.001,
                y: base_lat + t * 0.1 + (t * 50.0).sin() * 0.001,
            }
        })
        .collect();
    LineString::new(coords)
}

/// Generate candidate features fanning out of a junction point.
fn generate_features(num_features: usize, junction: Point<f64>) -> Vec<Geometry<f64>> {
    (0..num_features)
        .map(|i| {
            let heading = (i as f64 / num_features as f64) * std::f64::consts::TAU;
            let coords: Vec<Coord<f64>> = (0..20)
                .map(|j| {
                    let reach = j as f64 * 0.005;
                    coord! {
                        x: junction.x() + heading.sin() * reach,
                        y: junction.y() + heading.cos() * reach,
                    }
                })
                .collect();
            Geometry::LineString(LineString::new(coords))
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    let line = generate_line(10_000, -0.1, 51.5);
    let query = Point::new(-0.05, 51.55);
    group.bench_function("project_10k_vertices", |b| {
        b.iter(|| project(&line, query));
    });

    group.finish();
}

fn bench_chooser(c: &mut Criterion) {
    let mut group = c.benchmark_group("chooser");

    let junction = Point::new(-0.1, 51.5);
    let features = generate_features(100, junction);
    let trace = Trace::new(vec![
        coord! { x: -0.1, y: 51.49 },
        coord! { x: -0.1, y: 51.499 },
    ])
    .unwrap();

    group.bench_function("choose_100_features", |b| {
        b.iter(|| choose_next_line(junction, &trace, &features, 45.0));
    });

    group.finish();
}

fn bench_reconciler(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconciler");
    group.sample_size(20);

    let trace_line = generate_line(5_000, -0.1, 51.5);
    let trace = Trace::new(trace_line.0).unwrap();
    // A line cutting back across the middle of the trace.
    let pick = Geometry::LineString(LineString::new(vec![
        coord! { x: -0.1, y: 51.56 },
        coord! { x: 0.0, y: 51.54 },
    ]));
    let position = Point::new(-0.05, 51.55);

    group.bench_function("process_5k_trace", |b| {
        b.iter(|| process_next_line(position, &pick, &trace));
    });

    group.finish();
}

criterion_group!(benches, bench_projection, bench_chooser, bench_reconciler);

criterion_main!(benches);
