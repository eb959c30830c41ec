use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spooldraft::geom::{project_iso, project_plane, IsoCorner, Point2, Point3};
use spooldraft::model::{Element, ProcessModel};
use spooldraft::{compute_view, ViewMode};
use std::hint::black_box;

fn grid_model(side: usize) -> ProcessModel {
    let mut model = ProcessModel::default();
    for i in 0..side {
        for j in 0..side {
            let element = Element {
                kind: "pump".to_string(),
                valve_kind: None,
                actuator: None,
                position: Point3::new(i as f64 * 3.0, 0.0, j as f64 * 3.0),
                rotation_x: 0.0,
                rotation: 0.0,
                rotation_z: 0.0,
                scale: 1.0,
                connection_points: vec![
                    Point3::new(-0.5, 0.0, 0.0),
                    Point3::new(0.5, 0.0, 0.0),
                ],
            };
            model.elements.insert(format!("P-{i}-{j}"), element);
        }
    }
    model
}

fn bench_projection(c: &mut Criterion) {
    c.bench_function("project_plane", |b| {
        let p = Point3::new(12.5, 3.0, -4.2);
        b.iter(|| black_box(project_plane(black_box(p))));
    });
    c.bench_function("project_iso", |b| {
        let p = Point3::new(12.5, 3.0, -4.2);
        b.iter(|| {
            black_box(project_iso(
                black_box(p),
                IsoCorner::Ne,
                100.0,
                Point2::new(420.0, 297.0),
            ))
        });
    });
}

fn bench_compute_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_view");
    for side in [4usize, 16] {
        let model = grid_model(side);
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &model, |b, model| {
            b.iter(|| black_box(compute_view(model, ViewMode::Isometric(IsoCorner::Sw))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_projection, bench_compute_view);
criterion_main!(benches);
