use criterion::{criterion_group, criterion_main, Criterion};
use geo::polygon;
use geozero::{CoordDimensions, ToWkb};
use s2geography::algorithm::{closest_feature, distance_matrix, max_distance_matrix};
use s2geography::array::GeographyArray;
use s2geography::geography::PointGeography;
use s2geography::s2::point_from_degrees;
use s2geography::Geography;

fn create_points() -> GeographyArray {
    (0..200)
        .map(|i| {
            let lng = (i % 20) as f64 * 9.0 - 90.0;
            let lat = (i / 20) as f64 * 8.0 - 40.0;
            Some(Geography::from(PointGeography::from_point(
                point_from_degrees(lng, lat),
            )))
        })
        .collect()
}

fn create_polygons() -> GeographyArray {
    let wkb = (0..50)
        .map(|i| {
            let offset = i as f64 * 3.0 - 75.0;
            // An L shape
            let poly = polygon![
                (x: offset, y: 0.0),
                (x: offset + 2.0, y: 0.0),
                (x: offset + 2.0, y: 0.5),
                (x: offset + 0.5, y: 0.5),
                (x: offset + 0.5, y: 2.0),
                (x: offset, y: 2.0),
                (x: offset, y: 0.0),
            ];
            Some(geo::Geometry::from(poly).to_wkb(CoordDimensions::xy()).unwrap())
        })
        .collect::<Vec<_>>();
    let arr = arrow_array::BinaryArray::from_iter(wkb);
    GeographyArray::from_wkb(&arr, &Default::default()).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = create_points();
    let polygons = create_polygons();

    c.bench_function("distance matrix 200 points x 50 polygons", |b| {
        b.iter(|| distance_matrix(&points, &polygons))
    });

    c.bench_function("max distance matrix 200 points x 50 polygons", |b| {
        b.iter(|| max_distance_matrix(&points, &polygons))
    });

    c.bench_function("closest feature 200 points in 50 polygons", |b| {
        b.iter(|| closest_feature(&points, &polygons).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
