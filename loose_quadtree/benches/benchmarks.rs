use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loose_quadtree::quadtree::{ElementHandle, Quadtree};
use loose_quadtree::shapes::{Point, Rect};
use rand::prelude::*;

const ENTITY_COUNT: u32 = 1000;

fn world() -> Rect {
    Rect::from_coords(0.0, 0.0, 100.0, 100.0)
}

fn random_box(rng: &mut StdRng) -> Rect {
    Rect::from_origin_size(
        Point::new(rng.gen_range(0.0..95.0), rng.gen_range(0.0..95.0)),
        Point::new(5.0, 5.0),
    )
}

fn populated(rng: &mut StdRng) -> (Quadtree, Vec<ElementHandle>) {
    let mut quadtree = Quadtree::new(world());
    let handles = (0..ENTITY_COUNT)
        .filter_map(|id| quadtree.try_insert(random_box(rng), id).ok())
        .collect();
    (quadtree, handles)
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let boxes: Vec<Rect> = (0..ENTITY_COUNT).map(|_| random_box(&mut rng)).collect();
    let mut quadtree = Quadtree::new(world());

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            quadtree.clear();
            for (id, rect) in boxes.iter().enumerate() {
                quadtree.insert(black_box(*rect), id as u32);
            }
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let (mut quadtree, mut handles) = populated(&mut rng);

    c.bench_function("quadtree_remove_insert", |b| {
        b.iter(|| {
            let index = rng.gen_range(0..handles.len());
            let (id, rect) = quadtree.get(handles[index]).unwrap();
            quadtree.remove(black_box(handles[index])).unwrap();
            handles[index] = quadtree.try_insert(rect, id).unwrap();
        })
    });
}

fn relocate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let (mut quadtree, mut handles) = populated(&mut rng);
    let targets: Vec<Rect> = (0..handles.len()).map(|_| random_box(&mut rng)).collect();

    c.bench_function("quadtree_relocate", |b| {
        b.iter(|| {
            for (handle, rect) in handles.iter_mut().zip(&targets) {
                *handle = quadtree.relocate(*handle, black_box(*rect)).unwrap();
            }
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let (quadtree, _) = populated(&mut rng);
    let query = Rect::from_coords(40.0, 40.0, 60.0, 60.0);

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            quadtree.query(black_box(query), |_, _| hits += 1);
            hits
        })
    });

    c.bench_function("quadtree_query_distinct", |b| {
        let mut ids = Vec::new();
        b.iter(|| {
            ids.clear();
            quadtree.query_distinct(black_box(query), &mut ids);
            ids.len()
        })
    });
}

fn rebuild_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let mut positions: Vec<Point> = (0..ENTITY_COUNT)
        .map(|_| Point::new(rng.gen_range(5.0..95.0), rng.gen_range(5.0..95.0)))
        .collect();
    let mut quadtree = Quadtree::new(world());

    c.bench_function("quadtree_rebuild_and_query", |b| {
        b.iter(|| {
            for p in positions.iter_mut() {
                p.x = (p.x + rng.gen_range(-0.5..0.5)).clamp(5.0, 95.0);
                p.y = (p.y + rng.gen_range(-0.5..0.5)).clamp(5.0, 95.0);
            }
            quadtree.clear();
            for (id, p) in positions.iter().enumerate() {
                quadtree.insert(Rect::from_center(*p, 2.0, 2.0), id as u32);
            }
            let mut pairs = 0u32;
            for p in &positions {
                quadtree.query(Rect::from_center(*p, 2.0, 2.0), |_, _| pairs += 1);
            }
            black_box(pairs)
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    remove_benchmark,
    relocate_benchmark,
    query_benchmark,
    rebuild_benchmark
);
criterion_main!(quadtree_benchmarks);
