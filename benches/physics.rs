//! Benchmarks for springy simulation steps and edits.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use springy::*;

fn chain(links: usize) -> Simulation<f32> {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    sim.add_point(Vec2::new(400.0, 50.0), true);
    for i in 1..=links {
        let t = i as f32 / links as f32;
        sim.add_point_and_spring_on_click(400.0 + 350.0 * t, 50.0 + 500.0 * t);
    }
    sim
}

fn bench_pendulum(c: &mut Criterion) {
    c.bench_function("pendulum_600_steps", |b| {
        b.iter(|| {
            let mut sim: Simulation<f64> = Simulation::with_pendulum(SimConfig::default()).unwrap();
            for _ in 0..600 {
                sim.step();
            }
            sim.positions()
        });
    });
}

fn bench_chain_simulation(c: &mut Criterion) {
    c.bench_function("chain_200_links_60_steps", |b| {
        b.iter(|| {
            let mut sim = chain(200);
            for _ in 0..60 {
                sim.step();
            }
            sim.positions()
        });
    });
}

fn bench_edits(c: &mut Criterion) {
    c.bench_function("chain_200_links_push_and_undo", |b| {
        b.iter(|| {
            let mut sim = chain(200);
            for i in 0..50 {
                let x = 400.0 + 7.0 * i as f32;
                sim.push_nearby_points(black_box(Vec2::new(x, 300.0)), 35.0);
                sim.remove_last_point_and_spring();
                sim.step();
            }
            sim.point_count()
        });
    });
}

criterion_group!(benches, bench_pendulum, bench_chain_simulation, bench_edits);
criterion_main!(benches);
