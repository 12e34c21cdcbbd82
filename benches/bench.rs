use criterion::{black_box, criterion_group, criterion_main, Criterion};
use torus_life::{next_generation, Config, World};

fn generation<const N: usize>(c: &mut Criterion) {
    let world = World::random(N, Config::DEFAULT_FILL_RATE, Some(Config::DEFAULT_SEED)).unwrap();
    c.bench_function(&format!("next_generation_{}", N), |b| {
        b.iter(|| next_generation(black_box(&world)))
    });
}

criterion_group!(benches, generation<64>, generation<256>);
criterion_main!(benches);
