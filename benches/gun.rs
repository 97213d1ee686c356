use criterion::{black_box, criterion_group, criterion_main, Criterion};
use toruslife::*;

fn gun_benchmark(c: &mut Criterion) {
  c.bench_function("gun 256 generations on a 64x64 torus", |b| b.iter(|| {
    let gun = Pattern::parse(GOSPER_GLIDER_GUN, ALIVE_CHAR);
    let board = seed_pattern(64, 64, &gun, (0, 0)).unwrap();

    simulate(board, black_box(256))
  }));
}

criterion_group!(benches, gun_benchmark);
criterion_main!(benches);
