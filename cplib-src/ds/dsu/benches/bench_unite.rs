use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, Criterion,
};
use dsu::Dsu;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn bench_unite(c: &mut Criterion) {
    let mut group = c.benchmark_group("unite");

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let n = 1 << 16;
    let query: Vec<_> = (0..2 * n)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();

    group.bench_function("random-pairs", |b| {
        b.iter_batched(
            || Dsu::new(n),
            |mut dsu| {
                for &(u, v) in &query {
                    black_box(dsu.unite(u, v));
                }
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_unite);
criterion_main!(benches);
