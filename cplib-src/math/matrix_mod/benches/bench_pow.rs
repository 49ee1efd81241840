use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use matrix_mod::Matrix998244353;

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");

    let n = 16;
    let mut base = Matrix998244353::new(n, n);
    for i in 0..n {
        for j in 0..n {
            base[i][j] = ((i * n + j) % 97) as u64;
        }
    }

    for k in [1_u64 << 10, 1 << 30, 1 << 62] {
        group.bench_with_input(BenchmarkId::new("16x16", k), &k, |b, &k| {
            b.iter(|| black_box(base.pow(k)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pow);
criterion_main!(benches);
