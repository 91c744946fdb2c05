//! Benchmarks the hot path: repeated `replace_var` substitution over a
//! synthetic gate chain, the workload this crate's occurrence-list design
//! exists to make fast.

use boolpoly::{Monomial, Polynomial};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_chain(depth: usize) -> Polynomial {
    let var_size = depth + 2;
    let mut p = Polynomial::new(var_size);
    p.add_monomial(Monomial::single(var_size - 1));
    p
}

fn reduce_chain(p: &mut Polynomial, depth: usize) {
    // v(i) <- AND(v(i-1), v(i-2)), folding down to the two base variables.
    let top = depth + 1;
    for i in (2..=top).rev() {
        let a = i - 1;
        let b = i - 2;
        let _ = p.replace_and(i, a, false, b, false);
    }
}

fn bench_replace_var(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_var_chain");
    for depth in [8usize, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut p = build_chain(depth);
                reduce_chain(&mut p, depth);
                p.size()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_replace_var);
criterion_main!(benches);
