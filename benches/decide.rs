use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dfa_decide::{prelude::*, random::generate_seeded_dfa};

fn emptiness(c: &mut Criterion) {
    let mut group = c.benchmark_group("emptiness");
    for size in [16, 128, 1024] {
        // sparse acceptance makes the search visit most of the automaton
        let dfa = generate_seeded_dfa(size as u64, 2, size, 0.9, 0.01);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dfa, |b, dfa| {
            b.iter(|| black_box(dfa.emptiness()))
        });
    }
    group.finish();
}

fn equivalence(c: &mut Criterion) {
    let mut group = c.benchmark_group("equivalence");
    for size in [16, 64, 256] {
        let dfa = generate_seeded_dfa(size as u64, 2, size, 1.0, 0.5);
        let other = dfa.completed();
        group.bench_with_input(
            BenchmarkId::new("self", size),
            &(&dfa, &other),
            |b, (left, right)| b.iter(|| black_box(left.equivalence(right))),
        );

        let different = generate_seeded_dfa(size as u64 + 1, 2, size, 1.0, 0.5);
        group.bench_with_input(
            BenchmarkId::new("random", size),
            &(&dfa, &different),
            |b, (left, right)| b.iter(|| black_box(left.equivalence(right))),
        );
    }
    group.finish();
}

criterion_group!(benches, emptiness, equivalence);
criterion_main!(benches);
