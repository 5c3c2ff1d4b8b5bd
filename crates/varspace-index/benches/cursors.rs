//! Micro-benchmarks for index cursor advancement.
//!
//! Compares the amortized O(1) cursor sweeps against recomputing each step's
//! index from scratch, on a representative joint space.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench cursors
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use varspace_core::{Variable, VariableCollection};
use varspace_index::{
    EmbeddingIndex, PermutationIndex, ProjectingIndex, testing::projected_index,
};

fn joint_space() -> (VariableCollection, VariableCollection) {
    // Eight ternary variables, projecting onto every other one.
    let full: VariableCollection = (0..8).map(|id| Variable::new(id, 3)).collect();
    let sub: VariableCollection = (0..8)
        .step_by(2)
        .map(|id| Variable::new(id, 3))
        .collect();
    (full, sub)
}

fn bench_projecting_sweep(c: &mut Criterion) {
    let (full, sub) = joint_space();
    c.bench_function("projecting_sweep", |b| {
        b.iter(|| {
            let mut cursor = ProjectingIndex::new(&full, &sub);
            let mut sum = 0_usize;
            for _ in 0..cursor.end() {
                sum = sum.wrapping_add(cursor.current());
                cursor.advance();
            }
            hint::black_box(sum)
        });
    });
}

fn bench_projecting_naive(c: &mut Criterion) {
    let (full, sub) = joint_space();
    c.bench_function("projecting_naive_recompute", |b| {
        b.iter(|| {
            let mut sum = 0_usize;
            for step in 0..full.num_states() {
                sum = sum.wrapping_add(projected_index(&full, &sub, step));
            }
            hint::black_box(sum)
        });
    });
}

fn bench_embedding_sweep(c: &mut Criterion) {
    let (full, sub) = joint_space();
    c.bench_function("embedding_sweep", |b| {
        b.iter(|| {
            let mut sum = 0_usize;
            let comp = full.difference(&sub);
            let mut offsets = EmbeddingIndex::new(&full, &comp, 0);
            for _ in 0..comp.num_states() {
                let mut cursor = EmbeddingIndex::new(&full, &sub, offsets.current());
                for _ in 0..sub.num_states() {
                    sum = sum.wrapping_add(cursor.current());
                    cursor.advance();
                }
                offsets.advance();
            }
            hint::black_box(sum)
        });
    });
}

fn bench_permutation_convert(c: &mut Criterion) {
    let order: Vec<_> = (0..8).rev().map(|id| Variable::new(id, 3)).collect();
    let perm = PermutationIndex::new(&order, false);
    c.bench_function("permutation_convert", |b| {
        b.iter(|| {
            let mut sum = 0_usize;
            for i in 0..perm.end() {
                sum = sum.wrapping_add(perm.convert(i));
            }
            hint::black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_projecting_sweep,
    bench_projecting_naive,
    bench_embedding_sweep,
    bench_permutation_convert
);
criterion_main!(benches);
