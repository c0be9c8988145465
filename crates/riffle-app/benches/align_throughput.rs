//! Benchmark: LCS alignment and full session recompute at various document sizes.
//!
//! Alignment is O(m·n), so this tracks how far "recompute everything on each
//! commit" can be pushed before interactive latency suffers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use riffle_diff::align;
use riffle_session::DiffSession;

/// Generate a pair of documents with `n` lines each where roughly one line
/// in ten differs between the sides.
fn generate_documents(n: usize) -> (Vec<String>, Vec<String>) {
    let left: Vec<String> = (0..n).map(|i| format!("line number {}", i)).collect();
    let right: Vec<String> = (0..n)
        .map(|i| {
            if i % 10 == 3 {
                format!("edited line {}", i)
            } else {
                format!("line number {}", i)
            }
        })
        .collect();
    (left, right)
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");
    for &n in &[100, 400, 1000] {
        let (left, right) = generate_documents(n);
        group.bench_with_input(BenchmarkId::new("lcs", n), &n, |b, _| {
            b.iter(|| black_box(align(&left, &right)));
        });
    }
    group.finish();
}

fn bench_session_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    for &n in &[100, 400, 1000] {
        let (left, right) = generate_documents(n);
        let left_text = left.join("\n");
        let right_text = right.join("\n");
        group.bench_with_input(BenchmarkId::new("new_session", n), &n, |b, _| {
            b.iter(|| black_box(DiffSession::new(&left_text, &right_text)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_align, bench_session_recompute);
criterion_main!(benches);
