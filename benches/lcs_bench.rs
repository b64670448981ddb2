use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sidediff::diff::{build_diff, compute_lcs, split_lines};
use std::hint::black_box;

/// Builds a document of `size` lines and a copy with every seventh line
/// changed and every eleventh line dropped.
fn create_documents(size: usize) -> (String, String) {
    let mut left = String::new();
    let mut right = String::new();

    for i in 0..size {
        let line = format!("line {} of the benchmark document\n", i % 97);
        left.push_str(&line);

        if i % 11 == 0 {
            continue;
        }
        if i % 7 == 0 {
            right.push_str(&format!("changed line {i}\n"));
        } else {
            right.push_str(&line);
        }
    }

    (left, right)
}

fn benchmark_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs");

    for size in [100, 500, 2000] {
        let (left, right) = create_documents(size);
        let left_lines = split_lines(&left);
        let right_lines = split_lines(&right);

        group.bench_with_input(BenchmarkId::new("compute_lcs", size), &size, |b, _| {
            b.iter(|| compute_lcs(black_box(&left_lines), black_box(&right_lines)));
        });
    }

    group.finish();
}

fn benchmark_alignment(c: &mut Criterion) {
    let (left, right) = create_documents(2000);
    let left_lines = split_lines(&left);
    let right_lines = split_lines(&right);
    let matches = compute_lcs(&left_lines, &right_lines);

    c.bench_function("build_diff_2000", |b| {
        b.iter(|| {
            build_diff(
                black_box(&left_lines),
                black_box(&right_lines),
                black_box(&matches),
            )
        });
    });
}

criterion_group!(benches, benchmark_lcs, benchmark_alignment);
criterion_main!(benches);
