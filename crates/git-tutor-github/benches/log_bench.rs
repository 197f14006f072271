use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use git_tutor_github::api::{CommitAuthor, CommitDetail, CommitItem};
use git_tutor_github::log::synthesize_log;

/// Build a commits response of the given size
fn sample_items(n: usize) -> Vec<CommitItem> {
    (0..n)
        .map(|i| CommitItem {
            sha: format!("{:040x}", i),
            commit: CommitDetail {
                author: Some(CommitAuthor {
                    name: Some(format!("Author {}", i % 10)),
                    email: Some(format!("author{}@example.com", i % 10)),
                    date: chrono::DateTime::from_timestamp(1_700_000_000 + i as i64 * 60, 0),
                }),
                message: format!("refactor: commit message {} with a longer body\n\nDetails.", i),
            },
        })
        .collect()
}

fn log_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize_log");

    for size in [1usize, 30, 300] {
        let items = sample_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| synthesize_log(items));
        });
    }

    group.finish();
}

criterion_group!(benches, log_benchmarks);
criterion_main!(benches);
