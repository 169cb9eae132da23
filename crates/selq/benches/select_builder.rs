use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use selq::QueryBuilder;

/// Build a QueryBuilder with `n` columns and `n` equality conditions:
/// SELECT col0, col1, ... FROM t WHERE col0=0 AND col1=1 ...
fn build_select(n: usize) -> QueryBuilder {
    let mut qb = QueryBuilder::new();
    for i in 0..n {
        qb.add_column(&format!("col{i}"));
    }
    qb.add_from("t");
    for i in 0..n {
        qb.add_where(&format!("col{i}"), &i.to_string());
    }
    qb
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_builder/build_query");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build_query().unwrap()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let qb = build_select(n);
                black_box(qb.build_query().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_query, bench_build_and_render);
criterion_main!(benches);
