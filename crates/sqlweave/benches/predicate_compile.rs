use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlweave::predicate::col;
use sqlweave::{
    ColumnDescriptor, Dialect, MemberType, PredicateNode, QueryBuilder, SqlTrace, TableDescriptor,
};

fn table(n: usize) -> TableDescriptor {
    let mut builder = TableDescriptor::builder("t")
        .column(ColumnDescriptor::builder("id", MemberType::I64).primary_key());
    for i in 0..n {
        builder = builder.column(ColumnDescriptor::builder(format!("col{i}"), MemberType::Text));
    }
    builder.build().unwrap()
}

/// id >= @p1 and col0 = @p2 and (col1 > @p3 or id <> @p4) and ...
fn predicate(n: usize) -> PredicateNode {
    let mut node = col("id").ge(0);
    for i in 0..n {
        let term = if i % 2 == 0 {
            col(format!("col{i}")).eq(i as i64)
        } else {
            col(format!("col{i}")).gt(i as i64).or(col("id").ne(i as i64))
        };
        node = node.and(term);
    }
    node
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate/filter");

    for n in [1, 5, 10, 50] {
        let table = table(n);
        let node = predicate(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut qb = QueryBuilder::new(&Dialect::SQL_SERVER, &table).without_trace();
                qb.filter(black_box(&node)).unwrap();
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate/membership");
    let table = table(0);

    for n in [10, 1_000, 10_000] {
        let node = col("id").in_list(0..n as i64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &node, |b, node| {
            b.iter(|| {
                let mut qb = QueryBuilder::new(&Dialect::SQL_SERVER, &table).without_trace();
                qb.filter(node).unwrap();
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

fn bench_select_statement(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/select_where_order");

    for n in [5, 50] {
        let table = table(n);
        let node = predicate(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut qb =
                    QueryBuilder::new(&Dialect::POSTGRESQL, &table).trace(SqlTrace::new());
                qb.select()
                    .unwrap()
                    .filter(&node)
                    .unwrap()
                    .order_by("id")
                    .unwrap();
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_membership, bench_select_statement);
criterion_main!(benches);
