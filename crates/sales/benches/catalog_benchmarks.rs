use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::NaiveDate;
use tally_core::Money;
use tally_sales::{Order, OrderCatalog, Product};

const CATEGORIES: [&str; 4] = ["Electronics", "Books", "Garden", "Toys"];

fn build_catalog(order_count: usize) -> OrderCatalog {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    OrderCatalog::from_orders((0..order_count).map(|i| {
        let products = (0..(i % 5) + 1)
            .map(|j| {
                Product::new(
                    format!("item-{}", (i + j) % 50),
                    Money::from_cents(((i * 37 + j * 11) % 10_000) as i64),
                    CATEGORIES[(i + j) % CATEGORIES.len()],
                )
            })
            .collect();
        Order::new(
            format!("o-{i}"),
            start + chrono::Days::new((i % 365) as u64),
            format!("c-{}", i % 100),
            products,
            "PENDING",
        )
    }))
}

fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_aggregations");
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    for order_count in [100usize, 1_000, 10_000] {
        let catalog = build_catalog(order_count);
        group.throughput(Throughput::Elements(order_count as u64));

        group.bench_with_input(
            BenchmarkId::new("total_value_per_customer", order_count),
            &catalog,
            |b, catalog| b.iter(|| black_box(catalog.total_value_per_customer())),
        );
        group.bench_with_input(
            BenchmarkId::new("most_ordered_product", order_count),
            &catalog,
            |b, catalog| b.iter(|| black_box(catalog.most_ordered_product().ok())),
        );
        group.bench_with_input(
            BenchmarkId::new("top_customer", order_count),
            &catalog,
            |b, catalog| b.iter(|| black_box(catalog.top_customer(start, end).ok())),
        );
        group.bench_with_input(
            BenchmarkId::new("daily_sales", order_count),
            &catalog,
            |b, catalog| b.iter(|| black_box(catalog.daily_sales(start, end))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_aggregations);
criterion_main!(benches);
