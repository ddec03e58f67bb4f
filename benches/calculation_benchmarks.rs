//! Performance benchmarks for the Performance Financial Engine.
//!
//! This benchmark suite tracks the cost of a calculation at the pipeline and
//! HTTP levels:
//! - Pipeline over a typical performance (a dozen line items)
//! - Pipeline scaling with line item count
//! - Single API request
//! - Batch of 100 API requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use perf_engine::api::{AppState, CalculationRequest, create_router};
use perf_engine::calculation::{calculate_financials, run_pipeline};
use perf_engine::config::ConfigLoader;
use perf_engine::models::{
    PerformanceCostCoefficients, RevenueDirection, RevenueLineItem, RevenueType,
};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/cims").expect("Failed to load config");
    AppState::new(config)
}

fn standard_coefficients() -> PerformanceCostCoefficients {
    PerformanceCostCoefficients {
        operating_cost: Decimal::new(5, 2),
        customer_care_cost: Decimal::new(2, 2),
        commission_cost: Decimal::new(10, 2),
        diplomatic_cost: Decimal::new(2, 2),
        reserve_cost: Decimal::new(1, 2),
        customer_cost: Decimal::new(3, 2),
    }
}

/// Creates `count` line items alternating between one-time and monthly.
fn create_items(count: usize, direction: RevenueDirection) -> Vec<RevenueLineItem> {
    (0..count)
        .map(|i| RevenueLineItem {
            price: Decimal::new(150_000 + (i as i64 % 7) * 25_000, 0),
            quantity: (i % 12) as u32 + 1,
            item_type: if i % 2 == 0 {
                RevenueType::OneTime
            } else {
                RevenueType::EveryMonth
            },
            direction,
        })
        .collect()
}

/// Creates a request body with `count` items in each list.
fn create_request_body(count: usize, performance_id: &str) -> String {
    let items = |offset: i64| -> Vec<serde_json::Value> {
        (0..count)
            .map(|i| {
                serde_json::json!({
                    "price": (150_000 + offset + (i as i64 % 7) * 25_000).to_string(),
                    "quantity": (i % 12) + 1,
                    "type": if i % 2 == 0 { "OneTime" } else { "EveryMonth" }
                })
            })
            .collect()
    };

    let request_json = serde_json::json!({
        "performance_id": performance_id,
        "revenue_input": items(100_000),
        "revenue_output": items(0),
    });

    let request: CalculationRequest =
        serde_json::from_value(request_json).expect("Failed to create request");
    serde_json::to_string(&request).unwrap()
}

/// Benchmark: Pipeline over a typical performance.
fn bench_typical_performance(c: &mut Criterion) {
    let input = create_items(8, RevenueDirection::In);
    let output = create_items(4, RevenueDirection::Out);
    let coefficients = standard_coefficients();

    c.bench_function("typical_performance", |b| {
        b.iter(|| calculate_financials(black_box(&input), black_box(&output), &coefficients))
    });

    c.bench_function("typical_performance_with_audit", |b| {
        b.iter(|| run_pipeline(black_box(&input), black_box(&output), &coefficients, 1))
    });
}

/// Benchmark: Pipeline scaling with line item count.
fn bench_scaling(c: &mut Criterion) {
    let coefficients = standard_coefficients();
    let mut group = c.benchmark_group("scaling");

    for item_count in [1usize, 10, 100, 1_000, 10_000] {
        let input = create_items(item_count, RevenueDirection::In);
        let output = create_items(item_count, RevenueDirection::Out);

        group.throughput(Throughput::Elements(item_count as u64 * 2));
        group.bench_with_input(
            BenchmarkId::new("items", item_count),
            &item_count,
            |b, _| b.iter(|| calculate_financials(black_box(&input), black_box(&output), &coefficients)),
        );
    }

    group.finish();
}

/// Benchmark: Single API request.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_request_body(6, "perf_bench_001");

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/performances/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 API requests.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| create_request_body(1 + i % 10, &format!("perf_batch_{:03}", i)))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/performances/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_typical_performance,
    bench_scaling,
    bench_single_request,
    bench_batch_100,
);
criterion_main!(benches);
