//! Performance benchmarks for the Payroll Calculation Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Gross-mode calculation: < 50μs mean
//! - Net-mode calculation (iterative solver): < 250μs mean
//! - Full HTTP round trip: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::solve;
use payroll_engine::config::RateTable;
use payroll_engine::models::{MaritalStatus, SalaryInput, SalaryMode};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a representative input: seniority, a bonus, a family.
fn create_bench_input(mode: SalaryMode) -> SalaryInput {
    SalaryInput {
        base_salary: Decimal::new(850_000, 2),
        salary_mode: mode,
        fixed_bonus: Decimal::new(50_000, 2),
        exceptional_bonus: Decimal::ZERO,
        benefits_in_kind: Decimal::ZERO,
        seniority_years: 6,
        marital_status: MaritalStatus::Married,
        dependent_children: 2,
        enable_social_security: true,
        enable_health_insurance: true,
        enable_supplementary_pension: true,
        employee_pension_rate: Decimal::new(3, 0),
        employer_pension_rate: Decimal::new(45, 1),
        tax_exempt: false,
        exemption_months: 0,
    }
}

/// Benchmark: gross-mode calculation through the library entry point.
///
/// Target: < 50μs mean
fn bench_gross_mode(c: &mut Criterion) {
    let rates = RateTable::morocco_2025();
    let input = create_bench_input(SalaryMode::Gross);

    c.bench_function("gross_mode", |b| {
        b.iter(|| black_box(solve(black_box(&input), &rates).unwrap()))
    });
}

/// Benchmark: net-mode calculation, which runs the forward pipeline up
/// to six times inside the solver.
///
/// Target: < 250μs mean
fn bench_net_mode(c: &mut Criterion) {
    let rates = RateTable::morocco_2025();
    let input = create_bench_input(SalaryMode::Net);

    c.bench_function("net_mode", |b| {
        b.iter(|| black_box(solve(black_box(&input), &rates).unwrap()))
    });
}

/// Benchmark: gross-mode calculation across the salary range, to catch
/// bracket-dependent regressions.
fn bench_salary_scaling(c: &mut Criterion) {
    let rates = RateTable::morocco_2025();
    let mut group = c.benchmark_group("salary_scaling");

    for salary in [3000i64, 8000, 20000, 80000] {
        let mut input = create_bench_input(SalaryMode::Gross);
        input.base_salary = Decimal::new(salary, 0);

        group.bench_with_input(BenchmarkId::new("gross", salary), &salary, |b, _| {
            b.iter(|| black_box(solve(&input, &rates).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: full HTTP round trip through the router.
///
/// Target: < 1ms mean
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(RateTable::morocco_2025()));
    let body = serde_json::json!({
        "salary": {
            "base_salary": "8500",
            "salary_mode": "gross",
            "marital_status": "married",
            "dependent_children": 2,
            "seniority_years": 6,
            "fixed_bonus": "500"
        }
    })
    .to_string();

    c.bench_function("http_round_trip", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
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

criterion_group!(
    benches,
    bench_gross_mode,
    bench_net_mode,
    bench_salary_scaling,
    bench_http_round_trip,
);
criterion_main!(benches);
