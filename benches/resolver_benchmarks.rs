//! Performance benchmarks for the Shift Calendar Engine.
//!
//! Covers the resolver on its own and the full `/calendar` request path:
//! - Single day resolution
//! - One staff member's month grid
//! - Month calendars for growing staff counts
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use shift_calendar_engine::api::{AppState, create_router};
use shift_calendar_engine::calendar::{CalendarMonth, ShiftResolver};
use shift_calendar_engine::config::ConfigLoader;
use shift_calendar_engine::models::ShiftAssignment;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

/// Assignments using every rule type.
fn mixed_assignments() -> Vec<ShiftAssignment> {
    serde_json::from_value(serde_json::json!([
        {
            "shift_type": "SPECIFIC_PERIOD",
            "from_date": "2024-01-01",
            "to_date": "2024-12-31",
            "date_to_shift_category_id": { "2024-05-14": 7, "2024-05-15": 7 }
        },
        {
            "shift_type": "WEEKLY",
            "day_to_shift_category_id": { "MONDAY": 1, "WEDNESDAY": 2, "FRIDAY": 5 }
        },
        { "shift_type": "DEFAULT", "default_shift_category_id": 3 }
    ]))
    .expect("Failed to build assignments")
}

/// Creates a `/calendar` request body for `staff_count` staff members.
fn calendar_body(staff_count: usize) -> String {
    let assignments = serde_json::to_value(mixed_assignments()).expect("Failed to encode");
    let staff: Vec<serde_json::Value> = (0..staff_count)
        .map(|i| {
            serde_json::json!({
                "staff": {
                    "id": format!("staff_{:04}", i),
                    "name": format!("Staff {}", i),
                    "department": if i % 2 == 0 { "Nursing" } else { "Kitchen" },
                    "role": "Attendant"
                },
                "assignments": assignments
            })
        })
        .collect();

    serde_json::json!({ "year": 2024, "month": 5, "staff": staff }).to_string()
}

/// Benchmark: Resolving a single day.
fn bench_resolve_day(c: &mut Criterion) {
    let config = load_config();
    let reference = config.reference_data();
    let holidays = reference.holidays(2024).expect("2024 holidays");
    let assignments = mixed_assignments();
    let resolver = ShiftResolver::new(reference.shifts(), holidays, &assignments);
    let date = NaiveDate::from_ymd_opt(2024, 5, 15).expect("valid date");

    c.bench_function("resolve_day", |b| {
        b.iter(|| black_box(resolver.resolve(black_box(date))))
    });
}

/// Benchmark: Resolving one staff member's month grid.
fn bench_resolve_month(c: &mut Criterion) {
    let config = load_config();
    let reference = config.reference_data();
    let holidays = reference.holidays(2024).expect("2024 holidays");
    let assignments = mixed_assignments();
    let month = CalendarMonth::new(2024, 5, config.week_start()).expect("valid month");

    c.bench_function("resolve_month", |b| {
        b.iter(|| {
            let resolver = ShiftResolver::new(reference.shifts(), holidays, &assignments);
            black_box(resolver.resolve_month(&month))
        })
    });
}

/// Benchmark: `/calendar` requests for various staff counts.
fn bench_calendar_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(&load_config());

    let mut group = c.benchmark_group("calendar_staff");

    for staff_count in [1, 10, 50, 200].iter() {
        let router = create_router(state.clone());
        let body = calendar_body(*staff_count);

        group.throughput(Throughput::Elements(*staff_count as u64));
        group.bench_with_input(
            BenchmarkId::new("staff", staff_count),
            staff_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/calendar")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_day,
    bench_resolve_month,
    bench_calendar_scaling,
);
criterion_main!(benches);
