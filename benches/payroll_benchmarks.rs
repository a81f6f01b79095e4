//! Performance benchmarks for the employee payroll crate.
//!
//! Measures enrollment, total payroll aggregation and listing rendering for
//! registries of increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use employee_payroll::models::Employee;
use employee_payroll::registry::EmployeeRegistry;
use employee_payroll::report::render_listing;

/// Creates `count` employees alternating between office employees and workers.
fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let name = format!("emp_{:04}", i);
            if i % 2 == 0 {
                Employee::office(name, "01/01/1990", (i % 23) as i32)
            } else {
                Employee::worker(name, "02/02/1992", (i % 7) as i32)
            }
        })
        .collect()
}

fn create_registry(count: usize) -> EmployeeRegistry {
    let mut registry = EmployeeRegistry::new();
    registry.extend(create_employees(count));
    registry
}

fn bench_enroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("enroll");
    for size in [10usize, 100, 1000] {
        let employees = create_employees(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| {
                let mut registry = EmployeeRegistry::new();
                for employee in employees {
                    registry.enroll(employee.clone());
                }
                black_box(registry)
            })
        });
    }
    group.finish();
}

fn bench_total_payroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_payroll");
    for size in [10usize, 100, 1000, 10_000] {
        let registry = create_registry(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| black_box(registry.total_payroll()))
        });
    }
    group.finish();
}

fn bench_render_listing(c: &mut Criterion) {
    let registry = create_registry(100);
    c.bench_function("render_listing_100", |b| {
        b.iter(|| black_box(render_listing(&registry)))
    });
}

criterion_group!(benches, bench_enroll, bench_total_payroll, bench_render_listing);
criterion_main!(benches);
