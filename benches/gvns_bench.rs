//! Criterion benchmarks for the GVNS scheduling solver.
//!
//! Uses generated instances so sizes are easy to scale and runs stay
//! reproducible (the generator is seeded).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_pmsp::construction::cheapest_insertion;
use u_pmsp::gvns::{GvnsConfig, GvnsRunner, LocalSearchKind};
use u_pmsp::instance::generate::{generate, GeneratorConfig};
use u_pmsp::neighborhood::NeighborhoodKind;
use u_pmsp::problem::Problem;
use u_pmsp::search::vnd;

fn instance(num_tasks: usize, num_machines: usize) -> Problem {
    let config = GeneratorConfig::default()
        .with_num_tasks(num_tasks)
        .with_num_machines(num_machines)
        .with_seed(42);
    generate(&config)
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(10);

    for &(n, m) in &[(20usize, 4usize), (40, 8), (60, 10)] {
        let problem = instance(n, m);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_m{}", n, m), n),
            &problem,
            |b, p| {
                b.iter(|| {
                    let solution = cheapest_insertion(black_box(p));
                    black_box(solution)
                })
            },
        );
    }
    group.finish();
}

fn bench_vnd(c: &mut Criterion) {
    let mut group = c.benchmark_group("vnd");
    group.sample_size(10);

    for &(n, m) in &[(20usize, 4usize), (40, 8)] {
        let problem = instance(n, m);
        let start = cheapest_insertion(&problem);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_m{}", n, m), n),
            &(problem, start),
            |b, (p, s)| {
                b.iter(|| {
                    let descent = vnd::descend(black_box(p), s.clone(), &NeighborhoodKind::ALL);
                    black_box(descent)
                })
            },
        );
    }
    group.finish();
}

fn bench_gvns(c: &mut Criterion) {
    let mut group = c.benchmark_group("gvns");
    group.sample_size(10);

    for &(n, m) in &[(20usize, 4usize), (40, 8)] {
        let problem = instance(n, m);
        for (label, kind) in [
            ("vnd", LocalSearchKind::Vnd),
            ("rvnd", LocalSearchKind::RandomVnd),
        ] {
            let config = GvnsConfig::default()
                .with_max_iterations(10)
                .with_local_search(kind)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(format!("n{}_m{}_{}", n, m, label), n),
                &(problem.clone(), config),
                |b, (p, c)| {
                    b.iter(|| {
                        let result = GvnsRunner::run(black_box(p), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_vnd, bench_gvns);
criterion_main!(benches);
