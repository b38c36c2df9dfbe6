//! Criterion benchmarks for the coset weight histograms.

use cosetweight::{coset_hist, freq_hist, metropolis, toric_code, MetropolisConfig, ProposalMethod};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use paulistab::StabilizerCode;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SEED: u64 = 42;

fn construction_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("construction");

    for size in [4, 8, 16] {
        group.bench_function(BenchmarkId::new("toric_code", size), |bencher| {
            bencher.iter(|| toric_code::<StabilizerCode>(size, size).expect("Valid lattice"));
        });
    }
    group.finish();
}

fn enumeration_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("enumeration");
    group.sample_size(20);

    for (width, height) in [(2, 2), (2, 3), (3, 3)] {
        let code: StabilizerCode = toric_code(width, height).expect("Valid lattice");
        let param = format!("{width}x{height}");
        group.bench_with_input(BenchmarkId::new("coset_hist", &param), &code, |bencher, code| {
            bencher.iter(|| coset_hist(code, None).expect("Enumerable group"));
        });
    }
    group.finish();
}

fn sampling_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sampling");
    group.sample_size(20);

    let code: StabilizerCode = toric_code(8, 8).expect("Valid lattice");
    for trials in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("freq_hist", trials), &trials, |bencher, &trials| {
            bencher.iter_with_setup(
                || SmallRng::seed_from_u64(SEED),
                |mut rng| freq_hist(&code, None, trials, &mut rng).expect("Matching qubit count"),
            );
        });
        for method in [ProposalMethod::Generator, ProposalMethod::Element] {
            let config = MetropolisConfig::default()
                .with_beta(0.5)
                .with_trials(trials)
                .with_method(method);
            group.bench_with_input(
                BenchmarkId::new(format!("metropolis_{method}"), trials),
                &config,
                |bencher, config| {
                    bencher.iter_with_setup(
                        || SmallRng::seed_from_u64(SEED),
                        |mut rng| metropolis(&code, None, config, &mut rng).expect("Valid configuration"),
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, construction_benchmark, enumeration_benchmark, sampling_benchmark);
criterion_main!(benches);
