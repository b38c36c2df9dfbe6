//! Weight histograms of the toric code's stabilizer group and one logical coset.
//!
//! ```text
//! RUST_LOG=debug cargo run --example toric_weights -- --width 3 --beta 0.4 --method element
//! ```

use clap::Parser;
use cosetweight::{coset_hist, freq_hist, metropolis, toric_code, MetropolisConfig, ProposalMethod, WeightHistogram};
use paulistab::StabilizerCode;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Groups with more generators are sampled only.
const EXACT_GENERATOR_LIMIT: usize = 24;

#[derive(Parser)]
struct Cli {
    /// Cells along a row of the torus.
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Rows of the torus; defaults to the width.
    #[arg(long)]
    height: Option<usize>,

    #[arg(long, default_value_t = cosetweight::DEFAULT_SAMPLED_TRIALS)]
    trials: usize,

    #[arg(long, default_value_t = 0.0)]
    beta: f64,

    #[arg(long, default_value_t = 0)]
    burn_in: usize,

    #[arg(long, default_value_t = 1)]
    thinning: usize,

    #[arg(long, default_value_t = ProposalMethod::Generator)]
    method: ProposalMethod,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn print_histogram(title: &str, histogram: &WeightHistogram) {
    println!("{title} ({} samples)", histogram.total());
    for (weight, frequency) in histogram.frequencies().iter().enumerate() {
        if histogram[weight] > 0 {
            println!("  {weight:>4}: {:>10} {frequency:.5}", histogram[weight]);
        }
    }
    if let Some(mean) = histogram.mean_weight() {
        println!("  mean weight {mean:.3}");
    }
}

fn main() -> cosetweight::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let height = cli.height.unwrap_or(cli.width);
    let code: StabilizerCode = toric_code(cli.width, height)?;
    let logical_x = code.logical_xs()[0].clone();
    println!(
        "{}x{height} toric code: {} qubits, {} generators",
        cli.width,
        code.qubit_count(),
        code.group_generators().len()
    );

    if code.group_generators().len() <= EXACT_GENERATOR_LIMIT {
        print_histogram("exact stabilizer group", &coset_hist(&code, None)?);
        print_histogram("exact logical X coset", &coset_hist(&code, Some(&logical_x))?);
    }

    let mut rng = SmallRng::seed_from_u64(cli.seed);
    print_histogram("sampled stabilizer group", &freq_hist(&code, None, cli.trials, &mut rng)?);

    let config = MetropolisConfig::default()
        .with_beta(cli.beta)
        .with_burn_in(cli.burn_in)
        .with_thinning(cli.thinning)
        .with_trials(cli.trials)
        .with_method(cli.method);
    let outcome = metropolis(&code, Some(&logical_x), &config, &mut rng)?;
    print_histogram(&format!("metropolis on logical X coset, beta {}", cli.beta), &outcome.histogram);
    println!("  accepted {} of {} moves", outcome.accepted_moves, config.trials);
    Ok(())
}
