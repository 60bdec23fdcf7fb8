use clap::{Parser, Subcommand};
use esf_permutation::config::DriverConfig;
use esf_permutation::permutation::{EsfParameters, EsfPermutation};
use esf_permutation::stats::{sample_cycle_counts, summarize, CycleCountSummary};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Ewens sampling formula permutations via the Feller coupling",
    long_about = None
)]
struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample permutations for a single (n, alpha)
    Sample {
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        n: i64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        alpha: f64,
        #[arg(long, default_value_t = 1)]
        count: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Sample one permutation per alpha on a descending sweep
    Sweep {
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        #[arg(long)]
        n: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, help = "Emit one JSON object per line")]
        json: bool,
    },
    /// Compare the empirical cycle count against its exact mean
    Stats {
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        n: i64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        alpha: f64,
        #[arg(long, default_value_t = 10_000)]
        trials: u64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct SweepRecord<'a> {
    alpha: f64,
    cycles: usize,
    permutation: &'a str,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = match &cli.command {
        Commands::Sweep {
            config: Some(path), ..
        } => DriverConfig::load(path)?,
        _ => DriverConfig::default(),
    };
    init_logging(cli.log_level.as_deref().unwrap_or(&config.logging.level));

    match cli.command {
        Commands::Sample {
            n,
            alpha,
            count,
            seed,
        } => run_sample(n, alpha, count, seed)?,
        Commands::Sweep { n, seed, json, .. } => run_sweep(config, n, seed, json)?,
        Commands::Stats {
            n,
            alpha,
            trials,
            seed,
        } => run_stats(n, alpha, trials, seed)?,
    }
    Ok(())
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::info!("seeding generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn run_sample(n: i64, alpha: f64, count: u32, seed: Option<u64>) -> CliResult<()> {
    let params = EsfParameters::try_new(n, alpha)?;
    let mut rng = make_rng(seed);
    for _ in 0..count {
        let permutation = EsfPermutation::sample(params, &mut rng);
        println!("{}", permutation.to_cycle_notation()?);
    }
    Ok(())
}

fn run_sweep(
    mut config: DriverConfig,
    n: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> CliResult<()> {
    if let Some(n) = n {
        config.sweep.n = n;
    }
    let mut rng = make_rng(seed.or(config.sweep.seed));
    for alpha in config.sweep.alphas() {
        let params = EsfParameters::new(config.sweep.n, alpha)?;
        let permutation = EsfPermutation::sample(params, &mut rng);
        let text = permutation.to_cycle_notation()?;
        if json {
            let record = SweepRecord {
                alpha,
                cycles: permutation.cycle_count(),
                permutation: &text,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("({alpha:.1}, {text})");
        }
    }
    Ok(())
}

fn run_stats(n: i64, alpha: f64, trials: u64, seed: Option<u64>) -> CliResult<()> {
    if trials == 0 {
        return Err("trials must be greater than zero".into());
    }
    let params = EsfParameters::try_new(n, alpha)?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("stats run n={} alpha={} trials={trials} seed={seed}", params.n(), params.alpha());

    let bar = ProgressBar::new(trials);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} trials ({eta})")?
            .progress_chars("=> "),
    );
    let counts = sample_cycle_counts(&params, trials, seed, || bar.inc(1));
    bar.finish_and_clear();

    let summary = summarize(&params, &counts).ok_or("no trials were sampled")?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &CycleCountSummary) {
    println!(
        "n = {}, alpha = {}, trials = {}",
        summary.n, summary.alpha, summary.trials
    );
    println!(
        "  cycles: mean {:.4} (exact {:.4}), variance {:.4} (exact {:.4})",
        summary.mean, summary.expected_mean, summary.variance, summary.expected_variance
    );
    println!("  z-score of mean: {:+.3}", summary.z_score());
}
