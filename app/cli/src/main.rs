use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simd_practice::{
    binary_search, AddConfig, PracticeError, RemainderPolicy, SimdConfig, SimdDispatcher,
    SortAlgorithm,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Practice driver: random sort/search plus SIMD array addition
#[derive(Parser)]
#[command(name = "practice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file path (JSON)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Sorting algorithm selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Stable merge sort
    Merge,
    /// In-place quick sort
    Quick,
}

impl From<Algorithm> for SortAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Merge => SortAlgorithm::Merge,
            Algorithm::Quick => SortAlgorithm::Quick,
        }
    }
}

/// Remainder handling selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Remainder {
    /// Fail when the count is not a multiple of the lane width
    Reject,
    /// Ignore elements past the last full lane-width group
    Truncate,
}

impl From<Remainder> for RemainderPolicy {
    fn from(remainder: Remainder) -> Self {
        match remainder {
            Remainder::Reject => RemainderPolicy::Reject,
            Remainder::Truncate => RemainderPolicy::Truncate,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sort random values, search one of them, then add two fixed arrays
    Demo {
        /// Number of random values to generate
        #[arg(short = 'n', long, default_value_t = 10)]
        size: usize,

        /// Seed for reproducible input
        #[arg(short, long)]
        seed: Option<u64>,

        /// Sorting algorithm
        #[arg(short, long, value_enum, default_value = "merge")]
        algorithm: Algorithm,
    },

    /// Add two comma-separated i32 lists element-wise
    Add {
        /// Left operand, e.g. 1,2,3,4
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        a: Vec<i32>,

        /// Right operand, e.g. 10,20,30,40
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        b: Vec<i32>,

        /// Number of leading elements to add (defaults to the shorter list)
        #[arg(long, allow_hyphen_values = true)]
        count: Option<i32>,

        /// Override the configured remainder policy
        #[arg(long, value_enum)]
        remainder: Option<Remainder>,

        /// Force the scalar kernel
        #[arg(long)]
        scalar: bool,

        /// Use the parallel path
        #[arg(long)]
        parallel: bool,
    },

    /// Generate and sort random values
    Sort {
        /// Number of random values to generate
        #[arg(short = 'n', long, default_value_t = 10)]
        size: usize,

        /// Seed for reproducible input
        #[arg(short, long)]
        seed: Option<u64>,

        /// Sorting algorithm
        #[arg(short, long, value_enum, default_value = "merge")]
        algorithm: Algorithm,
    },

    /// Generate and sort random values, then binary-search a target
    Search {
        /// Value to look for (defaults to a random generated value)
        #[arg(short, long)]
        target: Option<u16>,

        /// Number of random values to generate
        #[arg(short = 'n', long, default_value_t = 10)]
        size: usize,

        /// Seed for reproducible input
        #[arg(short, long)]
        seed: Option<u64>,

        /// Sorting algorithm
        #[arg(short, long, value_enum, default_value = "merge")]
        algorithm: Algorithm,
    },

    /// Display detected CPU features and the selected SIMD level
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity flags
    setup_logging(cli.verbose, cli.quiet);

    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else {
        AddConfig::default()
    };

    match cli.command {
        Commands::Demo {
            size,
            seed,
            algorithm,
        } => demo_command(size, seed, algorithm.into(), config)?,
        Commands::Add {
            a,
            b,
            count,
            remainder,
            scalar,
            parallel,
        } => {
            let mut config = config;
            if let Some(remainder) = remainder {
                config = config.with_remainder_policy(remainder.into());
            }
            if scalar {
                config = config.with_simd_config(SimdConfig::disabled());
            }
            add_command(&a, &b, count, parallel, config)?
        }
        Commands::Sort {
            size,
            seed,
            algorithm,
        } => sort_command(size, seed, algorithm.into())?,
        Commands::Search {
            target,
            size,
            seed,
            algorithm,
        } => search_command(target, size, seed, algorithm.into())?,
        Commands::Info => info_command(config),
    }

    Ok(())
}

/// Set up logging based on verbosity flags
fn setup_logging(verbose: bool, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logging initialized at {} level", log_level);
}

/// Load configuration from a JSON file
fn load_config(path: &Path) -> Result<AddConfig> {
    let config = AddConfig::from_file(path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))?;
    debug!("Loaded configuration from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Seeded generator when a seed is given, otherwise seeded from `rand::rng()`
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Generate `size` random u16 values
fn random_values(rng: &mut StdRng, size: usize) -> Vec<u16> {
    (0..size).map(|_| rng.random::<u16>()).collect()
}

/// Generate and sort, logging how long the sort took
fn generate_sorted(rng: &mut StdRng, size: usize, algorithm: SortAlgorithm) -> (Vec<u16>, Vec<u16>) {
    let input = random_values(rng, size);
    let mut sorted = input.clone();

    let start = Instant::now();
    algorithm.sort(&mut sorted);
    debug!(
        "{} sort of {} values took {:.3}ms",
        algorithm,
        size,
        start.elapsed().as_secs_f64() * 1000.0
    );

    (input, sorted)
}

/// Find `target` (or a random element) in `sorted`
fn search_sorted(
    rng: &mut StdRng,
    sorted: &[u16],
    target: Option<u16>,
) -> Result<(u16, Option<usize>)> {
    let target = match target {
        Some(target) => target,
        None => {
            if sorted.is_empty() {
                return Err(PracticeError::EmptyInput)
                    .context("Cannot pick a search target from an empty input");
            }
            sorted[rng.random_range(0..sorted.len())]
        }
    };
    Ok((target, binary_search(sorted, &target)))
}

/// Format values as a space-separated line
fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Execute the demo command
fn demo_command(
    size: usize,
    seed: Option<u64>,
    algorithm: SortAlgorithm,
    config: AddConfig,
) -> Result<()> {
    let mut rng = make_rng(seed);

    let (input, sorted) = generate_sorted(&mut rng, size, algorithm);
    println!("input:  {}", join(&input));
    println!("sorted: {}", join(&sorted));

    if sorted.is_empty() {
        warn!("No values generated, skipping search");
    } else {
        let (target, index) = search_sorted(&mut rng, &sorted, None)?;
        match index {
            Some(index) => println!("found {} at index {}", target, index),
            None => println!("{} not found", target),
        }
    }

    let src1 = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];
    let src2 = [10, 20, 30, 40, 50, 60, 70, 80, 0, 0];
    let mut dst = [0; 10];

    let dispatcher = SimdDispatcher::with_config(config);
    info!("Adding arrays with {}", dispatcher.level());
    let written = dispatcher
        .vector_add(&src1, &src2, &mut dst, 8)
        .context("Array sum failed")?;
    println!("{}", join(&dst[..written]));

    Ok(())
}

/// Execute the add command
fn add_command(
    a: &[i32],
    b: &[i32],
    count: Option<i32>,
    parallel: bool,
    config: AddConfig,
) -> Result<()> {
    let count = match count {
        Some(count) => count,
        None => i32::try_from(a.len().min(b.len())).context("Input lists are too long")?,
    };
    let mut out = vec![0; a.len().max(b.len())];

    let dispatcher = SimdDispatcher::with_config(config);
    info!(
        "Adding {} elements with {} (remainder: {})",
        count,
        dispatcher.level(),
        dispatcher.config().remainder
    );

    let start = Instant::now();
    let written = if parallel {
        dispatcher.par_vector_add(a, b, &mut out, count)
    } else {
        dispatcher.vector_add(a, b, &mut out, count)
    }
    .context("Vector add failed")?;
    debug!(
        "Added {} elements in {:.3}ms",
        written,
        start.elapsed().as_secs_f64() * 1000.0
    );

    if written < count.max(0) as usize {
        warn!(
            "Truncated to {} elements; {} trailing elements ignored",
            written,
            count as usize - written
        );
    }

    println!("{}", join(&out[..written]));
    Ok(())
}

/// Execute the sort command
fn sort_command(size: usize, seed: Option<u64>, algorithm: SortAlgorithm) -> Result<()> {
    let mut rng = make_rng(seed);
    let (input, sorted) = generate_sorted(&mut rng, size, algorithm);
    println!("input:  {}", join(&input));
    println!("sorted: {}", join(&sorted));
    Ok(())
}

/// Execute the search command
fn search_command(
    target: Option<u16>,
    size: usize,
    seed: Option<u64>,
    algorithm: SortAlgorithm,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let (_, sorted) = generate_sorted(&mut rng, size, algorithm);
    println!("sorted: {}", join(&sorted));

    let (target, index) = search_sorted(&mut rng, &sorted, target)?;
    match index {
        Some(index) => println!("found {} at index {}", target, index),
        None => println!("{} not found", target),
    }
    Ok(())
}

/// Execute the info command
fn info_command(config: AddConfig) {
    let dispatcher = SimdDispatcher::with_config(config);
    let features = dispatcher.features();

    println!("=== SIMD Information ===\n");
    println!("Architecture: {}", std::env::consts::ARCH);
    println!("AVX-512: {}", yes_no(features.avx512));
    println!("AVX2: {}", yes_no(features.avx2));
    println!("SSE2: {}", yes_no(features.sse2));
    println!("NEON: {}", yes_no(features.neon));
    println!("Selected level: {}", dispatcher.level());
    println!("Vector width: {} lanes", dispatcher.level().vector_width());
    println!("Remainder policy: {}", dispatcher.config().remainder);
    println!(
        "Parallel threshold: {} elements",
        dispatcher.config().parallel_threshold
    );
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
