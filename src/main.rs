//! # Main — CLI Entry Point
//!
//! Routes CLI subcommands to the arithmetic and primality layers. Handles the
//! shared concerns: logging setup, witness RNG seeding, and the Rayon thread
//! pool configuration for range scans.
//!
//! ## Subcommands
//!
//! Arithmetic commands (mul, div, pow-mod, jacobi, rat) parse decimal
//! literals, run one operation, and print the result on stdout. Primality
//! commands (is-prime, mersenne, scan) print their verdicts on stdout and log
//! timing to stderr.
//!
//! ## Global Options
//!
//! - `--rounds`: witness rounds for the probabilistic tests (default 5).
//! - `--seed` / `LONGHAND_SEED`: fixed witness RNG seed for reproducible runs.
//! - `--threads`: Rayon thread pool size for `scan` (defaults to all cores).

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "longhand",
    about = "Arbitrary-precision decimal arithmetic and primality testing"
)]
struct Cli {
    /// Witness rounds for probabilistic primality tests (higher = more certain but slower)
    #[arg(long, default_value_t = 5)]
    rounds: u32,

    /// Seed for the witness RNG; runs with the same seed draw the same witnesses
    #[arg(long, env = "LONGHAND_SEED")]
    seed: Option<u64>,

    /// Number of rayon worker threads for range scans (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply two integers
    Mul {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Multiplication strategy
        #[arg(long, value_enum, default_value_t = Strategy::Schoolbook)]
        strategy: Strategy,
    },
    /// Divide two integers, printing quotient and remainder
    Div {
        /// Dividend
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Divisor
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Compute base^exponent mod modulus
    PowMod {
        /// Base
        #[arg(allow_hyphen_values = true)]
        base: String,
        /// Exponent (non-negative)
        exponent: String,
        /// Modulus (nonzero)
        #[arg(allow_hyphen_values = true)]
        modulus: String,
    },
    /// Compute the Jacobi symbol (a/n)
    Jacobi {
        /// Upper argument
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Lower argument (odd and positive)
        n: String,
    },
    /// Probabilistic primality test
    IsPrime {
        /// Candidate
        #[arg(allow_hyphen_values = true)]
        n: String,
        /// Test to run
        #[arg(long, value_enum, default_value_t = Test::Miller)]
        test: Test,
    },
    /// Lucas-Lehmer test for the Mersenne number 2^p - 1
    Mersenne {
        /// Exponent p (screened for primality before the test runs)
        p: u32,
    },
    /// Evaluate `lhs op rhs` over exact rationals
    Rat {
        /// Left operand, numer/denom or a bare integer
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// Operator: + - * /
        op: String,
        /// Right operand, numer/denom or a bare integer
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Scan a range of machine-word candidates for primes in parallel
    Scan {
        /// First candidate (inclusive)
        from: u64,
        /// Last candidate (inclusive)
        to: u64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    Schoolbook,
    Karatsuba,
    Toom3,
    Toom5,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Test {
    Miller,
    Solovay,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads);

    match &cli.command {
        Commands::Mul { a, b, strategy } => cli::run_mul(a, b, *strategy),
        Commands::Div { a, b } => cli::run_div(a, b),
        Commands::PowMod {
            base,
            exponent,
            modulus,
        } => cli::run_pow_mod(base, exponent, modulus),
        Commands::Jacobi { a, n } => cli::run_jacobi(a, n),
        Commands::IsPrime { n, test } => cli::run_is_prime(&cli, n, *test),
        Commands::Mersenne { p } => cli::run_mersenne(&cli, *p),
        Commands::Rat { lhs, op, rhs } => cli::run_rat(lhs, op, rhs),
        Commands::Scan { from, to } => cli::run_scan(&cli, *from, *to),
    }
}
