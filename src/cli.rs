//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Contains the
//! execution logic for each subcommand: literal parsing, strategy dispatch,
//! witness RNG construction, and rayon configuration for range scans.

use std::time::Instant;

use anyhow::{Context, Result};
use longhand::{karatsuba, modular, primality, toom, BigInt, BigRational};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use tracing::{info, warn};

use super::{Cli, Strategy, Test};

fn parse_int(s: &str) -> Result<BigInt> {
    s.parse::<BigInt>()
        .with_context(|| format!("cannot parse {s:?} as a decimal integer"))
}

fn parse_rat(s: &str) -> Result<BigRational> {
    s.parse::<BigRational>()
        .with_context(|| format!("cannot parse {s:?} as a rational"))
}

/// Witness RNG for the probabilistic tests: seeded for reproducible runs,
/// OS-random otherwise.
pub fn witness_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_os_rng(),
    }
}

// ── Arithmetic Commands ─────────────────────────────────────────

pub fn run_mul(a: &str, b: &str, strategy: Strategy) -> Result<()> {
    let a = parse_int(a)?;
    let b = parse_int(b)?;
    let start = Instant::now();
    let product = match strategy {
        Strategy::Schoolbook => &a * &b,
        Strategy::Karatsuba => karatsuba::mul(&a, &b),
        Strategy::Toom3 => toom::mul3(&a, &b),
        Strategy::Toom5 => toom::mul5(&a, &b),
    };
    info!(
        strategy = ?strategy,
        digits = product.digit_len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "multiplication finished"
    );
    println!("{product}");
    Ok(())
}

pub fn run_div(a: &str, b: &str) -> Result<()> {
    let a = parse_int(a)?;
    let b = parse_int(b)?;
    let (q, r) = a.div_rem(&b)?;
    println!("quotient {q}");
    println!("remainder {r}");
    Ok(())
}

pub fn run_pow_mod(base: &str, exponent: &str, modulus: &str) -> Result<()> {
    let base = parse_int(base)?;
    let exponent = parse_int(exponent)?;
    let modulus = parse_int(modulus)?;
    if exponent.is_negative() {
        anyhow::bail!("exponent must be non-negative");
    }
    let result = modular::mod_pow(&base, &exponent, &modulus)?;
    println!("{result}");
    Ok(())
}

pub fn run_jacobi(a: &str, n: &str) -> Result<()> {
    let a = parse_int(a)?;
    let n = parse_int(n)?;
    println!("{}", modular::jacobi(&a, &n));
    Ok(())
}

pub fn run_rat(lhs: &str, op: &str, rhs: &str) -> Result<()> {
    let lhs = parse_rat(lhs)?;
    let rhs = parse_rat(rhs)?;
    let result = match op {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        "/" => lhs.checked_div(&rhs)?,
        other => anyhow::bail!("unknown operator {other:?}, expected one of + - * /"),
    };
    println!("{result}");
    Ok(())
}

// ── Primality Commands ──────────────────────────────────────────

pub fn run_is_prime(cli: &Cli, n: &str, test: Test) -> Result<()> {
    let n = parse_int(n)?;
    let mut rng = witness_rng(cli.seed);
    let start = Instant::now();
    let probably_prime = match test {
        Test::Miller => primality::miller_rabin(&n, cli.rounds, &mut rng),
        Test::Solovay => primality::solovay_strassen(&n, cli.rounds, &mut rng),
    };
    info!(
        test = ?test,
        rounds = cli.rounds,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "primality test finished"
    );
    if probably_prime {
        println!("{n} is probably prime");
    } else {
        println!("{n} is composite");
    }
    Ok(())
}

pub fn run_mersenne(cli: &Cli, p: u32) -> Result<()> {
    // Lucas-Lehmer applies to prime exponents only; screen p before the test
    let mut rng = witness_rng(cli.seed);
    if !primality::miller_rabin(&BigInt::from(p), cli.rounds, &mut rng) {
        println!("exponent {p} is not prime, so 2^{p} - 1 is composite");
        return Ok(());
    }
    let start = Instant::now();
    let prime = primality::lucas_lehmer(p);
    info!(
        p,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Lucas-Lehmer finished"
    );
    if prime {
        println!("2^{p} - 1 is prime");
    } else {
        println!("2^{p} - 1 is composite");
    }
    Ok(())
}

// ── Range Scan ──────────────────────────────────────────────────

/// Scan `[from, to]` with Miller-Rabin across the rayon pool. Each candidate
/// derives its witness stream from the base seed, so a seeded scan prints the
/// same primes regardless of work-stealing order.
pub fn run_scan(cli: &Cli, from: u64, to: u64) -> Result<()> {
    if from > to {
        anyhow::bail!("empty range: {from} > {to}");
    }
    let start = Instant::now();
    let rounds = cli.rounds;
    let seed = cli.seed;
    let primes: Vec<u64> = (from..=to)
        .into_par_iter()
        .filter(|&n| {
            let mut rng = match seed {
                Some(s) => ChaCha20Rng::seed_from_u64(s ^ n),
                None => ChaCha20Rng::from_os_rng(),
            };
            primality::miller_rabin(&BigInt::from(n), rounds, &mut rng)
        })
        .collect();
    for p in &primes {
        println!("{p}");
    }
    info!(
        found = primes.len(),
        tested = to - from + 1,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scan finished"
    );
    Ok(())
}

// ── Rayon Configuration ─────────────────────────────────────────

/// Configure the rayon global thread pool size.
pub fn configure_rayon(threads: Option<usize>) {
    if let Some(num_threads) = threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            warn!(error = %e, "Could not configure rayon thread pool");
        }
    }
}
