//! Demonstration routines. Each writes human-readable lines to `out`.

use std::io::{self, Write};

use clap::ValueEnum;
use itertools::Itertools;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::arith::{self, MAX_FACTORIAL_ARG};
use crate::callable::Callable;
use crate::category::{compose, compose_applied, identity, multiply_by_two, plus_one};
use crate::kleisli::{safe_reciprocal, safe_root, safe_root_reciprocal};
use crate::memoizer::{Memoizer, TryMemoizer};
use crate::timing::{time_it, TimeUnit};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Demo {
    Categories,
    Kleisli,
    Memoization,
    Random,
    All,
}

/// Which memoization machinery backs the factorial demo.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Backend {
    Memoizer,
    Cached,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub number: u32,
    pub seed: u64,
    pub unit: TimeUnit,
    pub backend: Backend,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            number: MAX_FACTORIAL_ARG,
            seed: 1,
            unit: TimeUnit::Nanoseconds,
            backend: Backend::Memoizer,
        }
    }
}

const SAMPLE_INPUTS: [f64; 7] = [-2.0, -0.0, 0.0, 0.25, 2.0, 3.0, 4.0];

pub fn run<W: Write>(out: &mut W, demo: Demo, settings: &Settings) -> io::Result<()> {
    debug!("running {:?} with {:?}", demo, settings);
    match demo {
        Demo::Categories => categories(out),
        Demo::Kleisli => kleisli(out),
        Demo::Memoization => memoization(out, settings.number, settings.unit, settings.backend),
        Demo::Random => random(out, settings.seed, settings.unit),
        Demo::All => {
            categories(out)?;
            kleisli(out)?;
            memoization(out, settings.number, settings.unit, settings.backend)?;
            random(out, settings.seed, settings.unit)
        }
    }
}

pub fn categories<W: Write>(out: &mut W) -> io::Result<()> {
    let temp = 1;
    writeln!(out, "Identity of {} is {}", temp, identity(temp))?;

    let composed = compose(plus_one, multiply_by_two);
    writeln!(out, "plus_one . multiply_by_two at 5: {}", composed(5))?;

    let deferred = compose_applied(plus_one, multiply_by_two, 5);
    writeln!(out, "Composed function value: {}", deferred())
}

fn show(value: Option<f64>) -> String {
    match value {
        Some(x) => format!("{:.6}", x),
        None => String::from("none"),
    }
}

pub fn kleisli<W: Write>(out: &mut W) -> io::Result<()> {
    let partials: [(&str, fn(f64) -> Option<f64>); 3] = [
        ("safe_root", safe_root),
        ("safe_reciprocal", safe_reciprocal),
        ("safe_root_reciprocal", safe_root_reciprocal),
    ];
    for (name, f) in partials {
        let line = SAMPLE_INPUTS
            .iter()
            .map(|&x| format!("{} -> {}", x, show(f(x))))
            .join(", ");
        writeln!(out, "{}: {}", name, line)?;
    }
    Ok(())
}

pub fn memoization<W: Write>(out: &mut W, n: u32, unit: TimeUnit, backend: Backend) -> io::Result<()> {
    if n > MAX_FACTORIAL_ARG {
        info!("{} exceeds {}, using the checked factorial", n, MAX_FACTORIAL_ARG);
        return checked_memoization(out, n, unit);
    }

    let (first, first_elapsed, second, second_elapsed) = match backend {
        Backend::Memoizer => {
            let mut timed = time_it(Memoizer::new(|n: &u32| arith::factorial(*n)), unit)
                .with_label("memoized factorial");
            let first = timed.invoke(n);
            let first_elapsed = timed.last_count().unwrap_or_default();
            let second = timed.invoke(n);
            let second_elapsed = timed.last_count().unwrap_or_default();
            let memo = timed.into_inner();
            debug!("memoizer holds {} entries", memo.len());
            writeln!(out, "cache: {} hits, {} misses", memo.hits(), memo.misses())?;
            (first, first_elapsed, second, second_elapsed)
        }
        Backend::Cached => {
            let mut timed = time_it(arith::cached_factorial, unit).with_label("cached factorial");
            let first = timed.invoke(n);
            let first_elapsed = timed.last_count().unwrap_or_default();
            let second = timed.invoke(n);
            let second_elapsed = timed.last_count().unwrap_or_default();
            writeln!(out, "cache: process-wide store of the cached crate")?;
            (first, first_elapsed, second, second_elapsed)
        }
    };

    writeln!(out, "factorial({}) = {} (first call, {} {})", n, first, first_elapsed, unit)?;
    writeln!(out, "factorial({}) = {} (second call, {} {})", n, second, second_elapsed, unit)
}

fn checked_memoization<W: Write>(out: &mut W, n: u32, unit: TimeUnit) -> io::Result<()> {
    let mut timed = time_it(TryMemoizer::new(|n: &u32| arith::checked_factorial(*n)), unit)
        .with_label("checked factorial");
    for attempt in ["first", "second"] {
        let elapsed_line = |timed_count: Option<u128>| {
            timed_count.map_or(String::from("not measured"), |c| format!("{} {}", c, unit))
        };
        match timed.invoke(n) {
            Ok(value) => writeln!(
                out,
                "factorial({}) = {} ({} call, {})",
                n,
                value,
                attempt,
                elapsed_line(timed.last_count())
            )?,
            Err(e) => writeln!(
                out,
                "factorial({}) failed: {} ({} call, {})",
                n,
                e,
                attempt,
                elapsed_line(timed.last_count())
            )?,
        }
    }
    let memo = timed.into_inner();
    writeln!(out, "cache: {} hits, {} misses", memo.hits(), memo.misses())
}

pub fn random<W: Write>(out: &mut W, seed: u64, unit: TimeUnit) -> io::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = arith::random_draw(&mut rng);
    let b = arith::random_draw(&mut rng);
    let mut rng = StdRng::seed_from_u64(seed);
    let reseeded = arith::random_draw(&mut rng);
    writeln!(out, "draws with seed {}: {}, {}; after reseeding: {}", seed, a, b, reseeded)?;

    let mut timed = time_it(Memoizer::new(|seed: &u64| arith::seeded_draw(*seed)), unit)
        .with_label("memoized random");
    let first = timed.invoke(seed);
    let first_elapsed = timed.last_count().unwrap_or_default();
    let second = timed.invoke(seed);
    let second_elapsed = timed.last_count().unwrap_or_default();
    writeln!(out, "memoized draw: {} (first call, {} {})", first, first_elapsed, unit)?;
    writeln!(out, "memoized draw: {} (second call, {} {})", second, second_elapsed, unit)
}
