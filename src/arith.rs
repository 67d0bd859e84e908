//! The functions the demos memoize and time.

use cached::proc_macro::cached;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_ARG: u32 = 20;

/// `n!` computed the slow way: the factors are first collected into a
/// vector, then multiplied.
///
/// # Panics
///
/// If `n > MAX_FACTORIAL_ARG`, whose factorial does not fit in a `u64`.
pub fn factorial(n: u32) -> u64 {
    assert!(
        n <= MAX_FACTORIAL_ARG,
        "{}! does not fit in 64 bits, use checked_factorial",
        n
    );
    let factors: Vec<u64> = (1..=n as u64).collect();
    factors.iter().product()
}

/// `n!`, or an error when it does not fit in a `u64`.
pub fn checked_factorial(n: u32) -> Result<u64, String> {
    if n > MAX_FACTORIAL_ARG {
        return Err(format!("{}! does not fit in 64 bits", n));
    }
    (1..=n as u64)
        .try_fold(1u64, |acc, x| acc.checked_mul(x))
        .ok_or_else(|| format!("{}! does not fit in 64 bits", n))
}

/// Same computation as [`factorial`], memoized by the `cached` crate in a
/// process-wide store.
#[cached]
pub fn cached_factorial(n: u32) -> u64 {
    factorial(n)
}

/// One draw from an explicitly passed generator.
pub fn random_draw<R: Rng>(rng: &mut R) -> u32 {
    rng.gen()
}

/// First draw of a generator seeded with `seed`. Deterministic in `seed`.
pub fn seeded_draw(seed: u64) -> u32 {
    let mut rng = StdRng::seed_from_u64(seed);
    random_draw(&mut rng)
}
