//! Input-shape generators for exercising sort-driving code.
//! Currently limited to i32 values.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let dist: rand::distributions::Uniform<i32> = range.into();
    let mut rng = seeded_rng();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    let mut rng = seeded_rng();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    std::iter::repeat(66).take(len).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  .:  :.
    // :::.:::.::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_size = (len / saw_count.max(1)).max(1);
    let directions = random_uniform(len / chunk_size + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunk_size).enumerate() {
        if directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let mid = len / 2;

    vals[..mid].sort_unstable();
    vals[mid..].sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every pattern call draw a fresh seed instead of the per-process
/// fixed one. Tests want repeatability, benchmarks want fresh inputs.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn seeded_rng() -> StdRng {
    // Random seed, but kept stable per process for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
