#[cfg(test)]
mod tests;

// Home of functions to compute 1 + 2 + ... + n.

use rayon::{ThreadPool, prelude::*};
use std::hint::black_box;

/// Sum of the first `n` positive integers, using the closed form
///
/// ```text
/// n (n + 1) / 2
/// ```
///
/// Exact whenever the sum fits in a `u64`, which holds for every
/// `n <= 6_074_000_999`. Past that the result wraps, i.e. it is the true
/// sum modulo 2^64, the same value [`add_up_to_loop`] arrives at.
///
/// __Arguments:__
///
/// + `n` - number of terms; `add_up_to(0)` is the empty sum `0`
///
pub fn add_up_to(n: u64) -> u64 {
    // halve whichever factor is even first, so only the product can wrap
    if n % 2 == 0 {
        (n / 2).wrapping_mul(n.wrapping_add(1))
    } else {
        // (n + 1) / 2 without computing n + 1
        n.wrapping_mul(n / 2 + 1)
    }
}

/// Like [`add_up_to`], but returns `None` instead of wrapping when the sum
/// does not fit in a `u64`.
pub fn checked_add_up_to(n: u64) -> Option<u64> {
    if n % 2 == 0 {
        (n / 2).checked_mul(n.checked_add(1)?)
    } else {
        n.checked_mul(n / 2 + 1)
    }
}

/// The O(n) reference: adds the terms one at a time.
///
/// Kept around to compare against the closed form; wraps on overflow so it
/// agrees with [`add_up_to`] for every input.
pub fn add_up_to_loop(n: u64) -> u64 {
    let mut total: u64 = 0;
    for i in 1..=n {
        // each term goes through black_box, or LLVM folds the loop back
        // into the closed form
        total = total.wrapping_add(black_box(i));
    }
    total
}

// parallel loop implementation

fn add_up_to_par_internal(n: u64) -> u64 {
    // rayon splits the range into jobs and combines the partial sums;
    // black_box keeps each job from being folded into a closed form
    (1..=n)
        .into_par_iter()
        .map(black_box)
        .reduce(|| 0, |a, b| a.wrapping_add(b))
}

/// The O(n) loop with the range split into rayon jobs.
///
/// __Arguments:__
///
/// + `n` - number of terms
///
/// + `thread_pool` - Rayon thread pool to execute the computation within
///
pub fn add_up_to_par(n: u64, thread_pool: &ThreadPool) -> u64 {
    thread_pool.install(|| add_up_to_par_internal(n))
}
