//! Statistical iteration cutoffs for abandoning Lychrel candidates early.
//!
//! Doucette's regression over known most-delayed palindromic numbers puts
//! the expected maximum delay of a `d`-digit seed at
//! `14.255934 * d - 17.320261` iterations with a standard deviation of
//! `11.087996`. A seed still running well past that point is almost certainly
//! a Lychrel candidate, so a search can stop there instead of spending the
//! whole budget.

/// Slope of the expected maximum delay per digit.
pub const SLOPE: f64 = 14.255934;

/// Intercept of the expected maximum delay.
pub const INTERCEPT: f64 = -17.320261;

/// Standard deviation of the maximum delay around the regression line.
pub const SIGMA: f64 = 11.087996;

/// Expected maximum delay over all seeds of `num_digits` digits.
pub fn expected_max_delay(num_digits: usize) -> f64 {
    SLOPE * num_digits as f64 + INTERCEPT
}

/// Iteration cutoff `sigma_multiplier` standard deviations above the
/// expected maximum delay, rounded up and never below 1.
///
/// ```
/// assert_eq!(revadd::delay::cutoff(13, 3.0), 202);
/// ```
pub fn cutoff(num_digits: usize, sigma_multiplier: f64) -> u32 {
    let limit = (expected_max_delay(num_digits) + sigma_multiplier * SIGMA).ceil();
    if limit < 1.0 {
        1
    } else if limit >= u32::MAX as f64 {
        u32::MAX
    } else {
        limit as u32
    }
}

/// The three-sigma cutoff.
pub fn adaptive_cutoff(num_digits: usize) -> u32 {
    cutoff(num_digits, 3.0)
}

/// Returns true once a `num_digits`-digit seed has run for as many
/// iterations as its three-sigma cutoff.
pub fn should_terminate(num_digits: usize, iteration: u32) -> bool {
    iteration >= adaptive_cutoff(num_digits)
}

/// Work saved by stopping at the adaptive cutoff instead of the full budget.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Savings {
    /// The three-sigma cutoff for the sampled digit count.
    pub cutoff: u32,
    /// Iterations spent when every candidate runs to `max_iterations`.
    pub without_cutoff: u64,
    /// Iterations spent when candidates stop at `cutoff`.
    pub with_cutoff: u64,
    /// `100 * (1 - with / without)`, or 0 when nothing was spent.
    pub percent: f64,
    /// Samples that never reached a palindrome.
    pub candidates: usize,
    /// Total number of samples.
    pub samples: usize,
}

/// Estimate the savings of [`adaptive_cutoff`] over a sample of delays.
///
/// Each entry of `delays` is the iteration count at which a seed reached a
/// palindrome, or `None` if it did not within `max_iterations`. Seeds that
/// converge cost their delay either way; the others cost `max_iterations`
/// without the cutoff and `cutoff` with it.
pub fn estimate_savings(num_digits: usize, delays: &[Option<u32>], max_iterations: u32) -> Savings {
    let cutoff = adaptive_cutoff(num_digits);

    let mut without_cutoff = 0u64;
    let mut with_cutoff = 0u64;
    let mut candidates = 0;
    for delay in delays {
        match *delay {
            Some(delay) => {
                without_cutoff += u64::from(delay);
                with_cutoff += u64::from(delay);
            }
            None => {
                without_cutoff += u64::from(max_iterations);
                with_cutoff += u64::from(cutoff);
                candidates += 1;
            }
        }
    }

    let percent = if without_cutoff > 0 {
        (1.0 - with_cutoff as f64 / without_cutoff as f64) * 100.0
    } else {
        0.0
    };

    Savings {
        cutoff,
        without_cutoff,
        with_cutoff,
        percent,
        candidates,
        samples: delays.len(),
    }
}
