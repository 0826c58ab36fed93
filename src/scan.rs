//! Running one search per seed and tallying the outcomes.

use crate::capacity::Capacity;
use crate::error::{Error, ErrorCode, Result};
use crate::search::{search_with, Outcome};
use tracing::debug;

/// Settings shared by every search in a scan.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ScanConfig {
    /// Iteration budget per seed.
    pub max_iterations: u32,
    /// Smallest delay recorded as a [`Hit`].
    pub threshold: u32,
    /// Buffer policy for each search.
    pub capacity: Capacity,
}

impl ScanConfig {
    /// Scan with the given budget, no threshold and the default capacity.
    pub fn new(max_iterations: u32) -> Self {
        ScanConfig {
            max_iterations,
            threshold: 0,
            capacity: Capacity::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig::new(10_000)
    }
}

/// A seed whose delay reached the scan's threshold.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    /// The seed as given to the scan.
    pub seed: String,
    /// Iterations it took to reach a palindrome.
    pub delay: u32,
}

/// Aggregated outcomes of a scan.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Seeds searched.
    pub tested: u64,
    /// Seeds that reached a palindrome.
    pub found: u64,
    /// Seeds that used up their budget.
    pub exhausted: u64,
    /// Seeds that overflowed their buffers.
    pub overflowed: u64,
    /// Largest delay among the seeds that reached a palindrome.
    pub best: Option<Hit>,
    /// Seeds with a delay of at least the threshold, longest first.
    pub hits: Vec<Hit>,
}

impl Tally {
    /// Fold one outcome into the tally.
    pub fn record(&mut self, seed: &str, outcome: &Outcome, threshold: u32) {
        self.tested += 1;
        let delay = match outcome {
            Outcome::Found { iterations, .. } => *iterations,
            Outcome::Exhausted => {
                self.exhausted += 1;
                return;
            }
            Outcome::CapacityOverflow => {
                self.overflowed += 1;
                return;
            }
        };

        self.found += 1;
        if self.best.as_ref().map_or(true, |best| delay > best.delay) {
            self.best = Some(Hit {
                seed: seed.to_owned(),
                delay,
            });
        }
        if delay >= threshold {
            self.hits.push(Hit {
                seed: seed.to_owned(),
                delay,
            });
        }
    }
}

/// Search every seed in order and tally the outcomes.
///
/// ```
/// use revadd::scan::{scan, ScanConfig};
///
/// let config = ScanConfig { threshold: 20, ..ScanConfig::new(100) };
/// let tally = scan(["89", "98", "196", "10"], &config)?;
///
/// assert_eq!(tally.tested, 4);
/// assert_eq!(tally.found, 3);
/// assert_eq!(tally.exhausted, 1);
/// assert_eq!(tally.hits.len(), 2);
/// assert_eq!(tally.best.unwrap().delay, 24);
/// # Ok::<(), revadd::Error>(())
/// ```
///
/// # Errors
///
/// Stops at the first seed that is not a positive decimal integer, or
/// immediately if the budget is zero.
pub fn scan<I>(seeds: I, config: &ScanConfig) -> Result<Tally>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if config.max_iterations == 0 {
        return Err(Error::data(ErrorCode::ZeroIterations));
    }

    let mut tally = Tally::default();
    for seed in seeds {
        let seed = seed.as_ref();
        let outcome = search_with(seed, config.max_iterations, config.capacity)?;
        tally.record(seed, &outcome, config.threshold);
    }

    // Stable, so equal delays keep their input order.
    tally.hits.sort_by(|a, b| b.delay.cmp(&a.delay));

    debug!(
        target: "revadd::scan",
        tested = tally.tested,
        found = tally.found,
        exhausted = tally.exhausted,
        overflowed = tally.overflowed,
        hits = tally.hits.len(),
        "scan_done"
    );
    Ok(tally)
}
