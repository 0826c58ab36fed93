//! Randomly drawn seeds for exploratory scans.
//!
//! Where [`CanonicalSeeds`](crate::seeds::CanonicalSeeds) walks a digit
//! length exhaustively, these generators sample it. Each one is driven by a
//! [`StdRng`] seeded from a `u64`, so the same seed reproduces the same
//! candidates for a given `rand` release, and each yields `String`s that can
//! be fed straight to [`scan`](crate::scan::scan).
//!
//! ```
//! use revadd::candidates::Candidates;
//! use revadd::scan::{scan, ScanConfig};
//!
//! let config = ScanConfig { threshold: 50, ..ScanConfig::new(300) };
//! let tally = scan(Candidates::biased(11, 100, 42), &config)?;
//! assert_eq!(tally.tested, 100);
//! # Ok::<(), revadd::Error>(())
//! ```

use crate::digits::{to_char, Digits};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Relative weight of each digit `0` to `9` in [`Candidates::biased`].
///
/// Long delays come from carry cascades, which mixes of low digits with 8s
/// and 9s produce, so those are favoured.
pub const DIGIT_WEIGHTS: [u32; 10] = [3, 3, 1, 1, 1, 1, 1, 1, 3, 5];

const TOTAL_WEIGHT: u32 = 20;

/// The most delayed seed known for a digit length, with its delay.
///
/// ```
/// use revadd::candidates::known_record;
///
/// assert_eq!(known_record(19), Some(("1186060307891929990", 261)));
/// assert_eq!(known_record(20), None);
/// ```
pub fn known_record(num_digits: usize) -> Option<(&'static str, u32)> {
    match num_digits {
        19 => Some(("1186060307891929990", 261)),
        23 => Some(("13968441660506503386020", 289)),
        25 => Some(("1000206827388999999095750", 293)),
        _ => None,
    }
}

#[derive(Clone, Debug)]
enum Strategy {
    Uniform { num_digits: usize },
    Biased { num_digits: usize },
    NearRecord { record: Vec<u8> },
}

/// A finite stream of randomly generated seeds.
#[derive(Clone, Debug)]
pub struct Candidates {
    rng: StdRng,
    strategy: Strategy,
    remaining: usize,
}

impl Candidates {
    fn new(strategy: Strategy, count: usize, seed: u64) -> Self {
        Candidates {
            rng: StdRng::seed_from_u64(seed),
            strategy,
            remaining: count,
        }
    }

    /// `count` seeds drawn uniformly from the `num_digits`-digit numbers.
    pub fn uniform(num_digits: usize, count: usize, seed: u64) -> Self {
        let count = if num_digits == 0 { 0 } else { count };
        Candidates::new(Strategy::Uniform { num_digits }, count, seed)
    }

    /// `count` seeds of `num_digits` digits that start with `1` and draw the
    /// remaining digits by [`DIGIT_WEIGHTS`].
    pub fn biased(num_digits: usize, count: usize, seed: u64) -> Self {
        let count = if num_digits == 0 { 0 } else { count };
        Candidates::new(Strategy::Biased { num_digits }, count, seed)
    }

    /// `count` perturbations of `record`, each rewriting one to three of its
    /// digits after the first with random digits.
    ///
    /// The leading digit is never touched, so every candidate keeps the
    /// record's length.
    pub fn near_record(record: &Digits, count: usize, seed: u64) -> Self {
        let record = record.as_slice().to_vec();
        Candidates::new(Strategy::NearRecord { record }, count, seed)
    }

    /// Perturbations of the [`known_record`] for `num_digits`, or
    /// [`biased`](Candidates::biased) seeds if there is none.
    pub fn near_known_record(num_digits: usize, count: usize, seed: u64) -> Self {
        match known_record(num_digits) {
            Some((record, _)) => {
                let record = record.bytes().map(|c| c - b'0').collect();
                Candidates::new(Strategy::NearRecord { record }, count, seed)
            }
            None => Candidates::biased(num_digits, count, seed),
        }
    }
}

fn weighted_digit(rng: &mut StdRng) -> u8 {
    let mut pick = rng.random_range(0..TOTAL_WEIGHT);
    for (digit, &weight) in (0u8..).zip(DIGIT_WEIGHTS.iter()) {
        if pick < weight {
            return digit;
        }
        pick -= weight;
    }
    9
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let rng = &mut self.rng;
        let seed: String = match &self.strategy {
            Strategy::Uniform { num_digits } => (0..*num_digits)
                .map(|i| {
                    let low: u8 = if i == 0 { 1 } else { 0 };
                    to_char(rng.random_range(low..=9))
                })
                .collect(),
            Strategy::Biased { num_digits } => (0..*num_digits)
                .map(|i| to_char(if i == 0 { 1 } else { weighted_digit(rng) }))
                .collect(),
            Strategy::NearRecord { record } => {
                let mut digits = record.clone();
                let tail = digits.len() - 1;
                let changes = rng.random_range(1..=3usize).min(tail);
                let positions = index::sample(rng, tail, changes);
                for pos in positions.iter() {
                    digits[pos + 1] = rng.random_range(0..=9);
                }
                digits.into_iter().map(to_char).collect()
            }
        };
        Some(seed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Candidates {}
