//! Enumeration of canonical seeds.
//!
//! The first reverse-and-add step only sees each number through the sums of
//! its mirrored digit pairs (first with last, second with second-to-last,
//! ...) and, for odd lengths, the middle digit. All seeds sharing those sums
//! have the same first iterate and therefore the same delay, so a search
//! over every `n`-digit number only needs one representative per pattern.
//!
//! ```
//! use revadd::seeds::CanonicalSeeds;
//!
//! let seeds: Vec<String> = CanonicalSeeds::new(2).collect();
//! assert_eq!(seeds.len(), 18);
//! assert_eq!(seeds[0], "10");
//! assert_eq!(seeds[10], "29");
//! assert_eq!(seeds[17], "99");
//! ```

use crate::digits::to_char;

/// The canonical digit pair whose sum is `sum`.
///
/// Picks the smallest left digit that keeps the right digit in range, and
/// never a zero on the left of a leading pair.
pub fn canonical_pair(sum: u8, leading: bool) -> (u8, u8) {
    debug_assert!(sum <= 18, "canonical_pair() sum out of range.");
    debug_assert!(!leading || sum >= 1, "canonical_pair() leading pair cannot sum to 0.");
    let floor = if leading { 1 } else { 0 };
    let left = sum.saturating_sub(9).max(floor);
    (left, sum - left)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Shape {
    Empty,
    Single,
    Paired,
}

/// Iterator over the canonical seeds with a given number of digits.
///
/// Seeds come out ordered by leading pair sum (1 to 18), then by the inner
/// pair sums from the outside in (0 to 18 each), then by the middle digit
/// for odd lengths. One-digit seeds are simply `1` to `9`.
#[derive(Clone, Debug)]
pub struct CanonicalSeeds {
    shape: Shape,
    num_digits: usize,
    leading: u8,
    inner: Vec<u8>,
    middle: Option<u8>,
    done: bool,
}

impl CanonicalSeeds {
    /// Enumerate the canonical seeds of `num_digits` digits.
    pub fn new(num_digits: usize) -> Self {
        let shape = match num_digits {
            0 => Shape::Empty,
            1 => Shape::Single,
            _ => Shape::Paired,
        };
        let pairs = num_digits / 2;
        CanonicalSeeds {
            shape,
            num_digits,
            leading: 1,
            inner: vec![0; pairs.saturating_sub(1)],
            middle: if shape == Shape::Paired && num_digits % 2 == 1 {
                Some(0)
            } else {
                None
            },
            done: shape == Shape::Empty,
        }
    }

    /// Number of seeds in the full enumeration, or `None` if it does not
    /// fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        match self.shape {
            Shape::Empty => Some(0),
            Shape::Single => Some(9),
            Shape::Paired => {
                let inner = 19u64.checked_pow(u32::try_from(self.inner.len()).ok()?)?;
                let middle = if self.middle.is_some() { 10 } else { 1 };
                18u64.checked_mul(inner)?.checked_mul(middle)
            }
        }
    }

    fn render(&self) -> String {
        if self.shape == Shape::Single {
            return to_char(self.leading).to_string();
        }

        let mut seed = String::with_capacity(self.num_digits);
        let (first, last) = canonical_pair(self.leading, true);
        seed.push(to_char(first));
        for &sum in &self.inner {
            seed.push(to_char(canonical_pair(sum, false).0));
        }
        if let Some(middle) = self.middle {
            seed.push(to_char(middle));
        }
        for &sum in self.inner.iter().rev() {
            seed.push(to_char(canonical_pair(sum, false).1));
        }
        seed.push(to_char(last));
        seed
    }

    fn advance(&mut self) {
        if self.shape == Shape::Single {
            if self.leading < 9 {
                self.leading += 1;
            } else {
                self.done = true;
            }
            return;
        }

        if let Some(middle) = &mut self.middle {
            if *middle < 9 {
                *middle += 1;
                return;
            }
            *middle = 0;
        }
        for sum in self.inner.iter_mut().rev() {
            if *sum < 18 {
                *sum += 1;
                return;
            }
            *sum = 0;
        }
        if self.leading < 18 {
            self.leading += 1;
        } else {
            self.done = true;
        }
    }
}

impl Iterator for CanonicalSeeds {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let seed = self.render();
        self.advance();
        Some(seed)
    }
}
