//! The reverse-and-add convergence driver.

use crate::capacity::Capacity;
use crate::digits::{add_reversed, is_palindrome, parse_into, Digits};
use crate::error::{Error, ErrorCode, Result};
use std::mem;
use tracing::{debug, trace};

/// How a search ended.
///
/// Only `Found` carries data. `Exhausted` and `CapacityOverflow` are kept
/// apart so callers can tell "ran out of patience" from "ran out of room".
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Outcome {
    /// A palindrome was reached.
    Found {
        /// Number of addition steps taken, counting from 1.
        iterations: u32,
        /// The palindrome.
        value: Digits,
    },

    /// The iteration budget ran out before a palindrome appeared.
    Exhausted,

    /// The seed or an intermediate value needed more digit slots than the
    /// capacity policy grants.
    CapacityOverflow,
}

impl Outcome {
    /// Returns true if a palindrome was reached.
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }

    /// Steps taken to reach the palindrome, if one was reached.
    pub fn iterations(&self) -> Option<u32> {
        match self {
            Outcome::Found { iterations, .. } => Some(*iterations),
            _ => None,
        }
    }

    /// The palindrome, if one was reached.
    pub fn value(&self) -> Option<&Digits> {
        match self {
            Outcome::Found { value, .. } => Some(value),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum State {
    Running,
    Found,
    Overflow,
}

/// A reverse-and-add search in progress.
///
/// `Search` owns a pair of digit buffers sized once by a [`Capacity`]
/// policy. Each step writes the sum of the current value and its reversal
/// into the spare buffer and swaps the two, so the loop never copies or
/// reallocates.
///
/// Unlike [`search`], a `Search` can be resumed: after
/// [`Outcome::Exhausted`] another call to [`run`](Search::run) continues from
/// the last value instead of starting over from the seed.
///
/// ```
/// use revadd::{Capacity, Outcome, Search};
///
/// let mut search = Search::new("89", 30, Capacity::default())?;
/// assert_eq!(search.run(20), Outcome::Exhausted);
/// assert_eq!(search.iterations(), 20);
///
/// let outcome = search.run(10);
/// assert_eq!(outcome.iterations(), Some(24));
/// # Ok::<(), revadd::Error>(())
/// ```
pub struct Search {
    current: Vec<u8>,
    next: Vec<u8>,
    slots: usize,
    iterations: u32,
    state: State,
}

impl Search {
    /// Parse `number` and allocate buffers for up to `max_iterations` steps.
    ///
    /// Fails only if `number` is not a positive decimal integer or the budget
    /// is zero. A seed too long for `capacity`, or buffers the allocator
    /// cannot provide, give a search whose first step reports
    /// [`Outcome::CapacityOverflow`].
    pub fn new(number: &str, max_iterations: u32, capacity: Capacity) -> Result<Self> {
        if max_iterations == 0 {
            return Err(Error::data(ErrorCode::ZeroIterations));
        }

        let mut current = Vec::new();
        parse_into(number, usize::MAX, &mut current)?;

        let max = capacity.max_seed_digits();
        if current.len() > max {
            debug!(
                target: "revadd",
                digits = current.len(),
                max,
                "seed_overflow"
            );
            return Ok(Search::overflowed(current));
        }

        // At least one slot more than the seed, for the carry.
        let slots = capacity.slots(current.len(), max_iterations);
        let mut next = Vec::new();
        if current.try_reserve_exact(slots - current.len()).is_err()
            || next.try_reserve_exact(slots).is_err()
        {
            debug!(
                target: "revadd",
                digits = current.len(),
                slots,
                "buffer_alloc_failed"
            );
            return Ok(Search::overflowed(current));
        }

        debug!(
            target: "revadd",
            digits = current.len(),
            slots,
            budget = max_iterations,
            "search_start"
        );

        Ok(Search {
            current,
            next,
            slots,
            iterations: 0,
            state: State::Running,
        })
    }

    fn overflowed(current: Vec<u8>) -> Self {
        Search {
            current,
            next: Vec::new(),
            slots: 0,
            iterations: 0,
            state: State::Overflow,
        }
    }

    /// Steps taken so far.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Digit slots per working buffer, or 0 if the search overflowed before
    /// any buffer was sized.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// The latest value, most significant digit first.
    ///
    /// Before the first step this is the canonical seed, even when the seed
    /// itself overflowed; after a palindrome is found it is the palindrome.
    pub fn current(&self) -> &[u8] {
        &self.current
    }

    /// Returns true once the search has reached a palindrome or overflowed.
    pub fn is_finished(&self) -> bool {
        self.state != State::Running
    }

    /// Perform exactly one reverse-and-add step.
    ///
    /// Returns `None` if the new value is not a palindrome and the search can
    /// go on, otherwise the terminal outcome. Once terminal, every further
    /// call returns the same outcome without doing any work.
    pub fn step(&mut self) -> Option<Outcome> {
        if let Some(outcome) = self.terminal() {
            return Some(outcome);
        }

        if self.current.len() >= self.slots {
            trace!(
                target: "revadd",
                digits = self.current.len(),
                slots = self.slots,
                iteration = self.iterations,
                "capacity_overflow"
            );
            self.state = State::Overflow;
            return Some(Outcome::CapacityOverflow);
        }

        add_reversed(&self.current, &mut self.next);
        mem::swap(&mut self.current, &mut self.next);
        self.iterations += 1;

        if is_palindrome(&self.current) {
            self.state = State::Found;
            return Some(self.found());
        }
        None
    }

    /// Run at most `budget` more steps.
    ///
    /// Returns [`Outcome::Exhausted`] if all of them were taken without
    /// reaching a palindrome; the search can then be resumed.
    pub fn run(&mut self, budget: u32) -> Outcome {
        if let Some(outcome) = self.terminal() {
            return outcome;
        }

        for _ in 0..budget {
            if let Some(outcome) = self.step() {
                match &outcome {
                    Outcome::Found { iterations, value } => debug!(
                        target: "revadd",
                        iterations,
                        digits = value.len(),
                        "palindrome_found"
                    ),
                    _ => debug!(
                        target: "revadd",
                        iterations = self.iterations,
                        digits = self.current.len(),
                        "capacity_overflow"
                    ),
                }
                return outcome;
            }
        }

        debug!(
            target: "revadd",
            iterations = self.iterations,
            digits = self.current.len(),
            "budget_exhausted"
        );
        Outcome::Exhausted
    }

    fn terminal(&self) -> Option<Outcome> {
        match self.state {
            State::Running => None,
            State::Found => Some(self.found()),
            State::Overflow => Some(Outcome::CapacityOverflow),
        }
    }

    fn found(&self) -> Outcome {
        Outcome::Found {
            iterations: self.iterations,
            value: Digits::from_canonical(self.current.clone()),
        }
    }
}

/// Search for a palindrome under the default dynamic [`Capacity`].
///
/// ```
/// use revadd::Outcome;
///
/// let outcome = revadd::search("89", 30)?;
/// assert_eq!(outcome.iterations(), Some(24));
/// assert_eq!(outcome.value().unwrap().to_string(), "8813200023188");
///
/// assert_eq!(revadd::search("196", 1000)?, Outcome::Exhausted);
/// # Ok::<(), revadd::Error>(())
/// ```
///
/// # Errors
///
/// Fails if `number` is empty, contains anything but ASCII digits, or is
/// zero, and if `max_iterations` is zero.
pub fn search(number: &str, max_iterations: u32) -> Result<Outcome> {
    search_with(number, max_iterations, Capacity::default())
}

/// Search for a palindrome with buffers sized by `capacity`.
///
/// ```
/// use revadd::{Capacity, Outcome};
///
/// let seed = "1".repeat(Capacity::FIXED_SLOTS);
/// let outcome = revadd::search_with(&seed, 10, Capacity::fixed())?;
/// assert_eq!(outcome, Outcome::CapacityOverflow);
/// # Ok::<(), revadd::Error>(())
/// ```
///
/// # Errors
///
/// Same as [`search`].
pub fn search_with(number: &str, max_iterations: u32, capacity: Capacity) -> Result<Outcome> {
    Ok(Search::new(number, max_iterations, capacity)?.run(max_iterations))
}
