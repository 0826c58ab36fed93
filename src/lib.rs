//! # revadd
//!
//! Reverse-and-add palindrome search over arbitrarily long decimal numbers.
//!
//! Starting from a seed, the number is repeatedly replaced by the sum of
//! itself and its digit reversal until the result reads the same both ways.
//! Most seeds get there within a few dozen steps; some, such as 196, have
//! never been seen to get there at all and are called Lychrel candidates.
//!
//! ```
//! use revadd::Outcome;
//!
//! # fn main() -> Result<(), revadd::Error> {
//! match revadd::search("89", 30)? {
//!     Outcome::Found { iterations, value } => {
//!         assert_eq!(iterations, 24);
//!         assert_eq!(value.to_string(), "8813200023188");
//!     }
//!     Outcome::Exhausted | Outcome::CapacityOverflow => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Digit arrays
//!
//! The arithmetic is done directly on arrays of decimal digits, most
//! significant first, with no general-purpose bignum underneath. Only the
//! operations the search needs exist: adding a number to its reversal and
//! testing for a palindrome. Both live in [`digits`] and work on borrowed
//! slices so that the search loop can run with two preallocated buffers.
//!
//! # Capacity
//!
//! How large those buffers are is decided by a [`Capacity`] policy, once, at
//! the start of every search:
//!
//! - [`Capacity::Fixed`] uses a constant number of digit slots, 4096 by
//!   default. Good for bounded exploratory scans.
//! - [`Capacity::Dynamic`] sizes the buffers from the seed length plus the
//!   iteration budget, since a number grows by at most one digit per step,
//!   and clamps that to a ceiling of 1,000,000 slots by default.
//!
//! A seed or intermediate value that does not fit ends the search with
//! [`Outcome::CapacityOverflow`], which is distinct from running out of
//! iterations ([`Outcome::Exhausted`]).
//!
//! # Scanning
//!
//! [`scan`](scan::scan) runs one search per seed and tallies the results.
//! Seeds come from anywhere that yields strings: the exhaustive
//! [`seeds::CanonicalSeeds`], the sampled [`candidates::Candidates`], or a
//! plain list.
//!
//! # Errors
//!
//! Only malformed input is an [`Error`]: an empty string, a character that is
//! not an ASCII digit, a number that is zero, or a zero iteration budget.
//!
//! # Logging
//!
//! Searches emit [`tracing`] events under the `revadd` target: `debug` when a
//! search starts and ends, `trace` when a step runs out of slots. No
//! subscriber is installed by this crate.

#![doc(html_root_url = "https://docs.rs/revadd/0.1.0")]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod candidates;
pub mod capacity;
pub mod delay;
pub mod digits;
pub mod error;
pub mod scan;
pub mod search;
pub mod seeds;

#[doc(inline)]
pub use crate::capacity::Capacity;
#[doc(inline)]
pub use crate::digits::Digits;
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::search::{search, search_with, Outcome, Search};
