//! Decimal digit arrays and the primitives of the reverse-and-add step.
//!
//! Numbers are plain `[u8]` slices of digit values, most significant first.
//! The functions here work on borrowed slices and caller-owned output
//! buffers so the search loop can run without allocating; [`Digits`] is the
//! owned, validated form handed across the public API.

// MODULES
mod bignum;
mod digit;
mod math;
mod slice;

// API
pub use self::bignum::Digits;
pub use self::math::{add_reversed, is_palindrome};

pub(crate) use self::bignum::parse_into;
pub(crate) use self::digit::to_char;
