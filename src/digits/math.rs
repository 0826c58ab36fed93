//! Building-blocks for reverse-and-add arithmetic.
//!
//! These algorithms assume big-endian order for the digit buffers, so for a
//! `vec![1, 8, 7]`, `1` is the most significant digit and `7` the least
//! significant one. Every element is a digit value in `0..=9`, not an ASCII
//! character.

use super::slice::*;

// PALINDROME

/// Check if the digits read the same in both directions.
///
/// Compares the digit at position `i` with the digit at position
/// `len - 1 - i`, stopping at the first mismatch. Does not allocate.
#[inline]
pub fn is_palindrome(x: &[u8]) -> bool {
    let rev = x.rview();
    (0..x.len() / 2).all(|i| x[i] == rev[i])
}

// ADDITION

/// Add the digits to their own reversal, storing the sum in `result`.
///
/// Position `i` from the least significant end of `x` is paired with
/// position `i` from the least significant end of the reversal, which is
/// position `i` from the front of `x`, and the pair is added with carry.
///
/// `result` is cleared and filled with `x.len() + 1` slots so a carry out of
/// the most significant position has somewhere to go. When there is no final
/// carry the unused leading slot is dropped. Returns the new length, which
/// is always `x.len()` or `x.len() + 1`.
///
/// No allocation happens if `result` already has `x.len() + 1` capacity.
///
/// # Panics
///
/// Every element of `x` must be in `0..=9`. Debug builds panic on an
/// element out of range; release builds produce a meaningless sum.
pub fn add_reversed(x: &[u8], result: &mut Vec<u8>) -> usize {
    debug_assert!(x.iter().all(|&d| d < 10), "add_reversed() digit out of range.");
    let len = x.len();
    result.clear();
    result.resize(len + 1, 0);

    let rev = x.rview();
    let mut carry = 0;
    for i in 0..len {
        let sum = rev[i] + x[i] + carry;
        carry = sum / 10;
        result[len - i] = sum % 10;
    }

    if carry != 0 {
        result[0] = carry;
    } else {
        result.copy_within(1.., 0);
        result.truncate(len);
    }
    result.len()
}

// TESTS
// -----
