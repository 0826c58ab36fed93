//! Helpers to convert between ASCII characters and digit values.

// Convert u8 to digit.
#[inline]
pub(crate) fn to_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        _ => None,
    }
}

// Convert digit to its ASCII character.
#[inline]
pub(crate) fn to_char(d: u8) -> char {
    debug_assert!(d < 10, "to_char() digit out of range.");
    (b'0' + d) as char
}
