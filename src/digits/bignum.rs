//! Big integer type definition.

use super::digit::*;
use super::math::*;
use crate::error::{Error, ErrorCode, Result};
use std::fmt::{self, Debug, Display, Write as _};
use std::str::FromStr;

/// A positive integer stored as decimal digits, most significant first.
///
/// The stored sequence is never empty and has no leading zero.
///
/// ```
/// use revadd::Digits;
///
/// let n: Digits = "0089".parse().unwrap();
/// assert_eq!(n.as_slice(), &[8, 9]);
/// assert_eq!(n.add_reversed().to_string(), "187");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digits {
    /// Digit values in `0..=9`, in big-endian order.
    data: Vec<u8>,
}

impl Digits {
    /// Parse a decimal string, rejecting numbers longer than `max_digits`.
    ///
    /// Leading zeros are dropped before the length is checked, so `"007"`
    /// is accepted with a limit of 1.
    pub fn parse_with_limit(s: &str, max_digits: usize) -> Result<Self> {
        let mut data = Vec::new();
        parse_into(s, max_digits, &mut data)?;
        Ok(Digits { data })
    }

    /// Wrap digits that are already known to be canonical.
    pub(crate) fn from_canonical(data: Vec<u8>) -> Self {
        debug_assert!(!data.is_empty() && data[0] != 0);
        debug_assert!(data.iter().all(|&d| d < 10));
        Digits { data }
    }

    /// Borrow the digit values, most significant first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of decimal digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a `Digits` holds at least one digit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the number reads the same in both directions.
    #[inline]
    pub fn is_palindrome(&self) -> bool {
        is_palindrome(&self.data)
    }

    /// The sum of this number and its digit reversal.
    pub fn add_reversed(&self) -> Digits {
        let mut data = Vec::with_capacity(self.data.len() + 1);
        add_reversed(&self.data, &mut data);
        Digits { data }
    }

    /// Consume the number, returning its digit values.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// Validate `s` and write its canonical digit values into `out`.
///
/// `out` is cleared first; its allocation is kept.
pub(crate) fn parse_into(s: &str, max_digits: usize, out: &mut Vec<u8>) -> Result<()> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(Error::syntax(ErrorCode::EmptyNumber, 0));
    }
    if let Some(index) = bytes.iter().position(|&c| to_digit(c).is_none()) {
        return Err(Error::syntax(ErrorCode::InvalidDigit, index + 1));
    }

    let start = match bytes.iter().position(|&c| c != b'0') {
        Some(start) => start,
        None => return Err(Error::data(ErrorCode::NotPositive)),
    };
    let significant = &bytes[start..];
    if significant.len() > max_digits {
        return Err(Error::capacity(significant.len(), max_digits));
    }

    out.clear();
    out.extend(significant.iter().map(|&c| c - b'0'));
    Ok(())
}

impl FromStr for Digits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Digits::parse_with_limit(s, usize::MAX)
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.data.iter().try_for_each(|&d| f.write_char(to_char(d)))
    }
}

impl Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Digits({})", self)
    }
}

impl AsRef<[u8]> for Digits {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digits {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digits {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Digits, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DigitsVisitor;

        impl<'de> serde::de::Visitor<'de> for DigitsVisitor {
            type Value = Digits;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of decimal digits")
            }

            fn visit_str<E>(self, s: &str) -> std::result::Result<Digits, E>
            where
                E: serde::de::Error,
            {
                s.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DigitsVisitor)
    }
}
