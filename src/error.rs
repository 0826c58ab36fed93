//! When parsing a seed or configuring a search goes wrong.

use std::error;
use std::fmt::{self, Debug, Display};
use std::result;

/// This type represents all possible errors that can occur when turning a
/// decimal string into a digit array or starting a search.
///
/// Running out of iterations or out of digit slots is not an error; those are
/// reported through [`Outcome`](crate::Outcome).
pub struct Error {
    /// This `Box` keeps `Result<T, Error>` one word wide, which matters for
    /// the functions returning it once per seed in a scan.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `revadd::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column of the character that caused the error.
    ///
    /// Errors that are not tied to a position in the input, such as an empty
    /// string or a zero iteration budget, report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that is not a string of decimal digits
    /// - `Category::Data` - well-formed input that is not an acceptable value
    /// - `Category::Capacity` - a number too long for the buffers on offer
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::EmptyNumber | ErrorCode::InvalidDigit => Category::Syntax,
            ErrorCode::NotPositive | ErrorCode::ZeroIterations => Category::Data,
            ErrorCode::CapacityExceeded { .. } => Category::Capacity,
        }
    }

    /// Returns true if this error was caused by input that was not a string
    /// of decimal digits.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a well-formed but unusable
    /// value, such as zero.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    /// Returns true if this error was caused by a number with more digits
    /// than the buffer may hold.
    ///
    /// The search driver turns this into
    /// [`Outcome::CapacityOverflow`](crate::Outcome::CapacityOverflow)
    /// instead of returning it.
    pub fn is_capacity(&self) -> bool {
        self.classify() == Category::Capacity
    }
}

/// Categorizes the cause of a `revadd::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The input was not a non-empty string of ASCII decimal digits.
    Syntax,

    /// The input was well-formed but not acceptable.
    ///
    /// For example, `"000"` parses as digits but is not a positive integer.
    Data,

    /// The number needed more digit slots than the capacity policy grants.
    Capacity,
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describes all possible errors that can occur when parsing a seed
/// or starting a search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// The input string was empty.
    EmptyNumber,

    /// A character other than `'0'..='9'` was found.
    InvalidDigit,

    /// Every digit was zero.
    NotPositive,

    /// An iteration budget of zero was requested.
    ZeroIterations,

    /// The canonical number has more digits than allowed.
    CapacityExceeded {
        /// Digits in the number after dropping leading zeros.
        digits: usize,
        /// Largest digit count the buffer strategy accepts.
        max: usize,
    },
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }

    #[cold]
    pub(crate) fn data(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column: 0 }),
        }
    }

    #[cold]
    pub(crate) fn capacity(digits: usize, max: usize) -> Self {
        Error::data(ErrorCode::CapacityExceeded { digits, max })
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyNumber => f.write_str("empty number"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit"),
            ErrorCode::NotPositive => f.write_str("number must be positive"),
            ErrorCode::ZeroIterations => f.write_str("iteration budget must be at least 1"),
            ErrorCode::CapacityExceeded { digits, max } => f.write_fmt(format_args!(
                "number of {} digits exceeds capacity of {} digits",
                digits, max
            )),
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}
