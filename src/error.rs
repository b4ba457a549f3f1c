//! Error types for stream reading and byte processing.

use core::fmt;
use smallvec::SmallVec;

/// The main error type for all runtime operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read crossed the end of the stream.
    Eof(EofError),
    /// Fixed contents did not match the stream.
    Contents(ContentsError),
    /// The byte order of a format could not be decided.
    ///
    /// Never produced by the runtime itself; reserved for format
    /// descriptions whose byte order is resolved at parse time.
    UndecidedEndianness,
    /// A just-read value violated a declared constraint.
    Validation(ValidationError),
    /// A requested operation is outside what the runtime supports.
    Unsupported(UnsupportedError),
    /// An argument to a helper was out of its domain.
    Argument(ArgumentError),
    /// Byte data could not be decoded.
    Decode(DecodeError),
}

/// A read crossed the end of the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EofError {
    /// More bytes were requested than the stream holds.
    Bytes {
        /// The number of bytes the read needed.
        requested: usize,
        /// The number of bytes left in the stream.
        available: usize,
    },
    /// The stream ended before a terminator was found.
    Terminator {
        /// The terminator sequence that was searched for.
        term: SmallVec<[u8; 8]>,
    },
}

/// Fixed contents did not match the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsError {
    /// The bytes the caller declared.
    pub expected: SmallVec<[u8; 16]>,
    /// The bytes the stream actually held.
    pub actual: SmallVec<[u8; 16]>,
}

/// A just-read value violated a declared constraint.
///
/// The payloads are rendered from the offending values at the failure
/// site, since validators run over arbitrary value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value was required to equal a specific value.
    NotEqual {
        /// The required value.
        expected: String,
        /// The value that was read.
        actual: String,
    },
    /// The value fell below a required minimum.
    LessThan {
        /// The required minimum.
        min: String,
        /// The value that was read.
        actual: String,
    },
    /// The value exceeded a required maximum.
    GreaterThan {
        /// The required maximum.
        max: String,
        /// The value that was read.
        actual: String,
    },
    /// The value was not a member of the required set.
    NotAnyOf {
        /// The value that was read.
        actual: String,
    },
    /// The value failed a general predicate.
    Expr {
        /// The value that was read.
        actual: String,
    },
}

impl ValidationError {
    /// An equality constraint failure.
    pub fn not_equal(expected: impl fmt::Debug, actual: impl fmt::Debug) -> Self {
        Self::NotEqual {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }

    /// A minimum-bound constraint failure.
    pub fn less_than(min: impl fmt::Debug, actual: impl fmt::Debug) -> Self {
        Self::LessThan {
            min: format!("{min:?}"),
            actual: format!("{actual:?}"),
        }
    }

    /// A maximum-bound constraint failure.
    pub fn greater_than(max: impl fmt::Debug, actual: impl fmt::Debug) -> Self {
        Self::GreaterThan {
            max: format!("{max:?}"),
            actual: format!("{actual:?}"),
        }
    }

    /// A set-membership constraint failure.
    pub fn not_any_of(actual: impl fmt::Debug) -> Self {
        Self::NotAnyOf {
            actual: format!("{actual:?}"),
        }
    }

    /// A general predicate failure.
    pub fn expr(actual: impl fmt::Debug) -> Self {
        Self::Expr {
            actual: format!("{actual:?}"),
        }
    }
}

/// A requested operation is outside what the runtime supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedError {
    /// A bit read asked for more than 32 bits at once.
    BitWidth(u32),
    /// A rotation was requested with a group size other than 1.
    RotateGroup(usize),
    /// An encoding label the runtime does not know.
    Encoding(String),
}

/// An argument to a helper was out of its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// The modulus divisor must be positive.
    NonPositiveDivisor(i64),
    /// The xor key must hold at least one byte.
    EmptyKey,
}

/// Byte data could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The data was not valid UTF-8.
    Utf8,
    /// The data was not valid UTF-16.
    Utf16,
    /// The data was not a valid zlib stream.
    Zlib(String),
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "[")?;
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{b:02x}")?;
    }
    write!(f, "]")
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof(e) => write!(f, "{e}"),
            Self::Contents(e) => write!(f, "{e}"),
            Self::UndecidedEndianness => write!(f, "byte order could not be decided"),
            Self::Validation(e) => write!(f, "{e}"),
            Self::Unsupported(e) => write!(f, "{e}"),
            Self::Argument(e) => write!(f, "{e}"),
            Self::Decode(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for EofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes {
                requested,
                available,
            } => write!(
                f,
                "end of stream: {requested} bytes requested, {available} available"
            ),
            Self::Terminator { term } => {
                write!(f, "end of stream before terminator ")?;
                write_hex(f, term)?;
                write!(f, " was found")
            }
        }
    }
}

impl fmt::Display for ContentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected contents: expected ")?;
        write_hex(f, &self.expected)?;
        write!(f, ", got ")?;
        write_hex(f, &self.actual)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEqual { expected, actual } => {
                write!(f, "value mismatch: expected {expected}, got {actual}")
            }
            Self::LessThan { min, actual } => {
                write!(f, "value {actual} is below the minimum {min}")
            }
            Self::GreaterThan { max, actual } => {
                write!(f, "value {actual} is above the maximum {max}")
            }
            Self::NotAnyOf { actual } => {
                write!(f, "value {actual} is not in the allowed set")
            }
            Self::Expr { actual } => {
                write!(f, "value {actual} failed its constraint")
            }
        }
    }
}

impl fmt::Display for UnsupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BitWidth(n) => {
                write!(f, "cannot read {n} bits at once, at most 32 are supported")
            }
            Self::RotateGroup(g) => {
                write!(f, "rotation with group size {g} is not supported yet")
            }
            Self::Encoding(label) => write!(f, "unknown encoding: {label}"),
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDivisor(b) => {
                write!(f, "modulus divisor must be positive, got {b}")
            }
            Self::EmptyKey => write!(f, "xor key must hold at least one byte"),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "invalid UTF-8 data"),
            Self::Utf16 => write!(f, "invalid UTF-16 data"),
            Self::Zlib(detail) => write!(f, "invalid zlib stream: {detail}"),
        }
    }
}

impl core::error::Error for Error {}
impl core::error::Error for EofError {}
impl core::error::Error for ContentsError {}
impl core::error::Error for ValidationError {}
impl core::error::Error for UnsupportedError {}
impl core::error::Error for ArgumentError {}
impl core::error::Error for DecodeError {}

impl From<EofError> for Error {
    fn from(e: EofError) -> Self {
        Self::Eof(e)
    }
}

impl From<ContentsError> for Error {
    fn from(e: ContentsError) -> Self {
        Self::Contents(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<UnsupportedError> for Error {
    fn from(e: UnsupportedError) -> Self {
        Self::Unsupported(e)
    }
}

impl From<ArgumentError> for Error {
    fn from(e: ArgumentError) -> Self {
        Self::Argument(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

/// Result type for all runtime operations.
pub type Result<T> = core::result::Result<T, Error>;

macro_rules! bail {
    ($err:expr) => {
        return Err($err.into())
    };
}

macro_rules! err {
    ($err:expr) => {
        Err($err.into())
    };
}

pub(crate) use bail;
pub(crate) use err;
