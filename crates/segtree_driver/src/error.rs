use std::fmt;
use std::io;

/// Failure while reading the command stream or writing answers.
#[derive(Debug)]
pub enum DriverError {
    Io(io::Error),
    UnexpectedEof { expected: &'static str },
    InvalidInteger { expected: &'static str, token: String },
    NegativeCount { expected: &'static str, value: i64 },
    UnknownCommand { token: String },
    /// A 1-indexed bound below 1.
    InvalidBound { value: i64 },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            Self::InvalidInteger { expected, token } => {
                write!(f, "expected {expected}, found `{token}`")
            }
            Self::NegativeCount { expected, value } => {
                write!(f, "{expected} must be non-negative, found {value}")
            }
            Self::UnknownCommand { token } => write!(f, "unknown command `{token}`"),
            Self::InvalidBound { value } => {
                write!(f, "range bound {value} is out of range, bounds start at 1")
            }
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
