//! Error types for corpus generation

use std::fmt;
use std::io;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur while computing or emitting a corpus
#[derive(Debug)]
pub enum GenError {
    /// Closed-form line count does not fit in the counter type
    CountOverflow,
    /// Emitted line total disagrees with the closed-form count
    CountMismatch { expected: u128, emitted: u128 },
    /// Writing to the output stream failed
    Io(io::Error),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::CountOverflow => write!(f, "Corpus too large: line count overflows"),
            GenError::CountMismatch { expected, emitted } => write!(
                f,
                "Generator self-check failed: predicted {expected} lines, emitted {emitted}"
            ),
            GenError::Io(err) => write!(f, "Output error: {err}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GenError {
    fn from(err: io::Error) -> Self {
        GenError::Io(err)
    }
}
