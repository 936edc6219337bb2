//! Exhaustive test-corpus generator for regex engines
//!
//! Enumerates every string formable from a small alphabet of structural
//! decorations up to a bounded length, in a fixed deterministic order, and
//! writes them one per line preceded by the total number of lines to follow.
//! The count is derived in closed form and re-checked against the number of
//! lines actually emitted.
//!
//! Two corpora are supported: subject strings to feed a matcher under test
//! (`input` mode) and regex patterns of increasing structural complexity
//! (`regex` mode). The generator does not parse or evaluate what it prints;
//! a downstream matcher does that.

pub mod error;
pub mod input;
pub mod mode;
pub mod pattern;

pub use error::{GenError, Result};
pub use mode::Mode;

use std::io::Write;

/// A corpus description: which corpus to enumerate and how far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corpus {
    mode: Mode,
    max_len: usize,
}

impl Corpus {
    /// Describe a corpus without emitting anything
    pub fn new(mode: Mode, max_len: usize) -> Self {
        Corpus { mode, max_len }
    }

    /// Number of lines the enumeration will produce, in closed form
    pub fn expected_count(&self) -> Result<u128> {
        match self.mode {
            Mode::Input => input::expected_count(self.max_len),
            Mode::Regex => pattern::expected_count(self.max_len),
        }
    }

    /// Write the count line followed by the full enumeration.
    ///
    /// Returns the number of corpus lines written, excluding the count line.
    /// The count serves as a self-check: a disagreement between the closed
    /// form and the lines actually emitted is reported as an error.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<u128> {
        let expected = self.expected_count()?;
        writeln!(out, "{expected}")?;
        let emitted = match self.mode {
            Mode::Input => input::emit(self.max_len, out)?,
            Mode::Regex => pattern::emit(self.max_len, out)?,
        };
        if emitted != expected {
            return Err(GenError::CountMismatch { expected, emitted });
        }
        Ok(emitted)
    }
}
