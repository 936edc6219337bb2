//! Enumeration of subject strings
//!
//! Every line is a run of `a`s of some length in `0..=max_len`, wrapped in
//! one prefix and one suffix drawn from small fixed tables. Run lengths come
//! out ascending; within a run length the prefix varies slowest and the
//! suffix fastest, so the bare run always appears before any decorated form.

use crate::error::{GenError, Result};
use std::io::Write;

/// Literal prefixes wrapped around each run, in enumeration order
pub const PREFIXES: [&str; 4] = ["", "b", "c", "d"];

/// Literal suffixes wrapped around each run, in enumeration order
pub const SUFFIXES: [&str; 5] = ["", "c", "b", "d", "e"];

/// Closed-form line count: one line per (run length, prefix, suffix) triple
pub fn expected_count(max_len: usize) -> Result<u128> {
    let per_run = (PREFIXES.len() as u128) * (SUFFIXES.len() as u128);
    (max_len as u128 + 1)
        .checked_mul(per_run)
        .ok_or(GenError::CountOverflow)
}

/// Write every subject string, one per line. Returns the number of lines.
pub fn emit<W: Write>(max_len: usize, out: &mut W) -> Result<u128> {
    let mut emitted: u128 = 0;
    for run in 0..=max_len {
        let core = "a".repeat(run);
        for prefix in PREFIXES {
            for suffix in SUFFIXES {
                writeln!(out, "{prefix}{core}{suffix}")?;
                emitted += 1;
            }
        }
    }
    Ok(emitted)
}
