//! Corpus mode selection
//!
//! The mode argument is matched fuzzily: whichever of the two mode names is
//! closer in edit distance wins, so `inpt` and `regexes` select the corpus
//! the user meant. A word equidistant from both names selects nothing.

use std::cmp::Ordering;

/// Which corpus to enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Subject strings for the matcher under test
    Input,
    /// Regex patterns of increasing operator depth
    Regex,
}

impl Mode {
    /// Resolve a mode word against the two mode names by edit distance.
    ///
    /// Returns `None` when the word is as close to one name as to the other.
    pub fn resolve(word: &str) -> Option<Mode> {
        let to_input = levenshtein(word, "input");
        let to_regex = levenshtein(word, "regex");
        match to_input.cmp(&to_regex) {
            Ordering::Less => Some(Mode::Input),
            Ordering::Greater => Some(Mode::Regex),
            Ordering::Equal => None,
        }
    }
}

/// Levenshtein edit distance between two strings, counted in characters
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();

    // Rolling two-row dynamic program
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = if ca == cb { prev[j] } else { prev[j] + 1 };
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
