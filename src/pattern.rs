//! Enumeration of regex patterns
//!
//! Every pattern is a single `a` atom followed by a sequence of quantifier
//! operators, wrapped in up to four optional decorations (a literal on each
//! side and the two line anchors). Sequence lengths come out ascending; for
//! each sequence all sixteen decoration combinations are emitted before the
//! next sequence.
//!
//! A greedy operator directly followed by the optional operator would read as
//! a lazy modifier rather than a quantifier of its own, so such pairs are
//! split with parentheses: `a*?` stays the lazy star, and the
//! star-then-optional sequence prints as `(a*)?`.

use crate::error::{GenError, Result};
use bitflags::bitflags;
use std::io::Write;

/// The three quantifier operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// Zero or more (`*`)
    Star,
    /// One or more (`+`)
    Plus,
    /// Zero or one (`?`)
    Optional,
}

/// A quantifier together with its greediness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub quantifier: Quantifier,
    pub greedy: bool,
}

impl Symbol {
    /// Token this symbol prints as
    pub fn token(self) -> &'static str {
        match (self.quantifier, self.greedy) {
            (Quantifier::Star, true) => "*",
            (Quantifier::Plus, true) => "+",
            (Quantifier::Optional, true) => "?",
            (Quantifier::Star, false) => "*?",
            (Quantifier::Plus, false) => "+?",
            (Quantifier::Optional, false) => "??",
        }
    }
}

/// Symbol alphabet in enumeration order: the greedy operators, then the lazy
/// form of each
pub const SYMBOLS: [Symbol; 6] = [
    Symbol { quantifier: Quantifier::Star, greedy: true },
    Symbol { quantifier: Quantifier::Plus, greedy: true },
    Symbol { quantifier: Quantifier::Optional, greedy: true },
    Symbol { quantifier: Quantifier::Star, greedy: false },
    Symbol { quantifier: Quantifier::Plus, greedy: false },
    Symbol { quantifier: Quantifier::Optional, greedy: false },
];

bitflags! {
    /// Optional decorations applied around a quantified atom
    ///
    /// Bit order fixes the enumeration order of [`Decorations::combinations`]:
    /// the literal prefix varies slowest, the end anchor fastest.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Decorations: u8 {
        /// `$` anchor after the pattern
        const ANCHOR_EOL = 1;
        /// `^` anchor before the pattern
        const ANCHOR_BOL = 2;
        /// Literal `c` after the quantified atom
        const SUFFIX = 4;
        /// Literal `b` before the quantified atom
        const PREFIX = 8;
    }
}

impl Decorations {
    /// All sixteen combinations, the bare pattern first
    ///
    /// Named to stay clear of the `all()` the `bitflags!` macro generates,
    /// which is the full flag set rather than an enumeration.
    pub fn combinations() -> impl Iterator<Item = Decorations> {
        (0..16u8).map(Decorations::from_bits_truncate)
    }

    fn anchor_bol(self) -> &'static str {
        if self.contains(Self::ANCHOR_BOL) {
            "^"
        } else {
            ""
        }
    }

    fn anchor_eol(self) -> &'static str {
        if self.contains(Self::ANCHOR_EOL) {
            "$"
        } else {
            ""
        }
    }

    fn prefix(self) -> &'static str {
        if self.contains(Self::PREFIX) {
            "b"
        } else {
            ""
        }
    }

    fn suffix(self) -> &'static str {
        if self.contains(Self::SUFFIX) {
            "c"
        } else {
            ""
        }
    }
}

/// Render the quantifier sequence applied to a single `a` atom into `out`.
///
/// Scans adjacent pairs left to right: a greedy operator that has not itself
/// been closed off, followed by the optional operator, gets a parenthesis
/// pair inserted so the `?` quantifies a group instead of turning the
/// operator lazy. All opening parentheses go before the atom.
pub fn render_core(symbols: &[Symbol], out: &mut String) {
    out.clear();
    let mut closed = vec![false; symbols.len()];
    let mut pairs = 0;
    for k in 0..symbols.len().saturating_sub(1) {
        if symbols[k].greedy && !closed[k] && symbols[k + 1].quantifier == Quantifier::Optional {
            closed[k + 1] = true;
            pairs += 1;
        }
    }

    for _ in 0..pairs {
        out.push('(');
    }
    out.push('a');
    for (symbol, &close) in symbols.iter().zip(&closed) {
        if close {
            out.push(')');
        }
        out.push_str(symbol.token());
    }
}

/// Closed-form line count: `16 * (6^(max_len+1) - 1) / 5`, sixteen
/// decorations times the geometric sum of symbol sequences per length
pub fn expected_count(max_len: usize) -> Result<u128> {
    let alphabet = SYMBOLS.len() as u128;
    let mut sequences: u128 = 1; // the empty sequence
    let mut power: u128 = 1;
    for _ in 0..max_len {
        power = power.checked_mul(alphabet).ok_or(GenError::CountOverflow)?;
        sequences = sequences.checked_add(power).ok_or(GenError::CountOverflow)?;
    }
    sequences.checked_mul(16).ok_or(GenError::CountOverflow)
}

/// Advance an odometer over symbol indices, last position fastest.
/// Returns false once every sequence of this length has been visited.
fn advance(indices: &mut [usize]) -> bool {
    for slot in indices.iter_mut().rev() {
        *slot += 1;
        if *slot < SYMBOLS.len() {
            return true;
        }
        *slot = 0;
    }
    false
}

/// Write every decorated pattern, one per line. Returns the number of lines.
pub fn emit<W: Write>(max_len: usize, out: &mut W) -> Result<u128> {
    let mut emitted: u128 = 0;
    let mut core = String::new();
    let mut symbols = Vec::with_capacity(max_len);
    for len in 0..=max_len {
        let mut indices = vec![0usize; len];
        loop {
            symbols.clear();
            symbols.extend(indices.iter().map(|&i| SYMBOLS[i]));
            render_core(&symbols, &mut core);
            for decor in Decorations::combinations() {
                writeln!(
                    out,
                    "{}{}{}{}{}",
                    decor.anchor_bol(),
                    decor.prefix(),
                    core,
                    decor.suffix(),
                    decor.anchor_eol()
                )?;
                emitted += 1;
            }
            if !advance(&mut indices) {
                break;
            }
        }
    }
    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_of(tokens: &[&str]) -> String {
        let symbols: Vec<Symbol> = tokens
            .iter()
            .map(|t| {
                *SYMBOLS
                    .iter()
                    .find(|s| s.token() == *t)
                    .expect("unknown token")
            })
            .collect();
        let mut out = String::new();
        render_core(&symbols, &mut out);
        out
    }

    #[test]
    fn bare_atom() {
        assert_eq!(core_of(&[]), "a");
        assert_eq!(core_of(&["*"]), "a*");
        assert_eq!(core_of(&["*?"]), "a*?");
    }

    #[test]
    fn greedy_then_optional_gets_parenthesized() {
        assert_eq!(core_of(&["*", "?"]), "(a*)?");
        assert_eq!(core_of(&["+", "??"]), "(a+)??");
        assert_eq!(core_of(&["?", "?"]), "(a?)?");
    }

    #[test]
    fn lazy_operator_keeps_its_modifier() {
        // `*?` already consumed the `?`; a following optional stays unparenthesized
        assert_eq!(core_of(&["*?", "?"]), "a*??");
        assert_eq!(core_of(&["??", "?"]), "a???");
    }

    #[test]
    fn closed_operator_does_not_reopen() {
        // The `?` at position 1 was closed off, so it cannot trigger
        // another pair against position 2
        assert_eq!(core_of(&["*", "?", "*"]), "(a*)?*");
        assert_eq!(core_of(&["*", "?", "?"]), "(a*)??");
    }

    #[test]
    fn chained_pairs_nest() {
        assert_eq!(core_of(&["*", "?", "+", "?"]), "((a*)?+)?");
    }

    #[test]
    fn combinations_and_full_flag_set_coexist() {
        // `all()` belongs to the bitflags API and is the full set, not an
        // enumeration; the iterator must end on exactly that value
        assert_eq!(Decorations::all(), Decorations::from_bits_truncate(15));
        assert_eq!(Decorations::combinations().count(), 16);
        assert_eq!(Decorations::combinations().last(), Some(Decorations::all()));
    }

    #[test]
    fn decoration_order_is_stable() {
        let decorated: Vec<String> = Decorations::combinations()
            .map(|d| format!("{}{}a{}{}", d.anchor_bol(), d.prefix(), d.suffix(), d.anchor_eol()))
            .collect();
        assert_eq!(
            decorated,
            vec![
                "a", "a$", "^a", "^a$", // bare atom
                "ac", "ac$", "^ac", "^ac$", // with suffix
                "ba", "ba$", "^ba", "^ba$", // with prefix
                "bac", "bac$", "^bac", "^bac$", // both literals
            ]
        );
    }

    #[test]
    fn emitted_matches_closed_form() {
        for max_len in 0..5 {
            let mut buf = Vec::new();
            let emitted = emit(max_len, &mut buf).unwrap();
            assert_eq!(emitted, expected_count(max_len).unwrap());
        }
        // 16 * (6^4 - 1) / 5
        assert_eq!(expected_count(3).unwrap(), 4144);
    }

    #[test]
    fn sequence_order_is_odometer() {
        let mut buf = Vec::new();
        emit(1, &mut buf).unwrap();
        let lines: Vec<String> = String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect();
        // 16 bare-atom lines, then 16 per single symbol in alphabet order
        assert_eq!(lines[0], "a");
        assert_eq!(lines[16], "a*");
        assert_eq!(lines[32], "a+");
        assert_eq!(lines[48], "a?");
        assert_eq!(lines[64], "a*?");
        assert_eq!(lines[80], "a+?");
        assert_eq!(lines[96], "a??");
        assert_eq!(lines.len(), 112);
    }
}
