use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use regex_fodder::{Corpus, Mode};

fn usage() -> &'static str {
    "\
Usage: regex-fodder <MODE> <MAX-LEN>

Modes:
  input   Subject strings: runs of `a` wrapped in literal decorations
  regex   Patterns: a quantified `a` atom wrapped in literals and anchors

The mode word is matched by edit distance, so approximate spellings work.
MAX-LEN bounds the run length (input) or the quantifier count (regex).
Output is one line per case, preceded by the total number of cases."
}

fn print_usage() {
    eprintln!("{}", usage());
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return;
    }
    if args.len() != 2 {
        print_usage();
        process::exit(1);
    }

    let Some(mode) = Mode::resolve(&args[0]) else {
        // Equidistant from both mode names: nothing to enumerate
        return;
    };
    let max_len: usize = args[1].parse().unwrap_or_else(|e| {
        eprintln!("error: invalid max length {:?}: {e}\n", args[1]);
        print_usage();
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = Corpus::new(mode, max_len)
        .write_to(&mut out)
        .and_then(|emitted| {
            out.flush()?;
            Ok(emitted)
        });
    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
