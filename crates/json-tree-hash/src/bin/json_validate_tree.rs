//! `json-validate-tree` — check a JSON document against its embedded hashes.
//!
//! Usage:
//!   json-validate-tree
//!
//! The document is read from stdin. Prints `OK` and exits 0 when every
//! embedded hash checks out; otherwise prints the first violation to stderr
//! and exits 1.

use json_tree_hash::cli::run_validate;
use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_validate(buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(result.as_bytes());
            let _ = stdout.write_all(b"\n");
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
