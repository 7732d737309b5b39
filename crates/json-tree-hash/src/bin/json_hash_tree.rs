//! `json-hash-tree` — embed content hashes into a JSON document.
//!
//! Usage:
//!   json-hash-tree [--pretty] [--precision <digits>] [--no-recursive] [--keep-existing]
//!
//! The document is read from stdin; the hashed document is written to stdout.

use json_tree_hash::cli::{parse_hash_args, run_hash};
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = match parse_hash_args(&args) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_hash(buf.trim(), &cmd) {
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
