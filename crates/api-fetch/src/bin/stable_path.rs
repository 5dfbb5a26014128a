//! `stable-path` — normalize request paths to their stable form.
//!
//! Usage:
//!   stable-path '<path>' [<path> ...]
//!   stable-path            (paths read from stdin, one per line)

use block_kit_api_fetch::stable_path;
use std::io::{self, BufRead};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.is_empty() {
        for path in &args {
            println!("{}", stable_path(path));
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(path) => println!("{}", stable_path(path.trim_end())),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
