pub mod analyze;
pub mod profile;
pub mod scan;

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;
use tracing::error;

/// Raw lines of a wordlist file, or stdin when no path was given. Blank-line
/// policy is the caller's: profile skips them itself, scan filters up front.
pub fn read_lines(path: Option<&Path>) -> Vec<String> {
    match path {
        Some(p) => match fs::read_to_string(p) {
            Ok(content) => content.lines().map(String::from).collect(),
            Err(e) => {
                error!("Cannot read {}: {}", p.display(), e);
                process::exit(1);
            }
        },
        None => io::stdin().lock().lines().map_while(Result::ok).collect(),
    }
}
