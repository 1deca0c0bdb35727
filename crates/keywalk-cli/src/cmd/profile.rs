use clap::Args;
use keywalk_core::profile;
use std::path::PathBuf;
use std::process;
use tracing::error;

use crate::cmd::read_lines;
use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Wordlist file; reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Emit the summary as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ProfileArgs, layout: &str) {
    let lines = read_lines(args.input.as_deref());
    let summary = profile::analyze_profile(&lines, layout);

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("\n📊 === CORPUS PROFILE ({} lines) === 📊", summary.line_count);
    reports::print_profile(&summary);
}
