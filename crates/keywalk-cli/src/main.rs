use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use keywalk_core::config::ScoreWeights;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Keyboard layout to analyze against. Unknown names fall back to qwerty.
    #[arg(global = true, short, long, default_value = "qwerty")]
    layout: String,

    /// JSON file with score weights; explicit --w-* flags override its values.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one candidate string.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Aggregate structural habits over a wordlist.
    Profile(cmd::profile::ProfileArgs),
    /// Score every line of a wordlist and rank the worst offenders.
    Scan(cmd::scan::ScanArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Logs on stderr so --json output stays machine-parseable.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let layout = cli.layout.clone();
    let weights_file = cli.weights.clone();

    match cli.command {
        Commands::Analyze(args) => {
            let weights = resolve_weights(
                &weights_file,
                &args.weights,
                matches.subcommand_matches("analyze").unwrap(),
            );
            cmd::analyze::run(args, &layout, &weights);
        }
        Commands::Profile(args) => cmd::profile::run(args, &layout),
        Commands::Scan(args) => {
            let weights = resolve_weights(
                &weights_file,
                &args.weights,
                matches.subcommand_matches("scan").unwrap(),
            );
            cmd::scan::run(args, &layout, &weights);
        }
    }
}

/// File weights as the base (defaults when no file), explicit CLI flags on
/// top, validated before anything runs.
fn resolve_weights(
    file: &Option<String>,
    cli_weights: &ScoreWeights,
    sub_matches: &ArgMatches,
) -> ScoreWeights {
    let mut weights = match file {
        Some(path) => {
            info!("⚖️  Loading score weights from: {}", path);
            ScoreWeights::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => ScoreWeights::default(),
    };

    weights.merge_from_cli(cli_weights, sub_matches);

    if let Err(e) = weights.validate() {
        error!("{}", e);
        process::exit(1);
    }
    weights
}
