use lmsieve::cli::commands::{CliArgs, Commands};
use lmsieve::cli::handlers::{handle_ask, handle_extract, handle_probe};
use lmsieve::util::logging::{init_logging, parse_level, LoggingConfig};
use lmsieve::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("lmsieve v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Probe(probe_args) => handle_probe(probe_args),
        Commands::Ask(ask_args) => handle_ask(ask_args),
        Commands::Extract(extract_args) => handle_extract(extract_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("LMSIEVE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    init_logging(LoggingConfig::with_level(level));
}
