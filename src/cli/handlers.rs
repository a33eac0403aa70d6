//! Subcommand handlers
//!
//! Each handler resolves its configuration (env defaults overridden by
//! flags), runs the corresponding library operation, and returns a process
//! exit code. Prober and backend failures are fatal; extractor absence is
//! reported but recoverable per its best-effort contract.

use crate::api::CompletionBackend;
use crate::cli::commands::{AskArgs, ExtractArgs, ProbeArgs};
use crate::config::SieveConfig;
use crate::extract::extract_json;
use crate::probe::ServerProbe;
use std::fs;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Checks server availability and model presence
pub fn handle_probe(args: &ProbeArgs) -> i32 {
    let mut config = SieveConfig::default();
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        return 1;
    }

    debug!("Probing with {}", config);

    let probe = ServerProbe::with_timeout(config.host.clone(), Duration::from_secs(args.timeout));
    match probe.check_model(&config.model) {
        Ok(()) => {
            println!(
                "Success! {} is available on the server at {}",
                config.model, config.host
            );
            0
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

/// Submits a prompt and extracts JSON from the completion text
pub fn handle_ask(args: &AskArgs) -> i32 {
    let mut config = SieveConfig::default();
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        return 1;
    }

    // Prober errors are process-aborting preconditions for the demo flow.
    if !args.skip_probe {
        let probe = config.create_probe();
        if let Err(e) = probe.check_model(&config.model) {
            error!("{}", e);
            return 1;
        }
    }

    let backend = config.create_backend();
    info!(
        "Submitting prompt via {} ({})",
        backend.name(),
        backend.model_info().unwrap_or_default()
    );

    let text = match backend.complete(&args.prompt) {
        Ok(text) => text,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    debug!("Received completion ({} chars)", text.len());

    if args.raw {
        println!("{}", text);
        return 0;
    }

    match extract_json(&text) {
        Some(value) => {
            // to_string_pretty on a Value cannot fail
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
            0
        }
        None => {
            warn!("No JSON found in the completion, printing raw text");
            println!("{}", text);
            1
        }
    }
}

/// Runs the extractor over a file or stdin
pub fn handle_extract(args: &ExtractArgs) -> i32 {
    let text = match &args.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                return 1;
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                error!("Failed to read stdin: {}", e);
                return 1;
            }
            buf
        }
    };

    match extract_json(&text) {
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
            0
        }
        None => {
            warn!("No JSON found in input");
            1
        }
    }
}
