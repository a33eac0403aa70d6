use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Client utility for local OpenAI-compatible LLM servers
#[derive(Parser, Debug)]
#[command(
    name = "lmsieve",
    about = "Probe a local LLM server and sift structured JSON out of its completions",
    version,
    long_about = "lmsieve verifies that a local OpenAI-compatible inference server (such as \
                  LM Studio) is running and hosts a given model, submits completion prompts, \
                  and extracts embedded JSON from the free-form text the model returns."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Check server availability and model presence",
        long_about = "Checks that the server is reachable and that the requested model appears \
                      in its /models listing.\n\n\
                      Examples:\n  \
                      lmsieve probe\n  \
                      lmsieve probe --host http://127.0.0.1:1234/v1 --model qwen2.5-coder-7b"
    )]
    Probe(ProbeArgs),

    #[command(
        about = "Submit a prompt and extract JSON from the completion",
        long_about = "Probes the server, submits the prompt to /completions, and extracts the \
                      first ```json fence (or the whole response) as JSON.\n\n\
                      Examples:\n  \
                      lmsieve ask \"List the primes below 10 as a JSON array.\"\n  \
                      lmsieve ask --model qwen2.5-coder-7b \"...\""
    )]
    Ask(AskArgs),

    #[command(
        about = "Extract JSON from a text file or stdin",
        long_about = "Runs the extractor over already-captured model output.\n\n\
                      Examples:\n  \
                      lmsieve extract response.txt\n  \
                      cat response.txt | lmsieve extract"
    )]
    Extract(ExtractArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ProbeArgs {
    #[arg(long, value_name = "URL", help = "Server base URL (default: LMSIEVE_HOST)")]
    pub host: Option<String>,

    #[arg(long, value_name = "NAME", help = "Model to look for (default: LMSIEVE_MODEL)")]
    pub model: Option<String>,

    #[arg(
        long,
        value_name = "SECS",
        default_value = "3",
        help = "Per-request probe timeout in seconds"
    )]
    pub timeout: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    #[arg(value_name = "PROMPT", help = "Prompt to submit")]
    pub prompt: String,

    #[arg(long, value_name = "URL", help = "Server base URL (default: LMSIEVE_HOST)")]
    pub host: Option<String>,

    #[arg(long, value_name = "NAME", help = "Model to query (default: LMSIEVE_MODEL)")]
    pub model: Option<String>,

    #[arg(long, help = "Skip the availability probe before submitting")]
    pub skip_probe: bool,

    #[arg(long, help = "Print the raw completion text instead of extracting JSON")]
    pub raw: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(value_name = "FILE", help = "Input file (reads stdin when omitted)")]
    pub file: Option<PathBuf>,
}
