pub mod commands;
pub mod handlers;

pub use commands::{AskArgs, CliArgs, Commands, ExtractArgs, ProbeArgs};
pub use handlers::{handle_ask, handle_extract, handle_probe};
