// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON output (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
