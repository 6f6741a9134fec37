use clap::Parser;
use std::error::Error;

mod cli;
mod core;
mod generators;
mod history;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load();

    // RUST_LOG still wins over the configured default.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .format_timestamp_secs()
    .init();

    let args = Args::parse();
    log::debug!("Command line args: {:?}", args);

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_special,
            count,
        }) => cli::handlers::handle_generate(
            &config,
            args.json,
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_special,
            count,
        ),
        Some(CliCommand::Strength { password }) => {
            cli::handlers::handle_strength(args.json, &password)
        }
        None => cli::menu::run_cli_menu(&config),
    }
}
