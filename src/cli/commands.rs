// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length
        #[arg(long, short, env = "PASSFORGE_DEFAULT_LENGTH")]
        length: Option<usize>,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,

        /// Number of passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Rate the strength of an existing password
    Strength {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },
}
