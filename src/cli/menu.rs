// src/cli/menu.rs
use inquire::{Confirm, Select, Text};
use std::error::Error;

use crate::cli::handlers::styled_label;
use crate::core::config::Config;
use crate::generators::{evaluate, GeneratorError, PasswordGenerator};
use crate::history::History;
use crate::models::GenerationOptions;

pub fn run_cli_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSFORGE                ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();
    let mut history = History::new();

    loop {
        println!();
        let choice = Select::new(
            "What would you like to do?",
            vec![
                "🔐  Generate password",
                "📊  Check password strength",
                "🕘  View password history",
                "🚪  Exit",
            ],
        )
        .prompt()?;

        match choice {
            "🔐  Generate password" => {
                // Get password generation options
                let length_input = Text::new("Password length:")
                    .with_default(&config.default_length.to_string())
                    .prompt()?;

                let length: usize = match length_input.trim().parse() {
                    Ok(length) => length,
                    Err(_) => {
                        println!("❌ Please enter a valid number for length.");
                        continue;
                    }
                };

                let include_lowercase = Confirm::new("Include lowercase letters?")
                    .with_default(true)
                    .prompt()?;

                let include_uppercase = Confirm::new("Include uppercase letters?")
                    .with_default(true)
                    .prompt()?;

                let include_digits = Confirm::new("Include digits?")
                    .with_default(true)
                    .prompt()?;

                let include_special = Confirm::new("Include special characters?")
                    .with_default(true)
                    .prompt()?;

                let options = GenerationOptions {
                    length,
                    include_lowercase,
                    include_uppercase,
                    include_digits,
                    include_special,
                };

                match generator.generate(&options) {
                    Ok(password) => {
                        let score = evaluate(&password);
                        println!("\nGenerated Password: {}", password);
                        println!(
                            "Strength: {} ({}/5)",
                            styled_label(score.label()),
                            score.value()
                        );
                        history.push(password);
                    }
                    // Validation failures re-prompt; an entropy
                    // failure is not recoverable here.
                    Err(e @ GeneratorError::Entropy(_)) => return Err(Box::new(e)),
                    Err(e) => println!("❌ {}", e),
                }

                // Wait for user to press enter
                let _ = Text::new("Press enter to continue...").prompt();
            }
            "📊  Check password strength" => {
                let password = Text::new("Password to check:").prompt()?;
                let score = evaluate(&password);
                println!(
                    "Strength: {} ({}/5)",
                    styled_label(score.label()),
                    score.value()
                );

                let _ = Text::new("Press enter to continue...").prompt();
            }
            "🕘  View password history" => {
                if history.is_empty() {
                    println!("No passwords generated yet.");
                } else {
                    let entries = history.entries();
                    let start = history.len().saturating_sub(config.history_display_limit);
                    if start > 0 {
                        println!("(showing the last {} of {})", history.len() - start, history.len());
                    }
                    for (i, password) in entries.iter().enumerate().skip(start) {
                        println!("{:>3}. {}", i + 1, password);
                    }
                }

                let _ = Text::new("Press enter to continue...").prompt();
            }
            "🚪  Exit" => {
                println!("👋 Goodbye!");
                return Ok(());
            }
            _ => {}
        }
    }
}
