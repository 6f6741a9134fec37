// src/cli/handlers.rs
use std::error::Error;

use console::style;
use serde_json::json;

use crate::core::config::Config;
use crate::generators::{evaluate, PasswordGenerator};
use crate::models::StrengthLabel;

// Handlers for CLI commands
#[allow(clippy::too_many_arguments)]
pub fn handle_generate(
    config: &Config,
    json: bool,
    length: Option<usize>,
    no_lowercase: bool,
    no_uppercase: bool,
    no_digits: bool,
    no_special: bool,
    count: usize,
) -> Result<(), Box<dyn Error>> {
    let mut options = config.default_options();
    if let Some(length) = length {
        options.length = length;
    }
    options.include_lowercase = !no_lowercase;
    options.include_uppercase = !no_uppercase;
    options.include_digits = !no_digits;
    options.include_special = !no_special;
    log::debug!("Generating {} password(s) with {:?}", count, options);

    let generator = PasswordGenerator::new();

    for _ in 0..count {
        let password = generator.generate(&options)?;
        let score = evaluate(&password);

        if json {
            println!(
                "{}",
                json!({
                    "password": password,
                    "score": score.value(),
                    "strength": score.label(),
                })
            );
        } else {
            println!("{}  [{}]", password, styled_label(score.label()));
        }
    }

    Ok(())
}

pub fn handle_strength(json: bool, password: &str) -> Result<(), Box<dyn Error>> {
    let score = evaluate(password);

    if json {
        println!(
            "{}",
            json!({
                "score": score.value(),
                "strength": score.label(),
            })
        );
    } else {
        println!("Strength: {} ({}/5)", styled_label(score.label()), score.value());
    }

    Ok(())
}

pub fn styled_label(label: StrengthLabel) -> String {
    match label {
        StrengthLabel::Weak => style(label).red().to_string(),
        StrengthLabel::Moderate => style(label).yellow().to_string(),
        StrengthLabel::Strong => style(label).green().to_string(),
    }
}
