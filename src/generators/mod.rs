// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod strength;

pub use password::PasswordGenerator;
pub use strength::{evaluate, StrengthScore};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Length should be a positive integer.")]
    InvalidLength,

    #[error("Please select at least one character type.")]
    NoClassSelected,

    #[error("Entropy source failure: {0}")]
    Entropy(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
