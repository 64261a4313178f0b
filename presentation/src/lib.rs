//! Presentation layer for pawtype
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive questionnaire.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, QuizReport};
pub use progress::reporter::ProgressReporter;
pub use quiz::{QuizAnswers, QuizRunner, parse_answers};
