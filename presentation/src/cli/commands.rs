//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use pawtype_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Profile, tallies and letter summary
    Full,
    /// Only the four-letter code
    Code,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Code => DomainOutputFormat::Code,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for pawtype
#[derive(Parser, Debug)]
#[command(name = "pawtype")]
#[command(author, version, about = "Dog personality quiz - score answers into a four-letter type")]
#[command(long_about = r#"
pawtype scores fifteen answers about your dog into a four-letter personality
type and describes each letter in a short phrase.

Configuration files are loaded from (in priority order):
1. PAWTYPE_* environment variables
2. --config <path>     Explicit config file
3. ./pawtype.toml      Project-level config
4. ~/.config/pawtype/config.toml   Global config

Example:
  pawtype quiz --name Mochi --breed corgi
  pawtype score 1,2,1,3,2,1,4,2,1,3,2,1,4,2,1
  pawtype -o json score "5 5 5 5 5 5 5 5 5 5 5 5 5 5 5"
  pawtype types
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip the remote summary and use the built-in phrases
    #[arg(long, global = true)]
    pub offline: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer the fifteen questions interactively
    Quiz {
        /// Your dog's name (asked for when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Your dog's breed (asked for when omitted)
        #[arg(long)]
        breed: Option<String>,
    },

    /// Score a list of fifteen answers (1-5, comma or space separated)
    Score {
        /// The answers, e.g. "1,2,1,3,2,1,4,2,1,3,2,1,4,2,1"
        #[arg(required = true, num_args = 1..)]
        answers: Vec<String>,

        /// Dog name used in the letter summary
        #[arg(long, default_value = "Your dog")]
        name: String,

        /// Breed used in the letter summary
        #[arg(long, default_value = "")]
        breed: String,
    },

    /// List all sixteen personality types
    Types,

    /// Show past results of the demo account
    History {
        /// List the oldest result first
        #[arg(long)]
        oldest_first: bool,

        /// Delete the result with this id before listing
        #[arg(long, value_name = "ID")]
        delete: Option<String>,
    },
}
