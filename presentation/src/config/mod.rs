//! Presentation-level configuration
//!
//! Resolves how results are printed from the CLI flags and the `[output]`
//! section of the config file.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use pawtype_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// The CLI flag wins over the file setting, which wins over the default
    pub fn resolve(
        flag: Option<CliOutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = flag.map(OutputFormat::from).or(file_format).unwrap_or_default();
        Self {
            format,
            color,
            // JSON goes to stdout unmixed with spinner frames
            show_progress: !quiet && format != OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_file() {
        let config = OutputConfig::resolve(
            Some(CliOutputFormat::Code),
            Some(OutputFormat::Json),
            true,
            false,
        );
        assert_eq!(config.format, OutputFormat::Code);
        assert!(config.show_progress);
    }

    #[test]
    fn test_file_then_default() {
        let from_file = OutputConfig::resolve(None, Some(OutputFormat::Json), false, false);
        assert_eq!(from_file.format, OutputFormat::Json);
        assert!(!from_file.show_progress);
        assert!(!from_file.color);

        let fallback = OutputConfig::resolve(None, None, true, true);
        assert_eq!(fallback.format, OutputFormat::Full);
        assert!(!fallback.show_progress);
    }
}
