//! Configuration file loading for pawtype
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PAWTYPE_` environment variables (`PAWTYPE_SUMMARY__TIMEOUT_SECS=5`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./pawtype.toml` or `./.pawtype.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/pawtype/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileOpenAiConfig, FileOutputConfig, FileProvidersConfig,
    FileSummaryConfig,
};
pub use loader::ConfigLoader;
