//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_CONFIG_FILES: [&str; 2] = ["pawtype.toml", ".pawtype.toml"];
const ENV_PREFIX: &str = "PAWTYPE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables `PAWTYPE_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./pawtype.toml` or `./.pawtype.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/pawtype/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|path| path.exists());
        let files = global
            .into_iter()
            .chain(Self::project_config_path())
            .chain(config_path.cloned());

        Self::layered(files)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Defaults with each file merged on top, later files winning
    fn layered(files: impl IntoIterator<Item = PathBuf>) -> Figment {
        files.into_iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/pawtype/config.toml if set,
    /// otherwise the platform config dir.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pawtype").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [  ENV] Environment: {}*", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./pawtype.toml or ./.pawtype.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}
