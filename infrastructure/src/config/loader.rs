//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILENAMES: [&str; 2] = ["visa-advisor.toml", ".visa-advisor.toml"];
const ENV_PREFIX: &str = "VISA_ADVISOR_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `VISA_ADVISOR_*` environment variables (e.g. `VISA_ADVISOR_ANSWERS__LOCALE=en`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./visa-advisor.toml` or `./.visa-advisor.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/visa-advisor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        Self::figment(global.as_deref(), project.as_deref(), config_path)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// File layers only, lowest priority first.
    fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&PathBuf>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/visa-advisor/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("visa-advisor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./visa-advisor.toml or ./.visa-advisor.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
