//! Configuration file loading for visa-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VISA_ADVISOR_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./visa-advisor.toml` or `./.visa-advisor.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/visa-advisor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnswersConfig, FileConfig, FileLoggingConfig, FileModelsConfig, FileOutputConfig,
    FileProviderConfig,
};
pub use loader::ConfigLoader;
