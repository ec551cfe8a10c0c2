use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "libversion.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".libversion.toml";

/// Represents the complete configuration for lib-version.
///
/// Only the fallback resource lookup is configurable; the packaging metadata
/// always comes from the build.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub resource: ResourceConfig,
}

fn default_file_name() -> String {
    "version.properties".to_string()
}

fn default_key() -> String {
    "version".to_string()
}

fn default_include_executable_dir() -> bool {
    true
}

/// Where and how the bundled properties resource is looked up.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResourceConfig {
    /// Name of the properties resource
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Key holding the version inside the resource
    #[serde(default = "default_key")]
    pub key: String,

    /// Directories searched before the executable's directory
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,

    #[serde(default = "default_include_executable_dir")]
    pub include_executable_dir: bool,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        ResourceConfig {
            file_name: default_file_name(),
            key: default_key(),
            search_paths: Vec::new(),
            include_executable_dir: default_include_executable_dir(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `libversion.toml` in current directory
/// 3. `.libversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
