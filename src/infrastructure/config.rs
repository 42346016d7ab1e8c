use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

const DEFAULT_NARROW_BREAKPOINT: u16 = 100;

fn default_narrow_breakpoint() -> u16 {
    DEFAULT_NARROW_BREAKPOINT
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("public")
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
    /// Terminal width (columns) below which the navigation collapses into a menu
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: u16,
    /// Directory holding the local logo files
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            _data_dir: PathBuf::default(),
            _config_dir: PathBuf::default(),
            narrow_breakpoint: default_narrow_breakpoint(),
            assets_dir: default_assets_dir(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Config {
    /// Loads the user config from the project config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// The embedded defaults alone
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads `config.*` from `config_dir` on top of the embedded defaults.
    ///
    /// A missing user config is not an error; the embedded defaults apply.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        if cfg.config.narrow_breakpoint == 0 {
            return Err(ConfigError::Message(String::from(
                "narrow_breakpoint must be greater than 0",
            )));
        }

        Ok(cfg)
    }

    /// Resolves `assets_dir` against the config directory when relative
    /// and the directory exists there; otherwise against the working directory.
    pub fn assets_dir(&self) -> PathBuf {
        let dir = &self.config.assets_dir;
        if dir.is_relative() {
            let beside_config = self.config._config_dir.join(dir);
            if beside_config.is_dir() {
                return beside_config;
            }
        }
        dir.clone()
    }
}
