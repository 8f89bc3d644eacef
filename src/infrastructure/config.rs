use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::board::BoardSeed,
    presentation::config::{keybindings::KeyBindings, styles::Styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub board: BoardSeed,
}

impl Config {
    /// Defaults merged with the user's files in the config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Built-in configuration only
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            found_config |= path.exists();
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}; using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        Ok(cfg.merged_over(default_config))
    }

    /// Fill whatever the user left out from `defaults`
    fn merged_over(mut self, defaults: Config) -> Self {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }
        if self.board.is_empty() {
            self.board = defaults.board;
        }
        self
    }
}
