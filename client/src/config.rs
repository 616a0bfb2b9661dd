pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";
pub const MAX_AI_MOVE_DELAY_MS: u64 = 5000;

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub appearance: AppearanceConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub ai_move_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_move_delay_ms: 400,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "ai_move_delay_ms must not exceed {}",
                MAX_AI_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub theme: Theme,
    pub use_colors: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            use_colors: true,
        }
    }
}
