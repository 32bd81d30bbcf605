use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigError, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::tictactoe::BotType;

const CONFIG_FILE_NAME: &str = "tictactoe_arena_config.yaml";
const MAX_WORKERS: usize = 64;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ArenaConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ArenaConfig {
    pub games: u32,
    pub cross: BotType,
    pub circle: BotType,
    pub workers: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ArenaOverrides {
    pub games: Option<u32>,
    pub cross: Option<BotType>,
    pub circle: Option<BotType>,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
}

impl ArenaConfig {
    /// Applies command-line values on top of the loaded file and validates the result.
    pub fn with_overrides(self, overrides: ArenaOverrides) -> Result<Self, ConfigError> {
        let config = Self {
            games: overrides.games.unwrap_or(self.games),
            cross: overrides.cross.unwrap_or(self.cross),
            circle: overrides.circle.unwrap_or(self.circle),
            workers: overrides.workers.unwrap_or(self.workers),
            seed: overrides.seed.or(self.seed),
        };
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("games must be at least 1".to_string());
        }
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(format!("workers must be between 1 and {}", MAX_WORKERS));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            cross: BotType::Minimax,
            circle: BotType::Random,
            workers: 4,
            seed: None,
        }
    }
}
