use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::error::MoveError;
use super::types::{BotType, FirstPlayerMode, Mark, Sides};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub human_mark: Mark,
    pub bot_type: BotType,
    pub first_player: FirstPlayerMode,
}

impl TicTacToeSettings {
    pub fn sides(&self) -> Result<Sides, MoveError> {
        Sides::for_human(self.human_mark)
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be Cross or Circle".to_string());
        }
        Ok(())
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::Cross,
            bot_type: BotType::Minimax,
            first_player: FirstPlayerMode::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_settings_{}.yaml", random_number))
    }

    #[test]
    fn test_default_settings_can_be_serialized_and_deserialized_string() {
        let settings = TicTacToeSettings::default();
        let serializer = YamlConfigSerializer::new();
        let content = serializer.serialize(&settings).unwrap();
        let loaded: TicTacToeSettings = serializer.deserialize(&content).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_settings_round_trip_through_manager() {
        let settings = TicTacToeSettings {
            human_mark: Mark::Circle,
            bot_type: BotType::Random,
            first_player: FirstPlayerMode::Bot,
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(&file_path),
            YamlConfigSerializer::new(),
        );

        assert!(manager.set_config(&settings).is_ok());
        assert_eq!(manager.get_config().unwrap(), settings);

        let fresh: ConfigManager<_, TicTacToeSettings, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh.get_config().unwrap(), settings);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_returns_default_settings() {
        let manager: ConfigManager<_, TicTacToeSettings, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), TicTacToeSettings::default());
    }

    #[test]
    fn test_invalid_settings_cant_be_read_or_written() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider
            .set_config_content("human_mark: Empty\nbot_type: Minimax\nfirst_player: Human\n")
            .unwrap();

        let manager: ConfigManager<_, TicTacToeSettings, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let invalid = TicTacToeSettings {
            human_mark: Mark::Empty,
            ..TicTacToeSettings::default()
        };
        assert!(manager.set_config(&invalid).is_err());
        assert!(invalid.sides().is_err());

        let _ = std::fs::remove_file(file_path);
    }
}
