use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::player::{Color, Player, PlayerInfo, Roster};

/// Deepest search the AI may be configured for. Beyond that a 7x6 board
/// takes minutes per move.
pub const MAX_DEPTH: usize = 12;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub game: GameConfig,
    pub ai: AiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            one: PlayerConfig::default_for(Player::One),
            two: PlayerConfig::default_for(Player::Two),
        }
    }
}

/// Display identity of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: Color,
}

impl PlayerConfig {
    fn default_for(player: Player) -> Self {
        Self {
            name: player.default_name().to_string(),
            color: player.default_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who drops the first chip.
    pub first_player: Player,
    /// Seat played by the computer.
    pub ai_player: AiSeat,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Player::One,
            ai_player: AiSeat::Two,
        }
    }
}

/// Which player, if any, the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiSeat {
    One,
    Two,
    /// Two humans share the terminal.
    None,
}

impl AiSeat {
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::One => Some(Player::One),
            Self::Two => Some(Player::Two),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Plies the search looks ahead.
    pub depth: usize,
    /// Pick randomly among equally good moves.
    pub random_ties: bool,
    /// Seed for tie-breaking; random when unset.
    pub seed: Option<u64>,
    /// Take the centre column on the first move if it is free.
    pub open_center: bool,
    /// Minimum time the AI appears to think, in milliseconds.
    pub min_think_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            depth: 7,
            random_ties: true,
            seed: None,
            open_center: false,
            min_think_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.depth == 0 || self.ai.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.depth must be in 1..={MAX_DEPTH}"
            )));
        }

        let (one, two) = (&self.players.one, &self.players.two);
        if one.name.trim().is_empty() || two.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if one.name == two.name {
            return Err(ConfigError::Validation(
                "players.one.name and players.two.name must differ".into(),
            ));
        }
        if one.color == two.color {
            return Err(ConfigError::Validation(
                "players.one.color and players.two.color must differ".into(),
            ));
        }

        Ok(())
    }

    /// Builds the session roster from the configured names and colors.
    #[must_use]
    pub fn roster(&self) -> Roster {
        let info = |player: Player, cfg: &PlayerConfig| {
            PlayerInfo::new(player, cfg.name.clone(), cfg.color)
        };
        Roster::new(
            info(Player::One, &self.players.one),
            info(Player::Two, &self.players.two),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.roster(), Roster::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players.one]
name = "Ada"
color = "yellow"

[ai]
depth = 4
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.one.name, "Ada");
        assert_eq!(config.players.one.color, Color::Yellow);
        assert_eq!(config.players.two, PlayerConfig::default_for(Player::Two));
        assert_eq!(config.ai.depth, 4);
        assert!(config.ai.random_ties);
        assert_eq!(config.game, GameConfig::default());
        assert!(config.validate().is_ok());

        let roster = config.roster();
        assert_eq!(roster.info(Player::One).name(), "Ada");
        assert_eq!(roster.info(Player::Two).name(), "AI (BLACK)");
    }

    #[test]
    fn test_hot_seat_game() {
        let toml_str = r#"
[game]
first_player = "two"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.first_player, Player::Two);
        assert_eq!(config.game.ai_player.player(), Some(Player::Two));

        let toml_str = r#"
[game]
ai_player = "none"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.ai_player, AiSeat::None);
        assert_eq!(config.game.ai_player.player(), None);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.ai.depth = 0;
        assert!(config.validate().is_err());
        config.ai.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.players.two.color = Color::Red;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.players.two.name = "  ".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.players.two.name = config.players.one.name.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_color_is_a_parse_error() {
        let toml_str = r#"
[players.one]
name = "Ada"
color = "purple"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/four-in-a-row.toml");
        assert!(AppConfig::load(path).is_err());
        assert_eq!(
            AppConfig::load_or_default(path).unwrap(),
            AppConfig::default()
        );
    }
}
