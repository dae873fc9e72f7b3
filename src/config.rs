// Configuration loading and parsing (config/board.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draft::roster::Slot;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

/// Top-level configuration. Every section is optional in the file; built-in
/// defaults reproduce the standard 12-team, 15x12 board.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub league: LeagueConfig,
    pub board: BoardConfig,
    pub storage: StorageConfig,
    pub feeds: FeedsConfig,
    pub roster: RosterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            league: LeagueConfig::default(),
            board: BoardConfig::default(),
            storage: StorageConfig::default(),
            feeds: FeedsConfig::default(),
            roster: RosterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    pub num_teams: usize,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        LeagueConfig { num_teams: 12 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 15, cols: 12 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_path: "draftboard.db".to_string(),
        }
    }
}

/// Per-source feed locations: a filesystem path or an http(s) URL. A source
/// left unset falls back to generated placeholder data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    pub fantasy_pros: Option<String>,
    pub sleeper: Option<String>,
    pub espn: Option<String>,
    pub espn_top300: Option<String>,
    pub rotoviz: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Slot labels in league order, e.g. ["QB", "RB", "WR", "TE", "FLEX"].
    pub slots: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            slots: ["QB", "RB", "WR", "TE", "FLEX"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RosterConfig {
    /// Parse the configured slot labels. Unknown labels were already rejected
    /// by validation.
    pub fn parsed_slots(&self) -> Vec<Slot> {
        self.slots
            .iter()
            .filter_map(|s| Slot::from_str_slot(s))
            .collect()
    }
}

/// Load configuration from `config/board.toml` relative to the working
/// directory. A missing file yields the built-in defaults; a present but
/// malformed file is an error.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("."))
}

pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("board.toml");

    let config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        Config::default()
    };

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.league.num_teams == 0 {
        return Err(ConfigError::ValidationError {
            field: "league.num_teams".to_string(),
            message: "league must have at least one team".to_string(),
        });
    }
    if config.board.rows == 0 || config.board.cols == 0 {
        return Err(ConfigError::ValidationError {
            field: "board.rows/cols".to_string(),
            message: "board dimensions must be non-zero".to_string(),
        });
    }
    if config.roster.slots.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "roster.slots".to_string(),
            message: "at least one roster slot is required".to_string(),
        });
    }
    for label in &config.roster.slots {
        if Slot::from_str_slot(label).is_none() {
            return Err(ConfigError::ValidationError {
                field: "roster.slots".to_string(),
                message: format!("unknown roster slot '{label}'"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_league() {
        let config = Config::default();
        assert_eq!(config.league.num_teams, 12);
        assert_eq!(config.board.rows, 15);
        assert_eq!(config.board.cols, 12);
        assert_eq!(config.storage.db_path, "draftboard.db");
        assert!(config.feeds.fantasy_pros.is_none());
        assert_eq!(config.roster.slots, vec!["QB", "RB", "WR", "TE", "FLEX"]);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn parses_partial_file_with_defaults() {
        let text = r#"
            [league]
            num_teams = 10

            [feeds]
            sleeper = "data/Sleeper_ADP.csv"
        "#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.league.num_teams, 10);
        assert_eq!(config.board.rows, 15);
        assert_eq!(config.feeds.sleeper.as_deref(), Some("data/Sleeper_ADP.csv"));
        assert!(config.feeds.espn.is_none());
    }

    #[test]
    fn parsed_slots_in_config_order() {
        let roster = RosterConfig {
            slots: vec!["QB".to_string(), "FLEX".to_string()],
        };
        assert_eq!(roster.parsed_slots(), vec![Slot::Quarterback, Slot::Flex]);
    }

    #[test]
    fn validate_rejects_zero_teams() {
        let mut config = Config::default();
        config.league.num_teams = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_board_dims() {
        let mut config = Config::default();
        config.board.cols = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn validate_rejects_unknown_slot() {
        let mut config = Config::default();
        config.roster.slots.push("IDP".to_string());
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("IDP"));
    }

    #[test]
    fn validate_rejects_empty_slot_list() {
        let mut config = Config::default();
        config.roster.slots.clear();
        assert!(validate(&config).is_err());
    }
}
