// Configuration loading and parsing (config/draft.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draft::DraftSettings;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/draft.toml";

/// Default export file for the finished board.
pub const DEFAULT_EXPORT_PATH: &str = "draft_board.json";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub draft: DraftSection,
    pub files: FilesSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DraftSection {
    pub num_teams: usize,
    pub starters_per_team: usize,
    pub reserves_per_team: usize,
    /// Optional display names, one per team in first-round pick order.
    /// Empty means `Team 1`..`Team N`.
    pub team_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesSection {
    /// One player name per line. When unset, placeholder names are used.
    pub players: Option<PathBuf>,
    /// Where the finished board is written.
    pub export: PathBuf,
}

impl Default for DraftSection {
    fn default() -> Self {
        let settings = DraftSettings::default();
        DraftSection {
            num_teams: settings.num_teams,
            starters_per_team: settings.starters_per_team,
            reserves_per_team: settings.reserves_per_team,
            team_names: Vec::new(),
        }
    }
}

impl Default for FilesSection {
    fn default() -> Self {
        FilesSection {
            players: None,
            export: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl Config {
    pub fn settings(&self) -> DraftSettings {
        DraftSettings {
            num_teams: self.draft.num_teams,
            starters_per_team: self.draft.starters_per_team,
            reserves_per_team: self.draft.reserves_per_team,
        }
    }

    /// Team names for the engine: configured names, or `Team 1`..`Team N`.
    pub fn team_names(&self) -> Vec<String> {
        if self.draft.team_names.is_empty() {
            (1..=self.draft.num_teams)
                .map(|i| format!("Team {i}"))
                .collect()
        } else {
            self.draft.team_names.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate a specific config file. Missing keys take their
/// defaults; a missing file is an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Load `config/draft.toml` under `base_dir` if it exists, otherwise fall
/// back to the built-in defaults (9 teams, 5 starters, 2 reserves).
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join(DEFAULT_CONFIG_PATH);
    if path.exists() {
        load_config_from(&path)
    } else {
        let config = Config::default();
        validate(&config)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the invariants the engine and drivers rely on. Call again after
/// applying command-line overrides.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let draft = &config.draft;

    if draft.num_teams == 0 {
        return Err(ConfigError::ValidationError {
            field: "draft.num_teams".into(),
            message: "must be greater than 0".into(),
        });
    }

    if draft.starters_per_team + draft.reserves_per_team == 0 {
        return Err(ConfigError::ValidationError {
            field: "draft.starters_per_team".into(),
            message: "starters_per_team + reserves_per_team must be greater than 0".into(),
        });
    }

    if !draft.team_names.is_empty() {
        if draft.team_names.len() != draft.num_teams {
            return Err(ConfigError::ValidationError {
                field: "draft.team_names".into(),
                message: format!(
                    "expected {} names, got {}",
                    draft.num_teams,
                    draft.team_names.len()
                ),
            });
        }
        if draft.team_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                field: "draft.team_names".into(),
                message: "names must not be blank".into(),
            });
        }
    }

    if config.files.export.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "files.export".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
