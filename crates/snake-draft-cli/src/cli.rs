// Command-line arguments and how they override config/draft.toml.

use std::path::{Path, PathBuf};

use clap::Parser;
use snake_draft_core::config::{self, Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "snake-draft")]
#[command(about = "Run a snake draft: starters first, then reserves", long_about = None)]
pub struct Cli {
    /// Config file (default: config/draft.toml if present, else built-in defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File with one player name per line
    #[arg(long)]
    pub players_file: Option<PathBuf>,

    /// Where to save the finished board
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Auto-run the whole draft, assigning the top available player each pick
    #[arg(long)]
    pub auto: bool,

    /// Number of teams
    #[arg(long)]
    pub teams: Option<usize>,

    /// Starter rounds per team
    #[arg(long)]
    pub starters: Option<usize>,

    /// Reserve rounds per team
    #[arg(long)]
    pub reserves: Option<usize>,
}

impl Cli {
    /// Load the config file (explicit or default location) relative to
    /// `base_dir`, then apply command-line overrides and re-validate.
    pub fn resolve_config(&self, base_dir: &Path) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config_from(&base_dir.join(path))?,
            None => config::load_config(base_dir)?,
        };
        self.apply_overrides(&mut config);
        config::validate(&config)?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(n) = self.teams {
            if n != config.draft.num_teams {
                // Configured names no longer line up with the team count.
                config.draft.team_names.clear();
            }
            config.draft.num_teams = n;
        }
        if let Some(n) = self.starters {
            config.draft.starters_per_team = n;
        }
        if let Some(n) = self.reserves {
            config.draft.reserves_per_team = n;
        }
        if let Some(path) = &self.players_file {
            config.files.players = Some(path.clone());
        }
        if let Some(path) = &self.output {
            config.files.export = path.clone();
        }
    }
}
