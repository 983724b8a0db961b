/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tubedeck_playback::{types::TRACK_ID_PLACEHOLDER, PlayerConfig, TrackId};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tubedeck.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_playlist")]
    pub playlist: Vec<String>,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default = "default_engine")]
    pub engine: EngineSettings,
}

/// Simulated engine behavior
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineSettings {
    /// Interval between progress reports
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default = "default_min_duration_secs")]
    pub min_duration_secs: u64,

    #[serde(default = "default_max_duration_secs")]
    pub max_duration_secs: u64,

    /// Track identifiers the engine refuses to load
    #[serde(default)]
    pub unavailable: Vec<String>,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` if given (must exist), otherwise `tubedeck.toml` when
    /// present, then applies `TUBEDECK_*` overrides
    /// (e.g. `TUBEDECK_PLAYER__INITIAL_VOLUME=0.5`, `TUBEDECK_PLAYLIST=a,b,c`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with TUBEDECK_)
        settings = settings.add_source(
            config::Environment::with_prefix("TUBEDECK")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("playlist")
                .with_list_parse_key("engine.unavailable")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(CliError::Config("Playlist must contain at least one track".to_string()));
        }

        if !(0.0..=1.0).contains(&self.player.initial_volume) {
            return Err(CliError::Config(format!(
                "Initial volume must be between 0.0 and 1.0, got {}",
                self.player.initial_volume
            )));
        }

        if !self.player.url_template.contains(TRACK_ID_PLACEHOLDER) {
            return Err(CliError::Config(format!(
                "URL template must contain {}",
                TRACK_ID_PLACEHOLDER
            )));
        }

        if self.engine.tick_ms == 0 {
            return Err(CliError::Config("Engine tick must be at least 1 ms".to_string()));
        }

        if self.engine.min_duration_secs == 0
            || self.engine.min_duration_secs > self.engine.max_duration_secs
        {
            return Err(CliError::Config(format!(
                "Invalid simulated duration range {}..={}",
                self.engine.min_duration_secs, self.engine.max_duration_secs
            )));
        }

        Ok(())
    }

    /// Playlist as track identifiers
    pub fn tracks(&self) -> Vec<TrackId> {
        self.playlist.iter().map(|id| TrackId::from(id.as_str())).collect()
    }
}

// Default values
fn default_playlist() -> Vec<String> {
    [
        "jKty-A4h1Qk",
        "paFtGQ22YlE",
        "o_DpuiJq9bc",
        "845By_LKvU8",
        "eQOaZPnMmoE",
    ]
    .iter()
    .map(|id| id.to_string())
    .collect()
}

fn default_engine() -> EngineSettings {
    EngineSettings {
        tick_ms: default_tick_ms(),
        min_duration_secs: default_min_duration_secs(),
        max_duration_secs: default_max_duration_secs(),
        unavailable: Vec::new(),
    }
}

fn default_tick_ms() -> u64 {
    500
}

fn default_min_duration_secs() -> u64 {
    120
}

fn default_max_duration_secs() -> u64 {
    360
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            playlist: default_playlist(),
            player: PlayerConfig::default(),
            engine: default_engine(),
        }
    }
}
