//! Configuration system for the `ProjBoard` client.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/projboard/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use crate::validation::InputRules;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The configured people range is empty.
    #[error("invalid people range: min {min} is greater than max {max}")]
    PeopleRange {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiFileConfig,
    validation: ValidationFileConfig,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    mouse: Option<bool>,
}

/// `[validation]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ValidationFileConfig {
    title_max_len: Option<usize>,
    description_min_len: Option<usize>,
    people_min: Option<u32>,
    people_max: Option<u32>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -- UI --
    /// Poll timeout for the TUI event loop.
    pub poll_timeout: Duration,
    /// Whether mouse capture (drag with the mouse) is enabled.
    pub mouse: bool,
    /// Seed the board with sample projects on startup.
    pub demo: bool,

    // -- Validation --
    /// Form validation limits.
    pub rules: InputRules,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(50),
            mouse: true,
            demo: false,
            rules: InputRules::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path
    /// (`~/.config/projboard/config.toml`) is tried and silently ignored if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read
    /// or parsed, or if the resolved people range is empty.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        let config = Self::resolve(cli, &file);
        config.check()?;
        Ok(config)
    }

    /// Configuration from CLI args and defaults alone, for when the config
    /// file cannot be used.
    #[must_use]
    pub fn from_cli(cli: &CliArgs) -> Self {
        Self::resolve(cli, &ConfigFile::default())
    }

    /// Resolve a `ClientConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. This is separated from `load()` to
    /// enable unit testing without CLI parsing.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();
        let rules = &file.validation;

        Self {
            poll_timeout: cli
                .poll_timeout_ms
                .or(file.ui.poll_timeout_ms)
                .map_or(defaults.poll_timeout, Duration::from_millis),
            mouse: !cli.no_mouse && file.ui.mouse.unwrap_or(defaults.mouse),
            demo: cli.demo,
            rules: InputRules {
                title_max_len: rules.title_max_len.or(defaults.rules.title_max_len),
                description_min_len: rules
                    .description_min_len
                    .unwrap_or(defaults.rules.description_min_len),
                people_min: rules.people_min.unwrap_or(defaults.rules.people_min),
                people_max: rules.people_max.unwrap_or(defaults.rules.people_max),
            },
        }
    }

    /// Rejects settings that would make every submission invalid.
    fn check(&self) -> Result<(), ConfigError> {
        if self.rules.people_min > self.rules.people_max {
            return Err(ConfigError::PeopleRange {
                min: self.rules.people_min,
                max: self.rules.people_max,
            });
        }
        Ok(())
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal project board with drag-and-drop")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/projboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Event loop poll timeout in milliseconds.
    #[arg(long, env = "PROJBOARD_POLL_MS")]
    pub poll_timeout_ms: Option<u64>,

    /// Disable mouse capture (keyboard drag only).
    #[arg(long)]
    pub no_mouse: bool,

    /// Start with a few sample projects on the board.
    #[arg(long)]
    pub demo: bool,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "PROJBOARD_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/projboard.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            // No config dir available, use defaults.
            return Ok(ConfigFile::default());
        };
        config_dir.join("projboard").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
