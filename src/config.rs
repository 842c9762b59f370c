use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Placeholder in [`Messages::exited`] replaced by the child's exit code
pub const CODE_PLACEHOLDER: &str = "{code}";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub command: CommandSpec,
    pub messages: Messages,
}

/// The program to supervise and its fixed argument vector
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// The two console lines printed by the launcher
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub starting: String,
    pub exited: String,
}

impl Default for CommandSpec {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["main.py".to_string()],
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            starting: "Starting Python Flask App...".to_string(),
            exited: format!("Python process exited with code {CODE_PLACEHOLDER}"),
        }
    }
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a `PROGRAM ARGS...` vector, `None` when it is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

impl Messages {
    /// Render the termination line for an observed code
    pub fn exited_line(&self, code: &str) -> String {
        self.exited.replace(CODE_PLACEHOLDER, code)
    }
}

impl Config {
    /// Candidate config files, in lookup order
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("warkop-launcher/config.toml")),
            dirs::home_dir().map(|p| p.join(".warkop-launcher.toml")),
            Some(PathBuf::from("warkop-launcher.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first readable config from the search paths, or the defaults
    pub fn load() -> Self {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(e) => warn!(path = %path.display(), "ignoring config: {e:#}"),
            }
        }

        Config::default()
    }

    /// Load a config from an explicit path. Unlike [`Config::load`], failures
    /// are reported to the caller.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.command.program.is_empty() {
            anyhow::bail!("command.program must not be empty");
        }
        Ok(config)
    }
}
