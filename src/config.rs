use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{LauncherError, Result};

/// Directory under the root that holds launcher settings.
pub const CONFIG_DIR: &str = ".agent-launcher";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LauncherConfig {
    /// Folder whose subdirectories are the known projects. Relative paths
    /// are resolved against the launcher root.
    pub generations_dir: PathBuf,
    pub agent: AgentConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    pub program: String,
    pub args: Vec<String>,
    pub project_flag: String,
    pub interrupt: InterruptMode,
}

/// How Ctrl-C reaches a running agent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterruptMode {
    /// The agent shares the launcher's process group and gets the
    /// terminal's SIGINT directly.
    #[default]
    Inherit,
    /// The agent runs in its own process group; the launcher relays the
    /// interrupt to it.
    Forward,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            generations_dir: PathBuf::from("generations"),
            agent: AgentConfig::default(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["autonomous_agent_demo.py".to_string()],
            project_flag: "--project-dir".to_string(),
            interrupt: InterruptMode::Inherit,
        }
    }
}

pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

impl LauncherConfig {
    /// Reads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: LauncherConfig =
            serde_json::from_str(&contents).map_err(|e| LauncherError::ConfigError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate(path)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let reason = if self.agent.program.trim().is_empty() {
            "agent.program must not be empty"
        } else if self.agent.project_flag.trim().is_empty() {
            "agent.project_flag must not be empty"
        } else {
            return Ok(());
        };

        Err(LauncherError::ConfigError {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        })
    }

    /// Writes a default config to `path`, creating its parent directory.
    /// Refuses to overwrite an existing file.
    pub fn init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(LauncherError::ConfigExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Self::default();
        let json = serde_json::to_string_pretty(&config)?;
        fs::write(path, json)?;
        Ok(config)
    }

    pub fn projects_root(&self, root: &Path) -> PathBuf {
        root.join(&self.generations_dir)
    }
}
