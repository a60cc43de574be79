pub mod agent;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod projects;
pub mod prompt;
pub mod session;

pub use agent::{AgentCommand, AgentOutcome, AgentRunner, InterruptState, ProcessRunner};
pub use config::{default_config_path, InterruptMode, LauncherConfig};
pub use error::{LauncherError, Result};
pub use session::Launcher;
