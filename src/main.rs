use clap::Parser;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::debug;

use agent_launcher::{
    default_config_path, logging, AgentCommand, InterruptState, Launcher, LauncherConfig,
    ProcessRunner, Result,
};

/// Interactive menu for starting the autonomous coding agent on a new or
/// existing project.
#[derive(Parser, Debug)]
#[command(name = "agent-launcher", version, about)]
struct Cli {
    /// Directory holding the projects folder and the agent script
    /// [default: current directory]
    #[arg(long)]
    root: Option<PathBuf>,

    /// Config file [default: <root>/.agent-launcher/config.json]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the projects folder from the config
    #[arg(long)]
    generations_dir: Option<PathBuf>,

    /// Override the program used to run the agent
    #[arg(long)]
    agent_program: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir()?,
    };
    let config_path = cli.config.unwrap_or_else(|| default_config_path(&root));

    if cli.init {
        LauncherConfig::init(&config_path)?;
        println!("✅ Created {}", config_path.display());
        return Ok(());
    }

    let mut config = LauncherConfig::load(&config_path)?;
    if let Some(dir) = cli.generations_dir {
        config.generations_dir = dir;
    }
    if let Some(program) = cli.agent_program {
        config.agent.program = program;
    }
    debug!(root = %root.display(), ?config, "starting launcher");

    let interrupts = InterruptState::install()?;
    let runner = ProcessRunner::new(
        AgentCommand::from_config(&config.agent, &root),
        config.agent.interrupt,
        interrupts,
    );

    let stdin = io::stdin();
    let mut launcher = Launcher::new(
        stdin.lock(),
        io::stdout(),
        runner,
        config.projects_root(&root),
    );
    launcher.run()
}
