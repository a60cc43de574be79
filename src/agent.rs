use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::{AgentConfig, InterruptMode};
use crate::error::{LauncherError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// How long an interrupted agent gets to exit before it is killed.
pub const INTERRUPT_GRACE: Duration = Duration::from_millis(250);

/// How an agent session ended, as far as the launcher cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    /// The agent exited on its own. The code is logged, never shown.
    Exited(Option<i32>),
    /// Ctrl-C was pressed while the agent was running.
    Interrupted,
}

/// Runs the agent for one project, blocking until it finishes or is
/// interrupted.
pub trait AgentRunner {
    fn run(&mut self, project: &str) -> Result<AgentOutcome>;
}

/// Ctrl-C bookkeeping shared between the signal handler and the runner.
#[derive(Debug, Default)]
pub struct InterruptState {
    agent_running: AtomicBool,
    interrupts: AtomicUsize,
}

impl InterruptState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Installs the process-wide Ctrl-C handler. Outside an agent session
    /// an interrupt ends the launcher with status 130.
    pub fn install() -> Result<Arc<Self>> {
        let state = Self::new();
        let handler_state = Arc::clone(&state);
        ctrlc::set_handler(move || {
            if !handler_state.notify() {
                println!();
                std::process::exit(130);
            }
        })?;
        Ok(state)
    }

    /// Records an interrupt. Returns false when no agent is running, in
    /// which case nothing is recorded.
    pub fn notify(&self) -> bool {
        if !self.agent_running.load(Ordering::SeqCst) {
            return false;
        }
        self.interrupts.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn begin_agent(&self) {
        self.interrupts.store(0, Ordering::SeqCst);
        self.agent_running.store(true, Ordering::SeqCst);
    }

    fn interrupt_count(&self) -> usize {
        self.interrupts.load(Ordering::SeqCst)
    }

    /// Ends the session and reports whether it was interrupted.
    fn end_agent(&self) -> bool {
        self.agent_running.store(false, Ordering::SeqCst);
        self.interrupts.swap(0, Ordering::SeqCst) > 0
    }
}

/// The external command line: `<program> <args...> <project_flag> <name>`,
/// run from the launcher root.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentCommand {
    pub program: String,
    pub args: Vec<String>,
    pub project_flag: String,
    pub working_dir: PathBuf,
}

impl AgentCommand {
    pub fn from_config(config: &AgentConfig, root: &Path) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            project_flag: config.project_flag.clone(),
            working_dir: root.to_path_buf(),
        }
    }

    /// Builds the command for `project`. Standard streams and environment
    /// are inherited untouched.
    pub fn build(&self, project: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(&self.project_flag)
            .arg(project)
            .current_dir(&self.working_dir);
        cmd
    }
}

/// Spawns the real agent process.
pub struct ProcessRunner {
    command: AgentCommand,
    mode: InterruptMode,
    interrupts: Arc<InterruptState>,
}

impl ProcessRunner {
    pub fn new(
        command: AgentCommand,
        mode: InterruptMode,
        interrupts: Arc<InterruptState>,
    ) -> Self {
        Self {
            command,
            mode,
            interrupts,
        }
    }

    fn spawn(&self, mut cmd: Command) -> Result<Child> {
        if self.mode == InterruptMode::Forward {
            isolate_process_group(&mut cmd);
        }
        cmd.spawn().map_err(|source| LauncherError::SpawnError {
            program: self.command.program.clone(),
            source,
        })
    }

    fn wait(&self, cmd: Command) -> Result<ExitStatus> {
        let mut child = self.spawn(cmd)?;
        debug!(pid = child.id(), mode = ?self.mode, "agent spawned");

        let mut forwarded = 0;
        let mut interrupted_at: Option<Instant> = None;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }

            let seen = self.interrupts.interrupt_count();
            if seen > forwarded {
                forwarded = seen;
                interrupted_at.get_or_insert_with(Instant::now);
                if self.mode == InterruptMode::Forward {
                    info!(pid = child.id(), "forwarding interrupt to agent");
                    if let Err(e) = forward_interrupt(&child) {
                        warn!(err = %e, "failed to forward interrupt");
                    }
                }
            }

            if interrupted_at.is_some_and(|at| at.elapsed() >= INTERRUPT_GRACE) {
                warn!(pid = child.id(), "agent still running after interrupt, killing");
                // The agent may already be gone by now.
                if let Err(e) = child.kill() {
                    debug!(err = %e, "kill after interrupt failed");
                }
                return Ok(child.wait()?);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl AgentRunner for ProcessRunner {
    fn run(&mut self, project: &str) -> Result<AgentOutcome> {
        let cmd = self.command.build(project);
        info!(program = %self.command.program, project, "starting agent");

        self.interrupts.begin_agent();
        let result = self.wait(cmd);
        let interrupted = self.interrupts.end_agent();

        let status = result?;
        debug!(exit_code = ?status.code(), interrupted, "agent finished");
        if interrupted {
            Ok(AgentOutcome::Interrupted)
        } else {
            Ok(AgentOutcome::Exited(status.code()))
        }
    }
}

#[cfg(unix)]
fn isolate_process_group(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(not(unix))]
fn isolate_process_group(_cmd: &mut Command) {}

#[cfg(unix)]
fn forward_interrupt(child: &Child) -> std::io::Result<()> {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    killpg(Pid::from_raw(child.id() as i32), Signal::SIGINT).map_err(std::io::Error::from)
}

// Without process groups the kill after the grace period stands in.
#[cfg(not(unix))]
fn forward_interrupt(_child: &Child) -> std::io::Result<()> {
    Ok(())
}
