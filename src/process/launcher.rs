//! Single-shot supervision of one child process

use crate::config::CommandSpec;
use crate::error::LaunchError;
use crate::process::ExitReport;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

/// Lifecycle of the supervised child. Transitions only move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherState {
    NotStarted,
    Running { pid: u32 },
    Exited(ExitReport),
}

/// Starts exactly one child with inherited stdio and waits for it
pub struct Launcher {
    command: CommandSpec,
    child: Option<Child>,
    state: LauncherState,
}

impl Launcher {
    pub fn new(command: CommandSpec) -> Self {
        Self {
            command,
            child: None,
            state: LauncherState::NotStarted,
        }
    }

    pub fn state(&self) -> &LauncherState {
        &self.state
    }

    /// Spawn the child. Must be called from within a tokio runtime.
    pub fn spawn(&mut self) -> Result<u32, LaunchError> {
        if self.state != LauncherState::NotStarted {
            return Err(LaunchError::InvalidState("child was already started"));
        }

        let program = &self.command.program;
        let mut cmd = Command::new(program);
        cmd.args(&self.command.args);

        // The child talks to the same terminal as we do
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!(program = %program, args = ?self.command.args, "spawning child");

        let child = cmd
            .spawn()
            .map_err(|e| LaunchError::from_spawn(program, e))?;

        // Only absent once the child has been polled to completion
        let pid = child.id().unwrap_or_default();
        info!(pid, program = %program, "child started");

        self.child = Some(child);
        self.state = LauncherState::Running { pid };
        Ok(pid)
    }

    /// Block until the child terminates and record its status
    pub async fn wait(&mut self) -> Result<ExitReport, LaunchError> {
        let child = match (&self.state, self.child.as_mut()) {
            (LauncherState::Running { .. }, Some(child)) => child,
            (LauncherState::Exited(_), _) => {
                return Err(LaunchError::InvalidState("child has already exited"))
            }
            _ => return Err(LaunchError::InvalidState("child was never started")),
        };

        let status = child.wait().await.map_err(LaunchError::Wait)?;
        let report = ExitReport::from_status(status);

        match (report.code, report.signal_name()) {
            (Some(code), _) => info!(code, "child exited"),
            (None, Some(signal)) => info!(signal, "child terminated by signal"),
            (None, None) => warn!(?report, "child exited without a status code"),
        }

        self.child = None;
        self.state = LauncherState::Exited(report);
        Ok(report)
    }

    /// Spawn and wait in one go
    pub async fn run(mut self) -> Result<ExitReport, LaunchError> {
        self.spawn()?;
        self.wait().await
    }
}
