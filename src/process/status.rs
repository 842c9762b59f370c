//! Terminal status of the supervised child

use nix::sys::signal::Signal;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// How the child terminated.
///
/// `code` is present for a normal exit. A child killed by a signal has no
/// code; the signal number is kept in `signal` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReport {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ExitReport {
    pub fn from_status(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
            signal: status.signal(),
        }
    }

    /// Code the launcher itself exits with. Falls back to 0 when the child
    /// left no code.
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(0)
    }

    /// The observed code as printed in the status line, `null` when absent
    pub fn code_display(&self) -> String {
        match self.code {
            Some(code) => code.to_string(),
            None => "null".to_string(),
        }
    }

    /// Symbolic name of the terminating signal, e.g. `SIGTERM`
    pub fn signal_name(&self) -> Option<&'static str> {
        self.signal
            .and_then(|sig| Signal::try_from(sig).ok())
            .map(|sig| sig.as_str())
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}
