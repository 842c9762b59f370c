//! Errors raised while starting or waiting on the child process

use std::io;
use thiserror::Error;

/// Exit code used when the program cannot be found (POSIX shell convention)
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code used when the program exists but cannot be executed
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Exit code for any other launcher failure
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// The executable could not be located on `PATH`.
    #[error("command not found: {program}")]
    NotFound { program: String },

    /// The executable exists but the OS refused to run it.
    #[error("permission denied: {program}")]
    PermissionDenied { program: String },

    /// Any other failure while creating the child.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Waiting on the running child failed.
    #[error("failed to wait for child process: {0}")]
    Wait(#[source] io::Error),

    /// An operation was called out of order (e.g. a second spawn).
    #[error("invalid launcher state: {0}")]
    InvalidState(&'static str),
}

impl LaunchError {
    /// Classify a spawn failure by its I/O error kind
    pub fn from_spawn(program: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                program: program.to_string(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                program: program.to_string(),
            },
            _ => Self::Spawn {
                program: program.to_string(),
                source,
            },
        }
    }

    /// Exit code the launcher terminates with when this error ends the run
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => EXIT_NOT_FOUND,
            Self::PermissionDenied { .. } => EXIT_NOT_EXECUTABLE,
            Self::Spawn { .. } | Self::Wait(_) | Self::InvalidState(_) => EXIT_FAILURE,
        }
    }
}
