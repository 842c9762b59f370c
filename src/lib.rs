//! Warkop launcher library - supervise the Flask app as a child process

pub mod config;
pub mod error;
pub mod logging;
pub mod process;

// Re-export commonly used types
pub use config::{CommandSpec, Config, Messages};
pub use error::LaunchError;
pub use process::{ExitReport, Launcher, LauncherState};
