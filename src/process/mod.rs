//! Process management for the supervised app

pub mod launcher;
pub mod status;

pub use launcher::{Launcher, LauncherState};
pub use status::ExitReport;
