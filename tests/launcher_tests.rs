//! Launcher lifecycle tests against real child processes

#![cfg(unix)]

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;
use warkop_launcher::{CommandSpec, LaunchError, Launcher, LauncherState};

fn sh(script: &str) -> CommandSpec {
    CommandSpec::new("sh", vec!["-c".to_string(), script.to_string()])
}

#[tokio::test]
async fn test_normal_exit_code_is_reported() {
    let report = Launcher::new(sh("exit 7")).run().await.unwrap();

    assert_eq!(report.code, Some(7));
    assert_eq!(report.signal, None);
    assert_eq!(report.exit_code(), 7);
    assert_eq!(report.code_display(), "7");
    assert!(!report.success());
}

#[tokio::test]
async fn test_zero_exit_is_success() {
    let report = Launcher::new(sh("true")).run().await.unwrap();

    assert_eq!(report.code, Some(0));
    assert!(report.success());
}

#[tokio::test]
async fn test_exit_codes_are_propagated_across_range() {
    for code in [1, 2, 42, 126, 127, 200, 255] {
        let report = Launcher::new(sh(&format!("exit {code}")))
            .run()
            .await
            .unwrap();
        assert_eq!(report.exit_code(), code, "child exited with {code}");
    }
}

#[tokio::test]
async fn test_signal_termination_falls_back_to_zero() {
    let report = Launcher::new(sh("kill -TERM $$")).run().await.unwrap();

    assert_eq!(report.code, None);
    assert_eq!(report.signal, Some(Signal::SIGTERM as i32));
    assert_eq!(report.signal_name(), Some("SIGTERM"));
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.code_display(), "null");
}

#[tokio::test]
async fn test_long_running_child_stays_running_until_signalled() {
    let mut launcher = Launcher::new(CommandSpec::new("sleep", vec!["30".to_string()]));
    assert_eq!(launcher.state(), &LauncherState::NotStarted);

    let pid = launcher.spawn().unwrap();
    assert!(pid > 0);
    assert_eq!(launcher.state(), &LauncherState::Running { pid });

    kill(Pid::from_raw(pid as i32), Signal::SIGTERM).unwrap();
    let report = launcher.wait().await.unwrap();

    assert_eq!(report.signal_name(), Some("SIGTERM"));
    assert_eq!(report.exit_code(), 0);
    assert_eq!(launcher.state(), &LauncherState::Exited(report));
}

#[tokio::test]
async fn test_missing_program_is_not_found() {
    let err = Launcher::new(CommandSpec::new("warkop-no-such-program-xyz", vec![]))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, LaunchError::NotFound { .. }), "got {err:?}");
    assert_eq!(err.exit_code(), 127);
    assert!(err.to_string().contains("warkop-no-such-program-xyz"));
}

#[tokio::test]
async fn test_non_executable_program_is_permission_denied() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("app.sh");
    fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();

    let err = Launcher::new(CommandSpec::new(script.to_string_lossy(), vec![]))
        .run()
        .await
        .unwrap_err();

    assert!(
        matches!(err, LaunchError::PermissionDenied { .. }),
        "got {err:?}"
    );
    assert_eq!(err.exit_code(), 126);
}

#[tokio::test]
async fn test_second_spawn_is_rejected_and_only_one_child_runs() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("spawns.log");
    let script = format!("echo spawned >> '{}'", marker.display());

    let mut launcher = Launcher::new(sh(&script));
    launcher.spawn().unwrap();

    let err = launcher.spawn().unwrap_err();
    assert!(matches!(err, LaunchError::InvalidState(_)));

    let report = launcher.wait().await.unwrap();
    assert!(report.success());

    let content = fs::read_to_string(&marker).unwrap();
    assert_eq!(content.lines().count(), 1, "expected exactly one spawn");

    // Exited is terminal
    assert!(matches!(
        launcher.spawn().unwrap_err(),
        LaunchError::InvalidState(_)
    ));
    assert!(matches!(
        launcher.wait().await.unwrap_err(),
        LaunchError::InvalidState(_)
    ));
}

#[tokio::test]
async fn test_wait_before_spawn_is_rejected() {
    let mut launcher = Launcher::new(sh("true"));

    let err = launcher.wait().await.unwrap_err();
    assert!(matches!(err, LaunchError::InvalidState(_)));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(launcher.state(), &LauncherState::NotStarted);
}
