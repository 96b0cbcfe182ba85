//! Integration tests for host metrics gathering.

use coproc_core::{gather_metrics, CoprocError};
use std::time::Duration;
use tempfile::TempDir;

const SAMPLE: Duration = Duration::from_millis(250);

#[test]
fn test_gather_for_current_process() {
    let temp_dir = TempDir::new().unwrap();
    let pid_file = temp_dir.path().join("pid.lock");
    std::fs::write(&pid_file, format!("{}\n", std::process::id())).unwrap();

    let (metrics, errors) = gather_metrics(temp_dir.path(), &pid_file, SAMPLE);

    // Disk detection depends on the host, the CPU probe does not
    assert!(errors
        .iter()
        .all(|e| matches!(e, CoprocError::DiskNotFound(_))));
    assert!(metrics.cpu_percentage >= 0.0);
    assert!(metrics.free_memory_mb >= 0.0);
    assert!(metrics.free_space_mb >= 0.0);
}

#[test]
fn test_missing_pid_file_is_collected() {
    let temp_dir = TempDir::new().unwrap();
    let pid_file = temp_dir.path().join("missing.lock");

    let (metrics, errors) = gather_metrics(temp_dir.path(), &pid_file, SAMPLE);

    let io_errors: Vec<_> = errors
        .iter()
        .filter(|e| matches!(e, CoprocError::Io { .. }))
        .collect();
    assert_eq!(io_errors.len(), 1);
    assert_eq!(metrics.cpu_percentage, 0.0);
}

#[test]
fn test_malformed_pid_file_is_collected() {
    let temp_dir = TempDir::new().unwrap();
    let pid_file = temp_dir.path().join("pid.lock");
    std::fs::write(&pid_file, "1\n2\n").unwrap();

    let (_, errors) = gather_metrics(temp_dir.path(), &pid_file, SAMPLE);

    assert!(errors
        .iter()
        .any(|e| matches!(e, CoprocError::InvalidPidFile { .. })));
}

#[test]
fn test_missing_directory_is_collected() {
    let temp_dir = TempDir::new().unwrap();
    let pid_file = temp_dir.path().join("pid.lock");
    std::fs::write(&pid_file, std::process::id().to_string()).unwrap();
    let directory = temp_dir.path().join("coprocessors");

    let (metrics, errors) = gather_metrics(&directory, &pid_file, SAMPLE);

    assert_eq!(errors.len(), 1);
    match &errors[0] {
        CoprocError::Io { path, .. } => assert_eq!(path.as_deref(), Some(directory.as_path())),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(metrics.free_space_mb, 0.0);
    assert!(metrics.free_memory_mb >= 0.0);
}
