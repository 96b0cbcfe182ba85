//! Host metrics gathering.

use crate::config::MetricsConfig;
use crate::error::{CoprocError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use sysinfo::{Disks, Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::{debug, warn};

/// Point-in-time host metrics.
///
/// A field whose probe failed is left at `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// CPU usage of the engine process (0-100+, can exceed 100 on multi-core).
    pub cpu_percentage: f64,
    pub free_memory_mb: f64,
    /// Space available to unprivileged users on the disk holding the directory.
    pub free_space_mb: f64,
}

/// Gather host metrics.
///
/// Every probe runs even if an earlier one failed; failures are collected
/// and returned alongside the partial metrics.
///
/// # Arguments
///
/// * `directory` - Directory whose disk is measured
/// * `pid_file` - File holding the PID of the engine process
/// * `sample_interval` - How long to observe the process for CPU usage
pub fn gather_metrics(
    directory: &Path,
    pid_file: &Path,
    sample_interval: Duration,
) -> (Metrics, Vec<CoprocError>) {
    let mut metrics = Metrics::default();
    let mut errors = Vec::new();

    match engine_cpu_percentage(pid_file, sample_interval) {
        Ok(cpu) => metrics.cpu_percentage = cpu,
        Err(e) => {
            warn!("Failed to measure engine CPU usage: {}", e);
            errors.push(e);
        }
    }

    metrics.free_memory_mb = free_memory_mb();

    match free_space_mb(directory) {
        Ok(free) => metrics.free_space_mb = free,
        Err(e) => {
            warn!("Failed to measure free disk space: {}", e);
            errors.push(e);
        }
    }

    debug!(
        "Gathered metrics for {}: {:?} ({} errors)",
        directory.display(),
        metrics,
        errors.len()
    );

    (metrics, errors)
}

/// Read a file that must contain exactly one non-empty line.
///
/// Surrounding whitespace and blank lines are ignored.
pub fn read_single_line(path: &Path) -> Result<String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CoprocError::io_with_path(e, path))?;

    let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.next().ok_or_else(|| CoprocError::InvalidPidFile {
        path: path.to_path_buf(),
        message: "file is empty".to_string(),
    })?;

    let extra = lines.count();
    if extra > 0 {
        return Err(CoprocError::InvalidPidFile {
            path: path.to_path_buf(),
            message: format!("expected a single line, found {}", extra + 1),
        });
    }

    Ok(first.to_string())
}

fn read_pid(pid_file: &Path) -> Result<u32> {
    let line = read_single_line(pid_file)?;
    line.parse::<u32>()
        .map_err(|e| CoprocError::InvalidPidFile {
            path: pid_file.to_path_buf(),
            message: format!("'{}' is not a process id: {}", line, e),
        })
}

/// Sample the CPU usage of the process named by `pid_file`.
fn engine_cpu_percentage(pid_file: &Path, sample_interval: Duration) -> Result<f64> {
    let pid = read_pid(pid_file)?;
    let sysinfo_pid = Pid::from_u32(pid);
    let pids = [sysinfo_pid];

    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&pids),
        true,
        ProcessRefreshKind::new().with_cpu(),
    );
    if system.process(sysinfo_pid).is_none() {
        return Err(CoprocError::ProcessNotFound { pid });
    }

    // CPU usage is the delta between two refreshes
    std::thread::sleep(sample_interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&pids),
        true,
        ProcessRefreshKind::new().with_cpu(),
    );

    system
        .process(sysinfo_pid)
        .map(|process| f64::from(process.cpu_usage()))
        .ok_or(CoprocError::ProcessNotFound { pid })
}

fn free_memory_mb() -> f64 {
    let mut system = System::new();
    system.refresh_memory();
    system.free_memory() as f64 / MetricsConfig::BYTES_PER_MB
}

/// Free space on the disk with the longest mount point containing `directory`.
///
/// The directory must exist.
fn free_space_mb(directory: &Path) -> Result<f64> {
    let path = directory
        .canonicalize()
        .map_err(|e| CoprocError::io_with_path(e, directory))?;
    let disks = Disks::new_with_refreshed_list();

    let best_match = disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().components().count());

    match best_match {
        Some(disk) => {
            debug!(
                "Using disk mounted at {} for {}",
                disk.mount_point().display(),
                path.display()
            );
            Ok(disk.available_space() as f64 / MetricsConfig::BYTES_PER_MB)
        }
        None => Err(CoprocError::DiskNotFound(path)),
    }
}
