//! Host metrics module.
//!
//! Reports what an operator wants to see next to the coprocessor registry:
//! - CPU usage of the engine process named by a PID file
//! - Free system memory
//! - Free disk space under the coprocessor directory
//!
//! # Example
//!
//! ```rust,no_run
//! use coproc_core::{gather_metrics, MetricsConfig};
//! use std::path::Path;
//!
//! let (metrics, errors) = gather_metrics(
//!     Path::new("/var/lib/redpanda/coprocessor"),
//!     Path::new("/var/lib/redpanda/pid.lock"),
//!     MetricsConfig::CPU_SAMPLE_INTERVAL,
//! );
//! println!("Free space: {:.1} MB", metrics.free_space_mb);
//! for err in errors {
//!     eprintln!("{}", err);
//! }
//! ```

mod metrics;

pub use metrics::{gather_metrics, read_single_line, Metrics};
