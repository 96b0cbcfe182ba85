//! Coproc Core - in-memory registry of deployed coprocessors.
//!
//! A coprocessor is a unit of user-deployed processing logic identified by a
//! global numeric id. This crate tracks the active handles of those
//! coprocessors and offers a small host-metrics probe used by the `coproc`
//! status command.
//!
//! # Example
//!
//! ```rust
//! use coproc_core::{Coprocessor, CoprocessorHandle, CoprocessorRegistry};
//!
//! let mut registry = CoprocessorRegistry::new("coprocessors");
//! let handle = CoprocessorHandle::new(Coprocessor::new(42), "sha256:ab12", "wordcount.js");
//!
//! registry.add(handle.clone());
//! assert_eq!(registry.find_by_global_id(&handle), Some(&handle));
//!
//! assert!(registry.remove(&handle));
//! assert!(registry.find_by_global_id(&handle).is_none());
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod registry;
pub mod system;

// Re-export commonly used types
pub use config::{MetricsConfig, RegistryConfig};
pub use error::{CoprocError, Result};
pub use handle::{Coprocessor, CoprocessorHandle, GlobalId, HasGlobalId, PolicyError};
pub use registry::CoprocessorRegistry;
pub use system::{gather_metrics, Metrics};
