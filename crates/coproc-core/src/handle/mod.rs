//! Coprocessor handle types.
//!
//! Handles are produced by whatever subsystem deploys coprocessor code; the
//! registry only reads their global id through [`HasGlobalId`].

mod types;

pub use types::{Coprocessor, CoprocessorHandle, GlobalId, HasGlobalId, PolicyError};
