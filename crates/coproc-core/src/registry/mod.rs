//! In-memory registry of active coprocessor handles.
//!
//! The registry maps each handle's global id to the handle itself and keeps
//! the directory string it was created with for its collaborators. It does
//! no I/O and no locking; an owner that shares it across threads wraps it in
//! its own lock.

mod coprocessor_registry;

pub use coprocessor_registry::CoprocessorRegistry;
