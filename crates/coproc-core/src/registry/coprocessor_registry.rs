//! Coprocessor registry.

use crate::config::RegistryConfig;
use crate::handle::{CoprocessorHandle, GlobalId, HasGlobalId};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Container for the active coprocessor handles, indexed by global id.
///
/// Every key equals the global id of the handle stored under it. Adding a
/// handle whose id is already present replaces the previous one.
#[derive(Debug, Clone)]
pub struct CoprocessorRegistry<H = CoprocessorHandle> {
    /// Working directory for collaborators. Never read by the registry.
    directory: String,
    coprocessors: BTreeMap<GlobalId, H>,
}

impl<H: HasGlobalId> CoprocessorRegistry<H> {
    /// Create an empty registry.
    ///
    /// The directory is stored verbatim; an empty string is accepted.
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            coprocessors: BTreeMap::new(),
        }
    }

    /// Add a handle, replacing any handle already stored under its global id.
    ///
    /// Callers that need to reject duplicates should check
    /// [`find_by_global_id`](Self::find_by_global_id) first.
    pub fn add(&mut self, handle: H) {
        let id = handle.global_id();
        if self.coprocessors.insert(id, handle).is_some() {
            debug!("Replaced coprocessor {}", id);
        } else {
            debug!("Added coprocessor {}", id);
        }
    }

    /// Find the stored handle with the same global id as `handle`.
    ///
    /// Only the id of `handle` is read. The lookup goes straight to the map
    /// key; since every key equals its handle's id, at most one entry matches.
    pub fn find_by_global_id(&self, handle: &impl HasGlobalId) -> Option<&H> {
        self.get(handle.global_id())
    }

    /// Get the handle stored under `id`.
    pub fn get(&self, id: GlobalId) -> Option<&H> {
        self.coprocessors.get(&id)
    }

    /// Remove the handle with the same global id as `handle`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, handle: &impl HasGlobalId) -> bool {
        self.remove_by_id(handle.global_id())
    }

    /// Remove the handle stored under `id`.
    pub fn remove_by_id(&mut self, id: GlobalId) -> bool {
        let removed = self.coprocessors.remove(&id).is_some();
        if removed {
            debug!("Removed coprocessor {}", id);
        }
        removed
    }

    /// The live map of handles indexed by global id.
    pub fn coprocessors(&self) -> &BTreeMap<GlobalId, H> {
        &self.coprocessors
    }

    /// Check if a handle is stored under `id`.
    pub fn contains(&self, id: GlobalId) -> bool {
        self.coprocessors.contains_key(&id)
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = GlobalId> + '_ {
        self.coprocessors.keys().copied()
    }

    /// Iterate over handles in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (GlobalId, &H)> + '_ {
        self.coprocessors.iter().map(|(id, handle)| (*id, handle))
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.coprocessors.len()
    }

    /// Check if no handle is registered.
    pub fn is_empty(&self) -> bool {
        self.coprocessors.is_empty()
    }

    /// The directory this registry was created with.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The directory as a path.
    pub fn directory_path(&self) -> &Path {
        Path::new(&self.directory)
    }
}

impl<H: HasGlobalId> Default for CoprocessorRegistry<H> {
    fn default() -> Self {
        Self::new(RegistryConfig::DEFAULT_DIRECTORY)
    }
}
