//! Handle and identity types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Process-lifetime-unique identifier of a deployed coprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalId(u64);

impl GlobalId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for GlobalId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that carries a coprocessor global id.
///
/// This is the only part of a handle the registry reads.
pub trait HasGlobalId {
    fn global_id(&self) -> GlobalId;
}

/// What the engine does when a coprocessor fails on a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicyError {
    /// Drop the record and keep the coprocessor running.
    #[default]
    SkipOnFailure,
    /// Remove the coprocessor after the first failure.
    Deregister,
}

/// A unit of user-deployed processing logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coprocessor {
    pub global_id: GlobalId,
    /// Topics the coprocessor consumes from.
    #[serde(default)]
    pub input_topics: Vec<String>,
    #[serde(default)]
    pub policy_error: PolicyError,
}

impl Coprocessor {
    pub fn new(global_id: u64) -> Self {
        Self {
            global_id: GlobalId::new(global_id),
            input_topics: Vec::new(),
            policy_error: PolicyError::default(),
        }
    }

    pub fn with_input_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_policy_error(mut self, policy: PolicyError) -> Self {
        self.policy_error = policy;
        self
    }
}

impl HasGlobalId for Coprocessor {
    fn global_id(&self) -> GlobalId {
        self.global_id
    }
}

/// In-memory representation of a deployed coprocessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoprocessorHandle {
    pub coprocessor: Coprocessor,
    /// Checksum of the deployed script.
    pub checksum: String,
    /// Script file the coprocessor was loaded from.
    pub filename: PathBuf,
}

impl CoprocessorHandle {
    pub fn new(
        coprocessor: Coprocessor,
        checksum: impl Into<String>,
        filename: impl Into<PathBuf>,
    ) -> Self {
        Self {
            coprocessor,
            checksum: checksum.into(),
            filename: filename.into(),
        }
    }
}

impl HasGlobalId for CoprocessorHandle {
    fn global_id(&self) -> GlobalId {
        self.coprocessor.global_id
    }
}
