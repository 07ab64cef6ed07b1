//! Configuration for payload generation.

use serde::{Deserialize, Serialize};

/// Options for a mutation run.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case`, matching the CLI flag names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MutateOptions {
    /// Number of independently mutated payloads to produce. Default: 1.
    pub iterations: usize,
}

impl Default for MutateOptions {
    fn default() -> Self {
        Self { iterations: 1 }
    }
}
