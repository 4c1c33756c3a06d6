//! Durability mode for journal writes.

use serde::{Deserialize, Serialize};

/// Durability mode for journal writes.
///
/// Controls whether each journal append is fsynced before the write is
/// acknowledged.
///
/// | Mode | Cost | Use Case |
/// |------|------|----------|
/// | Buffered | page-cache write | Default, tolerates losing the last writes on power loss |
/// | Strict | fsync per write | Nothing acknowledged may be lost |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurabilityMode {
    /// Append to the OS page cache, let the kernel flush.
    #[default]
    Buffered,

    /// fsync after every insert or update.
    Strict,
}

impl DurabilityMode {
    /// Check if this mode requires immediate fsync on every write.
    pub fn requires_immediate_fsync(&self) -> bool {
        matches!(self, DurabilityMode::Strict)
    }

    /// Human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            DurabilityMode::Buffered => "Buffered writes (fast, last writes may be lost on power loss)",
            DurabilityMode::Strict => "Sync fsync (safest, slowest)",
        }
    }
}
