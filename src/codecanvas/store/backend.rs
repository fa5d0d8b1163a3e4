use crate::error::Result;

/// Abstract interface for raw slot I/O.
///
/// Backends only move strings in and out of named slots; parsing and recovery
/// belong to the stores built on top.
pub trait KvBackend {
    /// Read a slot. Returns Ok(None) when the slot was never written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the whole slot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Drop a slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
