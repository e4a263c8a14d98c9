use serde::{Deserialize, Serialize};

/// Order in which directory entries are processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryOrder {
    /// Whatever the filesystem enumeration yields.
    #[default]
    Listing,
    /// Sorted by file name, for reproducible output.
    Sorted,
}

/// What to do when an entry cannot be listed, read or decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Stop at the first failure; no summary is produced.
    #[default]
    Halt,
    /// Record the failure, skip the entry and keep going.
    Continue,
}
