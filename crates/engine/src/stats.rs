use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use sloc_tally_core::LineTally;
use std::path::{Path, PathBuf};

/// Counts for one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub path: PathBuf,
    /// Entry name as listed, used in reports.
    pub name: String,
    #[serde(flatten)]
    pub tally: LineTally,
}

impl FileStats {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let name = entry_name(&path);
        Self {
            path,
            name,
            tally: LineTally::zero(),
        }
    }

    #[must_use]
    pub fn with_tally(path: PathBuf, tally: LineTally) -> Self {
        Self {
            tally,
            ..Self::new(path)
        }
    }

    #[must_use]
    pub const fn significant(&self) -> usize {
        self.tally.significant
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.tally.total
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Outcome of a complete run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Successfully counted entries, in processing order.
    pub files: Vec<FileStats>,
    /// Sum of every tally in `files`.
    pub total: LineTally,
    /// Failures skipped under `ErrorPolicy::Continue`; see [`EngineError::path`].
    pub errors: Vec<EngineError>,
}

impl RunResult {
    /// Global significant-line count.
    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.total.significant
    }

    /// Global line count.
    #[must_use]
    pub const fn tloc(&self) -> usize {
        self.total.total
    }

    pub(crate) fn push(&mut self, stats: FileStats) {
        self.total += stats.tally;
        self.files.push(stats);
    }
}
