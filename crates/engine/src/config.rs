use crate::options::{EntryOrder, ErrorPolicy};
use derive_builder::Builder;
use std::path::PathBuf;

/// Directory scanned when none is given.
pub const DEFAULT_ROOT: &str = "src";

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
    #[builder(default)]
    pub order: EntryOrder,
    #[builder(default)]
    pub on_error: ErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            order: EntryOrder::default(),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn keeps_going(&self) -> bool {
        matches!(self.on_error, ErrorPolicy::Continue)
    }
}
