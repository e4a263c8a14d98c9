use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<name>: <significant>/<total>` per file, then `sloc:` and `tloc:`
    #[default]
    Plain,
    /// One JSON document after the run
    Json,
    /// One JSON object per file, then a total object
    Jsonl,
}
