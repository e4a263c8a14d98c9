pub mod args;
pub mod config;
pub mod error;
pub mod logger;
pub mod options;
pub mod presentation;

use crate::error::Result;
use crate::options::OutputFormat;
use crate::presentation::Reporter;
use sloc_tally_engine::config::Config;
use sloc_tally_engine::error::EngineError;
use sloc_tally_engine::stats::RunResult;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count `config.root` and write the report to `out` in `format`.
///
/// Per-file lines are written as soon as each file has been counted; the
/// summary is written only when the whole run succeeds.
///
/// # Errors
///
/// Engine failures (see [`sloc_tally_engine::run`]) and write failures on `out`.
pub fn execute<W: Write>(config: &Config, format: OutputFormat, out: W) -> Result<RunResult> {
    let mut reporter = Reporter::new(out, format);
    let result = sloc_tally_engine::run(config, |stats| {
        reporter.file(stats).map_err(EngineError::from)
    })?;
    reporter.finish(&result)?;
    Ok(result)
}
