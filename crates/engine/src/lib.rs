use log::{debug, info, warn};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileStats, RunResult};

/// Run the line counting engine over `config.root`.
///
/// Entries are counted one at a time, in listing order (or sorted, see
/// [`options::EntryOrder`]). `on_file` is called as soon as each entry has
/// been counted, before the next one is opened, so reports can be streamed.
///
/// # Errors
///
/// With [`options::ErrorPolicy::Halt`] the first listing, reading or decoding
/// failure is returned. With [`options::ErrorPolicy::Continue`] those
/// failures are collected in [`RunResult::errors`] instead. Errors returned by
/// `on_file` always abort the run.
pub fn run<F>(config: &Config, mut on_file: F) -> Result<RunResult>
where
    F: FnMut(&FileStats) -> Result<()>,
{
    let result = filesystem::entries(config)?.try_fold(RunResult::default(), |mut result, entry| {
        match entry.and_then(|path| processor::process_file(&path)) {
            Ok(stats) => {
                debug!("{}: {}", stats.path.display(), stats.tally);
                on_file(&stats)?;
                result.push(stats);
            }
            Err(err) if config.keeps_going() => {
                let path = err
                    .path()
                    .map_or_else(|| String::from("<walk>"), |p| p.display().to_string());
                warn!("skipping {path}: {err}");
                result.errors.push(err);
            }
            Err(err) => return Err(err),
        }
        Ok::<_, EngineError>(result)
    })?;

    info!(
        "{} files counted, {} skipped (sloc {}, tloc {})",
        result.files.len(),
        result.errors.len(),
        result.sloc(),
        result.tloc()
    );
    Ok(result)
}

/// [`run`] without a per-file callback.
///
/// # Errors
///
/// Same as [`run`].
pub fn scan(config: &Config) -> Result<RunResult> {
    run(config, |_| Ok(()))
}
