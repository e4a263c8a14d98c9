use crate::error::Result;
use crate::options::OutputFormat;
use sloc_tally_engine::stats::{FileStats, RunResult};
use std::io::{self, Write};

/// Streams per-file lines and the final summary in the configured format.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Report one counted file. `Json` buffers nothing here; the document is
    /// built from the `RunResult` in [`Reporter::finish`].
    ///
    /// # Errors
    /// Write failures on the underlying sink.
    pub fn file(&mut self, stats: &FileStats) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{}: {}", stats.name, stats.tally),
            OutputFormat::Jsonl => {
                let mut v = serde_json::to_value(stats).map_err(io::Error::other)?;
                if let Some(obj) = v.as_object_mut() {
                    obj.insert("type".to_string(), "file".into());
                }
                writeln!(self.out, "{v}")
            }
            OutputFormat::Json => Ok(()),
        }
    }

    /// Write the summary.
    ///
    /// # Errors
    /// Write or serialization failures.
    pub fn finish(&mut self, result: &RunResult) -> Result<()> {
        match self.format {
            OutputFormat::Plain => {
                writeln!(self.out, "sloc: {}", result.sloc())?;
                writeln!(self.out, "tloc: {}", result.tloc())?;
            }
            OutputFormat::Jsonl => {
                let total = serde_json::json!({
                    "type": "total",
                    "version": crate::VERSION,
                    "files": result.files.len(),
                    "sloc": result.sloc(),
                    "tloc": result.tloc(),
                });
                writeln!(self.out, "{total}")?;
            }
            OutputFormat::Json => {
                let doc = serde_json::json!({
                    "version": crate::VERSION,
                    "files": result.files,
                    "sloc": result.sloc(),
                    "tloc": result.tloc(),
                });
                serde_json::to_writer_pretty(&mut self.out, &doc)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
