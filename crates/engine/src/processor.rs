use crate::error::{EngineError, Result};
use crate::stats::FileStats;
use sloc_tally_core::language::{LineProcessor, default_processor};
use sloc_tally_core::LineTally;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count one directory entry.
///
/// The file handle lives only for the duration of this call.
///
/// # Errors
/// [`EngineError::EntryUnreadable`] if the entry cannot be opened or read
/// (directories included), [`EngineError::Decode`] on invalid UTF-8.
pub fn process_file(path: &Path) -> Result<FileStats> {
    let file = File::open(path).map_err(|source| EngineError::EntryUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut processor = default_processor();

    let tally = count_reader(&mut reader, &mut processor, path)?;
    Ok(FileStats::with_tally(path.to_path_buf(), tally))
}

/// Classify every record of `reader`.
///
/// `\n`, `\r\n` and a lone `\r` all end a record. A trailing record without
/// a terminator still counts as a line; an empty input has no lines.
///
/// # Errors
/// See [`process_file`]. `path` is only used to label errors.
pub fn count_reader<R, P>(reader: &mut R, processor: &mut P, path: &Path) -> Result<LineTally>
where
    R: BufRead + ?Sized,
    P: LineProcessor + ?Sized,
{
    processor.reset();
    let mut tally = LineTally::zero();
    let mut chunk = Vec::new();

    loop {
        chunk.clear();
        let read = reader
            .read_until(b'\n', &mut chunk)
            .map_err(|source| EngineError::EntryUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        // chunk は `\n` で終わるか EOF まで。`\r\n` が chunk 境界をまたぐことはない
        let mut start = 0;
        for (i, &b) in chunk.iter().enumerate() {
            if b == b'\r' && chunk.get(i + 1) != Some(&b'\n') {
                record(&chunk[start..=i], processor, &mut tally, path)?;
                start = i + 1;
            }
        }
        if start < chunk.len() {
            record(&chunk[start..], processor, &mut tally, path)?;
        }
    }

    Ok(tally)
}

fn record<P>(bytes: &[u8], processor: &mut P, tally: &mut LineTally, path: &Path) -> Result<()>
where
    P: LineProcessor + ?Sized,
{
    let line = std::str::from_utf8(bytes).map_err(|_| EngineError::Decode {
        path: path.to_path_buf(),
        line: tally.total + 1,
    })?;
    tally.record(processor.classify(line));
    Ok(())
}
