use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::EntryOrder;
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Lists the entries directly inside `config.root`.
///
/// Nothing is filtered: hidden files, ignore files and subdirectories are all
/// yielded, so that unreadable entries surface as errors when they are counted.
///
/// # Errors
/// Returns [`EngineError::DirectoryNotFound`] or [`EngineError::NotADirectory`]
/// when the root cannot be listed. Failures on individual entries are yielded
/// by the iterator.
pub fn entries(config: &Config) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    let root = &config.root;
    let meta = std::fs::metadata(root).map_err(|source| EngineError::DirectoryNotFound {
        path: root.clone(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(EngineError::NotADirectory { path: root.clone() });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1));

    if matches!(config.order, EntryOrder::Sorted) {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    log::trace!("listing {}", root.display());

    // depth 0 はルート自身
    let iter = builder.build().filter_map(|entry| match entry {
        Ok(entry) if entry.depth() == 0 => None,
        Ok(entry) => Some(Ok(entry.into_path())),
        Err(err) => Some(Err(EngineError::from(err))),
    });

    Ok(iter)
}

/// Eager variant of [`entries`] that stops at the first failing entry.
///
/// # Errors
/// Same as [`entries`], plus the first per-entry listing failure.
pub fn list_entries(config: &Config) -> Result<Vec<PathBuf>> {
    entries(config)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, order: EntryOrder) -> Config {
        ConfigBuilder::default()
            .root(dir.path())
            .order(order)
            .build()
            .unwrap()
    }

    #[test]
    fn lists_every_entry_without_recursing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "x\n").unwrap();
        fs::write(dir.path().join(".hidden"), "y\n").unwrap();
        fs::write(dir.path().join(".gitignore"), "a.txt\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.txt"), "z\n").unwrap();

        let mut names: Vec<String> = list_entries(&config_for(&dir, EntryOrder::Listing))
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, [".gitignore", ".hidden", "a.txt", "nested"]);
    }

    #[test]
    fn sorted_order_is_by_file_name() {
        let dir = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let names: Vec<_> = list_entries(&config_for(&dir, EntryOrder::Sorted))
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_owned())
            .collect();

        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(list_entries(&config_for(&dir, EntryOrder::Listing)).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_directory_not_found() {
        let dir = TempDir::new().unwrap();
        let config = ConfigBuilder::default()
            .root(dir.path().join("missing"))
            .build()
            .unwrap();

        let err = list_entries(&config).unwrap_err();
        assert!(matches!(err, EngineError::DirectoryNotFound { .. }));
    }

    #[test]
    fn file_root_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let config = ConfigBuilder::default().root(file).build().unwrap();

        let err = list_entries(&config).unwrap_err();
        assert!(matches!(err, EngineError::NotADirectory { .. }));
    }
}
