use std::path::Path;

use log::warn;

use crate::error::{Error, Result};

/// Names of the entries directly inside `dir`, sorted.
///
/// Files and sub-directories are both listed, symlinks are not followed and
/// nothing is read beyond the directory itself. Entries whose name is not
/// valid UTF-8 are skipped.
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let io_err = |source: std::io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!(
                "skipping non UTF-8 entry {} in {}",
                name.to_string_lossy(),
                dir.display()
            ),
        }
    }

    names.sort();
    Ok(names)
}
