//! `license-files` — find the files that document a directory's license.
//!
//! The core is a pure function over a directory listing: given filenames, it
//! returns the ones that follow a known license file naming convention
//! (`LICENSE`, `LICENSE-MIT`, `COPYING`, `README`, ...), one per convention,
//! ordered by the convention's precedence rather than by input order.
//!
//! ```
//! use license_files::find_license_files;
//!
//! let files = find_license_files(&["readme.md", "src", "LICENSE"]);
//! assert_eq!(files, vec!["LICENSE", "readme.md"]);
//! ```
//!
//! - [`license`] — precedence table and matcher.
//! - [`listing`] — one-level directory listing to feed the matcher.
//! - [`config`] — optional TOML adjustments to the precedence table.

pub mod config;
pub mod error;
pub mod license;
pub mod listing;
pub mod models;

use std::path::Path;

pub use error::{Error, Result};
pub use license::matcher::{base_name, best_license_file, find_license_files};
pub use license::precedence::{Precedence, Rule};
pub use models::{LicenseFile, ScanReport};

/// List `dir` and match its entries against `precedence`.
pub fn scan_dir(dir: &Path, precedence: &Precedence) -> Result<ScanReport> {
    let names = listing::list_dir(dir)?;
    Ok(ScanReport {
        path: dir.to_path_buf(),
        files: precedence.find_ranked(&names),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_dir() {
        let dir = TempDir::new().unwrap();
        for name in ["README.md", "LICENSE-APACHE", "LICENSE-MIT", "main.rs"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let report = scan_dir(dir.path(), Precedence::builtin()).unwrap();
        let names: Vec<&str> = report.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["LICENSE-APACHE", "README.md"]);
        assert_eq!(report.best().map(|f| f.rule.as_str()), Some("LICENSE-*"));
    }
}
