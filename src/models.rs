use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A filename selected by the matcher together with the rule that selected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseFile {
    /// Filename exactly as it appeared in the directory listing.
    pub name: String,
    /// Label of the matching rule, e.g. `LICENSE-*`.
    pub rule: String,
    /// Position of the rule in the precedence table; lower wins.
    pub rank: usize,
}

/// Result of scanning one directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub path: PathBuf,
    pub files: Vec<LicenseFile>,
}

impl ScanReport {
    pub fn best(&self) -> Option<&LicenseFile> {
        self.files.first()
    }
}
