use log::{debug, trace};

use crate::license::precedence::{Precedence, Rule};
use crate::models::LicenseFile;

/// Upper-cased file name without its final extension.
///
/// Only the text after the last `/` is considered, ignoring trailing slashes.
/// A leading dot does not start an extension (`.license` stays `.LICENSE`),
/// and `.` or `..` components are kept as they are.
pub fn base_name(filename: &str) -> String {
    let trimmed = filename.trim_end_matches('/');
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let stem = match name.rfind('.') {
        Some(dot) if dot > 0 && name != ".." => &name[..dot],
        _ => name,
    };
    stem.to_uppercase()
}

/// List license files in precedence order using the built-in table.
pub fn find_license_files<S: AsRef<str>>(dir_files: &[S]) -> Vec<&str> {
    Precedence::builtin().find(dir_files)
}

/// The single file that best documents the directory's license, if any.
pub fn best_license_file<S: AsRef<str>>(dir_files: &[S]) -> Option<&str> {
    Precedence::builtin().best(dir_files)
}

impl Precedence {
    /// Highest-precedence rule matching `filename`, with its rank.
    pub fn classify(&self, filename: &str) -> Option<(usize, &Rule)> {
        let base = base_name(filename);
        self.rules()
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.is_match(&base))
    }

    /// Matching filenames, at most one per rule, ordered by rule rank.
    ///
    /// Rules are applied in order, each taking the earliest filename in
    /// `dir_files` that matches it and was not taken by a higher rule.
    pub fn find<'a, S: AsRef<str>>(&self, dir_files: &'a [S]) -> Vec<&'a str> {
        self.hits(dir_files)
            .into_iter()
            .map(|(_, filename)| filename)
            .collect()
    }

    /// Same as [`find`](Self::find), with each match annotated by its rule.
    pub fn find_ranked<S: AsRef<str>>(&self, dir_files: &[S]) -> Vec<LicenseFile> {
        self.hits(dir_files)
            .into_iter()
            .map(|(rank, filename)| LicenseFile {
                name: filename.to_string(),
                rule: self.rules()[rank].label().to_string(),
                rank,
            })
            .collect()
    }

    pub fn best<'a, S: AsRef<str>>(&self, dir_files: &'a [S]) -> Option<&'a str> {
        self.find(dir_files).into_iter().next()
    }

    fn hits<'a, S: AsRef<str>>(&self, dir_files: &'a [S]) -> Vec<(usize, &'a str)> {
        let base_names: Vec<String> = dir_files
            .iter()
            .map(|filename| base_name(filename.as_ref()))
            .collect();
        let mut taken = vec![false; dir_files.len()];

        let mut hits = Vec::new();
        for (rank, rule) in self.rules().iter().enumerate() {
            let index = base_names
                .iter()
                .zip(&taken)
                .position(|(base, taken)| !taken && rule.is_match(base));
            match index {
                Some(index) => {
                    taken[index] = true;
                    let filename = dir_files[index].as_ref();
                    debug!("{} matches rule {} (rank {})", filename, rule.label(), rank);
                    hits.push((rank, filename));
                }
                None => trace!("no file matches rule {}", rule.label()),
            }
        }
        hits
    }
}
