//! Report renderers for scan results.
//!
//! - [`terminal`] — colored header and table of matches; respects `--quiet`.
//! - JSON output is a plain `serde_json` dump of [`ScanReport`](license_files::ScanReport)
//!   and lives in `main`.

pub mod terminal;
