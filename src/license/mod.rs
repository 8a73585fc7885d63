//! License file detection from a directory listing.
//!
//! - [`precedence`] — the ordered rule table (label + pattern) that defines
//!   which names count as license documentation and how they rank.
//! - [`matcher`] — base-name extraction and the entry points that filter and
//!   reorder a listing against a table.

pub mod matcher;
pub mod precedence;
