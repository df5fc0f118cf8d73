#![forbid(unsafe_code)]

//! Enforcement-record data model and sunburst hierarchy builder (headless).
//!
//! Design goals:
//! - pure, deterministic builds: identical `(records, jurisdiction)` inputs
//!   always yield a structurally identical tree
//! - strictly typed records (the normalizer boundary coerces, this crate only
//!   validates)
//! - no rendering, no I/O

pub mod error;
pub mod hierarchy;
pub mod jurisdiction;
pub mod outcome;
pub mod record;

pub use error::{Error, Result};
pub use hierarchy::{TreeNode, build_hierarchy};
pub use jurisdiction::{data_note, default_selection, distinct_jurisdictions};
pub use outcome::Outcome;
pub use record::Record;

#[cfg(test)]
mod tests;
