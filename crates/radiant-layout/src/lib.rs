#![forbid(unsafe_code)]

//! Radial partition layout for sunburst charts (headless).
//!
//! Consumes the hierarchy built by `radiant-core`, assigns every node an
//! angular interval and a radial band proportional to weight, resolves
//! inherited colors, and exposes the result as a flat wedge list for an
//! external renderer. No drawing happens here.

pub mod color;
pub mod hit;
pub mod label;
pub mod model;
pub mod partition;
pub mod tooltip;
pub mod view;

pub use color::Palette;
pub use model::{SunburstLayout, Wedge};
pub use partition::layout_sunburst;
pub use view::{RebuildOutcome, SunburstSession, ViewState};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot lay out an empty hierarchy; branch on the no-data case before calling layout")]
    EmptyHierarchy,
    #[error("invalid hierarchy: {message}")]
    InvalidHierarchy { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Child ordering within a parent's angular interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildSort {
    /// Descending by weight; ties keep builder output order (stable sort).
    #[default]
    WeightDescending,
    /// Builder output order as-is.
    InputOrder,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Maximum radius of the outermost ring.
    pub radius: f64,
    pub sort: ChildSort,
    /// Minimum angular width in radians applied to thin wedges. `0.0` (the
    /// default) keeps zero-weight wedges at zero width, preserving exact
    /// angle conservation; a positive floor rescales siblings to fit.
    pub min_angle: f64,
    pub palette: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 250.0,
            sort: ChildSort::default(),
            min_angle: 0.0,
            palette: Palette::default(),
        }
    }
}
