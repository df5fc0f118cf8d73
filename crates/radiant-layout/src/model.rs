use serde::{Deserialize, Serialize};

/// One laid-out node, ready to be drawn as an annular wedge.
///
/// Angles are radians in `[0, 2π]` with zero at 12 o'clock, increasing
/// clockwise; radii are in `[0, radius]`. `path` is the ancestor-name chain
/// from the first ring down to the node itself (synthetic root excluded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub name: String,
    pub depth: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub fill: String,
    /// Leaf value, or children sum for ring-1 nodes with a breakdown.
    pub weight: f64,
    pub path: Vec<String>,
    /// Aggregated test count carried by ring-1 nodes for tooltip display.
    /// Never contributes to `weight`.
    #[serde(rename = "totalTestsHint")]
    pub total_tests_hint: Option<f64>,
}

impl Wedge {
    pub fn angular_width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// The flattened layout for one jurisdiction selection. Wedges are in
/// breadth-first order (ring 1 first), root excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunburstLayout {
    pub radius: f64,
    /// 1 when no category has an outcome breakdown, 2 otherwise.
    pub max_depth: usize,
    pub wedges: Vec<Wedge>,
}

impl SunburstLayout {
    pub fn ring(&self, depth: usize) -> impl Iterator<Item = &Wedge> {
        self.wedges.iter().filter(move |w| w.depth == depth)
    }
}
