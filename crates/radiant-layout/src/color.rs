use crate::partition::{ArcNode, each_before};
use radiant_core::Outcome;
use serde::{Deserialize, Serialize};

/// Fixed outcome palette. The dashboard's original CSS colors, alpha dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub fines: String,
    pub arrests: String,
    pub charges: String,
    /// Used when neither the node nor any descendant names a known outcome.
    pub fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fines: "#5d90c6".to_string(),
            arrests: "#a9e8b3".to_string(),
            charges: "#8bd7d4".to_string(),
            fallback: "#9faac7".to_string(),
        }
    }
}

impl Palette {
    pub fn outcome(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Fines => &self.fines,
            Outcome::Arrests => &self.arrests,
            Outcome::Charges => &self.charges,
        }
    }

    pub fn for_name(&self, name: &str) -> Option<&str> {
        Outcome::from_name(name).map(|o| self.outcome(o))
    }
}

/// Resolves one color per arena node, in a single pass over the tree.
///
/// Outcome-named nodes take their palette color directly; other nodes inherit
/// from the first outcome-named leaf among their descendants in preorder;
/// anything else falls back to the neutral color. Pure function of tree
/// position, recomputed identically on every rebuild.
pub(crate) fn resolve_colors(nodes: &[ArcNode], palette: &Palette) -> Vec<String> {
    let mut fills = Vec::with_capacity(nodes.len());
    for (idx, node) in nodes.iter().enumerate() {
        if let Some(color) = palette.for_name(&node.name) {
            fills.push(color.to_string());
            continue;
        }
        let inherited = each_before(nodes, idx)
            .into_iter()
            .filter(|&d| nodes[d].children.is_empty())
            .find_map(|d| palette.for_name(&nodes[d].name));
        fills.push(inherited.unwrap_or(&palette.fallback).to_string());
    }
    fills
}
