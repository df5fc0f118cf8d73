use crate::model::{SunburstLayout, Wedge};
use crate::{ChildSort, Error, LayoutConfig, Result, color};
use radiant_core::TreeNode;
use std::f64::consts::TAU;

/// Flat-index hierarchy node used during layout.
#[derive(Debug, Clone)]
pub(crate) struct ArcNode {
    pub(crate) name: String,
    own_value: f64,
    pub(crate) weight: f64,
    total_tests_hint: Option<f64>,
    parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    depth: usize,
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

fn push_node(
    nodes: &mut Vec<ArcNode>,
    node: &TreeNode,
    parent: Option<usize>,
    depth: usize,
) -> Result<()> {
    if !node.children.is_empty() && node.value.is_some() {
        return Err(Error::InvalidHierarchy {
            message: format!(
                "node \"{}\" has both children and an explicit value",
                node.name
            ),
        });
    }
    let own_value = if node.children.is_empty() {
        node.value.unwrap_or(0.0)
    } else {
        0.0
    };
    let idx = nodes.len();
    nodes.push(ArcNode {
        name: node.name.clone(),
        own_value,
        weight: 0.0,
        total_tests_hint: node.total_tests_hint,
        parent,
        children: Vec::new(),
        depth,
        x0: 0.0,
        x1: 0.0,
        y0: 0.0,
        y1: 0.0,
    });

    if let Some(parent_idx) = parent {
        nodes[parent_idx].children.push(idx);
    }

    for child in &node.children {
        push_node(nodes, child, Some(idx), depth + 1)?;
    }
    Ok(())
}

fn compute_weight(nodes: &mut [ArcNode], idx: usize) -> f64 {
    let mut sum = nodes[idx].own_value;
    let children = nodes[idx].children.clone();
    for c in children {
        sum += compute_weight(nodes, c);
    }
    nodes[idx].weight = sum;
    sum
}

fn sort_children_by_weight(nodes: &mut [ArcNode], idx: usize) {
    let mut items = nodes[idx]
        .children
        .iter()
        .copied()
        .enumerate()
        .map(|(pos, child)| (child, pos))
        .collect::<Vec<_>>();
    items.sort_by(|(a, a_pos), (b, b_pos)| {
        let av = nodes[*a].weight;
        let bv = nodes[*b].weight;
        bv.partial_cmp(&av)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a_pos.cmp(b_pos))
    });
    nodes[idx].children = items.into_iter().map(|(child, _pos)| child).collect();

    let children = nodes[idx].children.clone();
    for c in children {
        sort_children_by_weight(nodes, c);
    }
}

pub(crate) fn each_before(nodes: &[ArcNode], root: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        out.push(idx);
        for &c in nodes[idx].children.iter().rev() {
            stack.push(c);
        }
    }
    out
}

fn descendants_bfs(nodes: &[ArcNode], root: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut next = vec![root];
    while !next.is_empty() {
        let mut current = next;
        current.reverse();
        next = Vec::new();
        while let Some(idx) = current.pop() {
            out.push(idx);
            for &c in &nodes[idx].children {
                next.push(c);
            }
        }
    }
    out
}

/// Angular widths for one sibling group within a parent span.
///
/// Proportional to weight when the parent weight is nonzero; an even split
/// otherwise (all-zero siblings keep their identity as zero-area wedges
/// rather than dividing by zero). A positive `min_angle` floors thin wedges
/// and rescales the rest to fit the span.
fn angular_widths(span: f64, weights: &[f64], min_angle: f64) -> Vec<f64> {
    let k = weights.len();
    debug_assert!(k > 0);
    let total: f64 = weights.iter().sum();

    let mut widths = if total > 0.0 {
        weights.iter().map(|w| span * w / total).collect::<Vec<_>>()
    } else {
        vec![span / k as f64; k]
    };

    if min_angle <= 0.0 {
        return widths;
    }
    if min_angle * k as f64 >= span {
        return vec![span / k as f64; k];
    }

    // Floor thin wedges, then rescale the rest into the remaining span.
    // Rescaling can push more wedges under the floor, so iterate (at most k
    // rounds) until the floored set is stable.
    let proportional = widths.clone();
    let mut floored = vec![false; k];
    loop {
        let mut changed = false;
        for i in 0..k {
            if !floored[i] && widths[i] < min_angle {
                floored[i] = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
        let floored_count = floored.iter().filter(|f| **f).count();
        let rest = span - min_angle * floored_count as f64;
        let unfloored_sum: f64 = (0..k)
            .filter(|&i| !floored[i])
            .map(|i| proportional[i])
            .sum();
        for i in 0..k {
            widths[i] = if floored[i] {
                min_angle
            } else if unfloored_sum > 0.0 {
                proportional[i] * rest / unfloored_sum
            } else {
                rest / (k - floored_count) as f64
            };
        }
    }
    widths
}

/// Lays out a built hierarchy as a radial partition.
///
/// The root covers the full `[0, 2π)` span at a point radius; rings are
/// uniform bands of thickness `radius / max_depth`; each parent's span is
/// divided among its (sorted) children in contiguous sub-intervals
/// proportional to weight.
///
/// Invoking this on an empty root is a caller error: branch on the no-data
/// case first (see `SunburstSession`).
pub fn layout_sunburst(root: &TreeNode, config: &LayoutConfig) -> Result<SunburstLayout> {
    if root.children.is_empty() {
        return Err(Error::EmptyHierarchy);
    }

    let mut nodes: Vec<ArcNode> = Vec::new();
    push_node(&mut nodes, root, None, 0)?;
    let root_idx = 0usize;

    compute_weight(&mut nodes, root_idx);
    if matches!(config.sort, ChildSort::WeightDescending) {
        sort_children_by_weight(&mut nodes, root_idx);
    }

    let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(1).max(1);
    let band = config.radius / max_depth as f64;

    nodes[root_idx].x0 = 0.0;
    nodes[root_idx].x1 = TAU;
    nodes[root_idx].y0 = 0.0;
    nodes[root_idx].y1 = 0.0;

    for idx in each_before(&nodes, root_idx) {
        if idx != root_idx {
            let depth = nodes[idx].depth;
            nodes[idx].y0 = (depth - 1) as f64 * band;
            nodes[idx].y1 = depth as f64 * band;
        }
        let children = nodes[idx].children.clone();
        if children.is_empty() {
            continue;
        }
        let span = nodes[idx].x1 - nodes[idx].x0;
        let weights = children.iter().map(|&c| nodes[c].weight).collect::<Vec<_>>();
        let widths = angular_widths(span, &weights, config.min_angle);
        let mut x = nodes[idx].x0;
        for (&child, width) in children.iter().zip(widths) {
            nodes[child].x0 = x;
            x += width;
            nodes[child].x1 = x;
        }
    }

    let fills = color::resolve_colors(&nodes, &config.palette);

    let mut wedges = Vec::new();
    for idx in descendants_bfs(&nodes, root_idx) {
        if idx == root_idx {
            continue;
        }
        let n = &nodes[idx];
        let mut path = vec![n.name.clone()];
        let mut cursor = n.parent;
        while let Some(p) = cursor {
            if p != root_idx {
                path.push(nodes[p].name.clone());
            }
            cursor = nodes[p].parent;
        }
        path.reverse();
        wedges.push(Wedge {
            name: n.name.clone(),
            depth: n.depth,
            x0: n.x0,
            x1: n.x1,
            y0: n.y0,
            y1: n.y1,
            fill: fills[idx].clone(),
            weight: n.weight,
            path,
            total_tests_hint: if n.depth == 1 { n.total_tests_hint } else { None },
        });
    }
    tracing::debug!(wedges = wedges.len(), max_depth, "computed sunburst layout");

    Ok(SunburstLayout {
        radius: config.radius,
        max_depth,
        wedges,
    })
}
