use crate::{Outcome, Record};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node of the built hierarchy: synthetic root (depth 0), category nodes
/// (depth 1), outcome leaves (depth 2).
///
/// `children` non-empty and `value` set are mutually exclusive; a group that
/// would produce neither is dropped by the builder. `total_tests_hint` is
/// display metadata only and never contributes to layout weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default, rename = "totalTestsHint")]
    pub total_tests_hint: Option<f64>,
    pub depth: usize,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Layout weight: a leaf's explicit value, or the children sum.
    pub fn weight(&self) -> f64 {
        if self.is_leaf() {
            self.value.unwrap_or(0.0)
        } else {
            self.children.iter().map(TreeNode::weight).sum()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct OutcomeTotals {
    fines: f64,
    arrests: f64,
    charges: f64,
    total_tests: f64,
}

impl OutcomeTotals {
    fn add(&mut self, record: &Record) {
        self.fines += record.fines;
        self.arrests += record.arrests;
        self.charges += record.charges;
        self.total_tests += record.total_tests;
    }

    fn outcome(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Fines => self.fines,
            Outcome::Arrests => self.arrests,
            Outcome::Charges => self.charges,
        }
    }

    fn has_breakdown(&self) -> bool {
        self.fines > 0.0 || self.arrests > 0.0 || self.charges > 0.0
    }
}

/// Builds the root → category → outcome hierarchy for one jurisdiction
/// selection (`None` means "all jurisdictions").
///
/// Pure: the same `(records, jurisdiction)` always yields a structurally
/// identical tree. Categories keep first-seen input order; a jurisdiction
/// with no matching records yields a root with zero children, which callers
/// must treat as "no data" instead of invoking layout.
pub fn build_hierarchy(records: &[Record], jurisdiction: Option<&str>) -> TreeNode {
    let mut groups: IndexMap<&str, OutcomeTotals> = IndexMap::new();
    for record in records {
        if jurisdiction.is_some_and(|filter| record.jurisdiction != filter) {
            continue;
        }
        groups.entry(record.category.as_str()).or_default().add(record);
    }
    tracing::debug!(
        jurisdiction = jurisdiction.unwrap_or("<all>"),
        groups = groups.len(),
        "grouped records by category"
    );

    let mut root = TreeNode {
        name: "root".to_string(),
        children: Vec::new(),
        value: None,
        total_tests_hint: None,
        depth: 0,
    };

    for (category, totals) in &groups {
        let mut node = TreeNode {
            name: (*category).to_string(),
            children: Vec::new(),
            value: None,
            total_tests_hint: Some(totals.total_tests),
            depth: 1,
        };

        if totals.has_breakdown() {
            for outcome in Outcome::ALL {
                let sum = totals.outcome(outcome);
                if sum > 0.0 {
                    node.children.push(TreeNode {
                        name: outcome.name().to_string(),
                        children: Vec::new(),
                        value: Some(sum),
                        total_tests_hint: None,
                        depth: 2,
                    });
                }
            }
        } else if totals.total_tests > 0.0 {
            // No outcome breakdown, but the test count stands in as a single
            // ring leaf.
            node.value = Some(totals.total_tests);
        } else {
            continue;
        }

        root.children.push(node);
    }

    root
}
