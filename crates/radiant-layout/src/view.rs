use crate::model::SunburstLayout;
use crate::partition::layout_sunburst;
use crate::{LayoutConfig, Result, label};
use radiant_core::{Record, build_hierarchy, data_note, distinct_jurisdictions};
use serde::Serialize;

/// What one rebuild produced. The no-data conditions are ordinary states, not
/// errors: the view renders an informational message instead of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum RebuildOutcome {
    /// The full record set is empty; nothing can ever be shown.
    EmptyDataset,
    /// The selected jurisdiction matched zero records.
    EmptySelection,
    Layout { sunburst: SunburstLayout },
}

/// The immutable result of one selection change. A new `ViewState` replaces
/// the previous one wholesale; nothing is patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Monotonic rebuild counter; a renderer still holding an older
    /// generation knows it has been superseded.
    pub generation: u64,
    pub jurisdiction: Option<String>,
    pub center_label: String,
    /// Advisory text for jurisdictions with known source-data gaps.
    pub data_note: Option<&'static str>,
    #[serde(flatten)]
    pub outcome: RebuildOutcome,
}

/// Owns the record set and the current selection for one sunburst view.
///
/// Every `select` runs filter → build → layout → color synchronously and
/// atomically: consumers only ever observe a complete `ViewState`. Rapid
/// successive selections are last-write-wins; there is no queue of pending
/// rebuilds.
#[derive(Debug, Clone)]
pub struct SunburstSession {
    records: Vec<Record>,
    config: LayoutConfig,
    generation: u64,
    state: Option<ViewState>,
}

impl SunburstSession {
    pub fn new(records: Vec<Record>, config: LayoutConfig) -> Self {
        Self {
            records,
            config,
            generation: 0,
            state: None,
        }
    }

    /// Sorted distinct jurisdictions in the full record set, for the external
    /// selector control.
    pub fn jurisdictions(&self) -> Vec<String> {
        distinct_jurisdictions(&self.records)
    }

    /// The state of the most recent rebuild, or `None` before the first
    /// selection.
    pub fn state(&self) -> Option<&ViewState> {
        self.state.as_ref()
    }

    /// Changes the jurisdiction filter (`None` selects all jurisdictions) and
    /// rebuilds. The returned state has fully superseded any previous one.
    pub fn select(&mut self, jurisdiction: Option<&str>) -> Result<&ViewState> {
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            jurisdiction = jurisdiction.unwrap_or("<all>"),
            "rebuilding sunburst view"
        );

        let outcome = if self.records.is_empty() {
            RebuildOutcome::EmptyDataset
        } else {
            let root = build_hierarchy(&self.records, jurisdiction);
            if root.children.is_empty() {
                RebuildOutcome::EmptySelection
            } else {
                RebuildOutcome::Layout {
                    sunburst: layout_sunburst(&root, &self.config)?,
                }
            }
        };

        Ok(self.state.insert(ViewState {
            generation: self.generation,
            jurisdiction: jurisdiction.map(str::to_string),
            center_label: label::center_label(jurisdiction),
            data_note: jurisdiction.and_then(data_note),
            outcome,
        }))
    }
}
