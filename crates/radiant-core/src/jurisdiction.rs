use crate::Record;
use std::collections::BTreeSet;

/// The sorted distinct jurisdiction values in the full record set, for an
/// external selector control to populate.
pub fn distinct_jurisdictions(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.jurisdiction.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The dashboard's default selection: the first jurisdiction in sorted order,
/// or `None` for an empty record set.
pub fn default_selection(records: &[Record]) -> Option<String> {
    distinct_jurisdictions(records).into_iter().next()
}

/// Advisory text for jurisdictions whose source database cannot provide the
/// full breakdown. Shown next to the chart as a warning note.
pub fn data_note(jurisdiction: &str) -> Option<&'static str> {
    match jurisdiction {
        "VIC" | "TAS" => Some(
            "Note: Fines, arrests and charges data cannot be provided since the database only provides detection data.",
        ),
        "NT" => Some(
            "Note: Drug test data cannot be provided since the database only provides breath test data.",
        ),
        "QLD" => Some(
            "Note: Fines, arrests and charges data cannot be provided for breath test conducted.",
        ),
        _ => None,
    }
}
