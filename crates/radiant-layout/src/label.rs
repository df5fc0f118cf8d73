/// Display name for a node. Category and outcome names arrive in source-data
/// casing; the dashboard shows friendlier labels.
pub fn pretty_label(name: &str) -> String {
    let n = name.to_lowercase();
    if n.contains("breath") {
        return "Breath tests".to_string();
    }
    if n.contains("drug") {
        return "Drug tests".to_string();
    }
    if n.contains("fine") {
        return "Fines".to_string();
    }
    if n.contains("arrest") {
        return "Arrests".to_string();
    }
    if n.contains("charge") {
        return "Charges".to_string();
    }
    name.to_string()
}

/// Text for the chart's center label.
pub fn center_label(jurisdiction: Option<&str>) -> String {
    match jurisdiction {
        Some(j) => j.to_string(),
        None => "All jurisdictions".to_string(),
    }
}
