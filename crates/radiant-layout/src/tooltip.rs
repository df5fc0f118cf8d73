use crate::label::pretty_label;
use crate::model::Wedge;
use serde::Serialize;

/// Content for an external tooltip collaborator. Positioning and styling are
/// out of scope; this is the data the original chart put in its hover box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    /// Pretty ancestor path, root excluded, joined with arrows.
    pub header: String,
    pub value: f64,
    pub value_label: &'static str,
    /// Swatch color, same as the wedge fill.
    pub fill: String,
}

impl TooltipContent {
    pub fn value_line(&self) -> String {
        format!("{} {}", format_count(self.value), self.value_label)
    }
}

/// Pure function of a laid-out wedge: ring-1 wedges report the aggregated
/// test count from the hint, outcome wedges report their penalty weight.
pub fn tooltip_content(wedge: &Wedge) -> TooltipContent {
    let header = wedge
        .path
        .iter()
        .map(|name| pretty_label(name))
        .collect::<Vec<_>>()
        .join(" → ");
    let (value, value_label) = if wedge.depth == 1 {
        (wedge.total_tests_hint.unwrap_or(0.0), "total positive tests")
    } else {
        (wedge.weight, "penalties")
    };
    TooltipContent {
        header,
        value,
        value_label,
        fill: wedge.fill.clone(),
    }
}

/// Thousands-separated count formatting, up to three decimals with trailing
/// zeros trimmed.
pub fn format_count(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let negative = v < 0.0;
    let rounded = (v.abs() * 1000.0).round() / 1000.0;
    let int_part = rounded.trunc() as u64;
    let frac = rounded - int_part as f64;

    let digits = int_part.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if negative && rounded != 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if frac > 0.0 {
        let mut frac_str = format!("{frac:.3}");
        while frac_str.ends_with('0') {
            frac_str.pop();
        }
        if !frac_str.ends_with('.') {
            // "0.25" -> ".25"
            out.push_str(&frac_str[1..]);
        }
    }
    out
}
