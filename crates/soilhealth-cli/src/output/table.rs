//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use owo_colors::{OwoColorize, Stream};
use soilhealth::{
    format_ranges, Classification, HealthSummary, Parameter, ParameterAssessment, ParameterKind,
    Severity, TestValue,
};

/// Placeholder shown for parameters without a value.
const NO_VALUE_HINT: &str = "Enter a value";

/// Format assessment rows as a table, one row per parameter.
pub fn format_assessment_table(parameters: &[Parameter], rows: &[ParameterAssessment]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Parameter", "Health Range", "Value", "Evaluation"]);

    for (parameter, row) in parameters.iter().zip(rows) {
        table.add_row(vec![
            parameter_cell(row),
            format_ranges(&parameter.ranges),
            value_cell(&row.value),
            evaluation_cell(row.classification.as_ref()),
        ]);
    }

    table
}

/// Format the one-line health summary.
pub fn format_summary(summary: &HealthSummary) -> String {
    let verdict = summary.verdict.to_string();
    format!(
        "{} | Good: {} | Moderate: {} | Poor: {} | Parameters: {}",
        paint(&verdict, summary.verdict.severity()),
        summary.good,
        summary.moderate,
        summary.poor,
        summary.total,
    )
}

fn parameter_cell(row: &ParameterAssessment) -> String {
    let mut cell = row.name.clone();
    if !row.unit.is_empty() {
        cell.push_str(&format!(" ({})", row.unit));
    }
    if row.kind == ParameterKind::Computed {
        cell.push_str(" • computed");
    }
    cell
}

fn value_cell(value: &TestValue) -> String {
    match value {
        TestValue::Numeric(n) if n.is_finite() => n.to_string(),
        TestValue::Numeric(_) => String::new(),
        TestValue::Categorical(text) => text.trim().to_string(),
    }
}

fn evaluation_cell(classification: Option<&Classification>) -> String {
    match classification {
        Some(c) => {
            let text = if c.message.is_empty() { &c.label } else { &c.message };
            paint(text, c.severity)
        }
        None => NO_VALUE_HINT.to_string(),
    }
}

/// Color text by severity when stdout supports it.
fn paint(text: &str, severity: Severity) -> String {
    match severity {
        Severity::Good => text
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
        Severity::Moderate => text
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string(),
        Severity::Poor => text
            .if_supports_color(Stream::Stdout, |t| t.red())
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_cell_hides_unresolved_numbers() {
        assert_eq!(value_cell(&TestValue::Numeric(f64::NAN)), "");
        assert_eq!(value_cell(&TestValue::Numeric(f64::INFINITY)), "");
        assert_eq!(value_cell(&TestValue::Numeric(2.5)), "2.5");
        assert_eq!(value_cell(&TestValue::Categorical(" Dark ".into())), "Dark");
    }

    #[test]
    fn evaluation_cell_without_classification() {
        assert_eq!(evaluation_cell(None), NO_VALUE_HINT);
    }

    #[test]
    fn parameter_cell_marks_computed() {
        let row = ParameterAssessment {
            id: "ratio".into(),
            name: "Sand/clay".into(),
            unit: "x".into(),
            kind: ParameterKind::Computed,
            value: TestValue::Numeric(2.0),
            classification: None,
        };
        assert_eq!(parameter_cell(&row), "Sand/clay (x) • computed");
    }
}
