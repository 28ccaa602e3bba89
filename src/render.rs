//! Plain-text rendering of the result and metric views for the terminal.

use common::format::{format_currency, format_date, format_percent};
use compute::presentation::{MetricsView, Render, ResultsView};
use compute::{CycleErrors, ResidualSummary, Severity};

/// Renders views as aligned text tables.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "(good)",
        Severity::Neutral => "",
        Severity::Bad => "(bad)",
    }
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let joined = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n", joined.trim_end())
    };

    let mut out = line(headers.to_vec());
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

impl Render<ResultsView> for TerminalRenderer {
    type Output = String;

    fn render(&self, view: &ResultsView) -> String {
        let mut out = format!(
            "Forecast: {} vs {} ({})\n\n",
            view.model_a, view.model_b, view.horizon
        );

        let chart_rows: Vec<Vec<String>> = view
            .chart
            .iter()
            .map(|row| {
                vec![
                    format_date(row.timestamp),
                    format_currency(row.actual),
                    format_currency(row.prediction_a),
                    format_currency(row.prediction_b),
                ]
            })
            .collect();
        out.push_str("Series\n");
        out.push_str(&table(
            &["Date", "Actual", view.model_a.as_str(), view.model_b.as_str()],
            &chart_rows,
        ));

        let table_rows: Vec<Vec<String>> = view
            .table
            .iter()
            .map(|row| {
                vec![
                    row.date.clone(),
                    row.actual.clone(),
                    row.prediction_a.clone(),
                    row.prediction_b.clone(),
                    row.lower_bound.clone(),
                    row.upper_bound.clone(),
                ]
            })
            .collect();
        out.push_str("\nPredictions\n");
        out.push_str(&table(
            &["Date", "Actual", view.model_a.as_str(), view.model_b.as_str(), "Lower", "Upper"],
            &table_rows,
        ));
        out
    }

    fn unavailable(&self, reason: &str) -> String {
        format!("Forecast data unavailable: {}\n", reason)
    }
}

impl Render<MetricsView> for TerminalRenderer {
    type Output = String;

    fn render(&self, view: &MetricsView) -> String {
        let mut out = format!("Model comparison: {} vs {}\n\n", view.model_a, view.model_b);

        let rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.label.to_string(),
                    format!("{} {}", row.model_a, severity_marker(row.severity_a)),
                    format!("{} {}", row.model_b, severity_marker(row.severity_b)),
                    row.improvement_text.clone(),
                ]
            })
            .collect();
        out.push_str(&table(
            &["Metric", view.model_a.as_str(), view.model_b.as_str(), "Improvement"],
            &rows,
        ));

        for line in view.headline.iter().chain(&view.explained_variance) {
            out.push_str(&format!("\n{}\n", line));
        }
        out
    }

    fn unavailable(&self, reason: &str) -> String {
        format!("Metrics unavailable: {}\n", reason)
    }
}

pub fn render_residuals(label: &str, summary: &ResidualSummary) -> String {
    let autocorrelation = summary
        .lag1_autocorrelation
        .map(|value| format!("{:.3}", value))
        .unwrap_or_else(|| common::format::PLACEHOLDER.to_string());

    format!(
        "{}: n={} mean={:.2} median={:.2} std={:.2} lag1={}\n",
        label, summary.count, summary.mean, summary.median, summary.std_dev, autocorrelation
    )
}

/// Mean relative error per month and weekday, as percentages.
pub fn render_cycle_errors(label: &str, errors: &CycleErrors) -> String {
    let percent = |error: f64| format_percent(Some(error * 100.0));
    let months = errors
        .by_month
        .iter()
        .map(|(month, error)| format!("{:02}={}", month, percent(*error)))
        .collect::<Vec<_>>()
        .join(" ");
    let weekdays = errors
        .by_weekday
        .iter()
        .map(|(day, error)| {
            let name = WEEKDAYS.get(*day as usize).copied().unwrap_or("?");
            format!("{}={}", name, percent(*error))
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}: by month {}\n{}: by weekday {}\n", label, months, label, weekdays)
}
