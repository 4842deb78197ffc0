//! Plain-text and JSON renderings of the dashboard views.

use crate::dashboard::{Snapshot, ViewState};
use crate::matrix::RealmColumn;
use crate::military::{MilitarySummary, Tier, UnitFamily, unit_cards};
use crate::view::{SortKey, Tab};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Formats an amount with `,` thousands separators and at most three
/// fraction digits (trailing zeros dropped).
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn write_table(
    writer: &mut impl Write,
    headers: &[String],
    rows: &[Vec<String>],
) -> std::io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{:<width$}", cell, width = *width)
                } else {
                    format!("{:>width$}", cell, width = *width)
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header = line(headers);
    writeln!(writer, "{}", header)?;
    writeln!(writer, "{}", "-".repeat(header.chars().count()))?;
    for row in rows {
        writeln!(writer, "{}", line(row.as_slice()))?;
    }
    Ok(())
}

fn header_label(label: &str, key: SortKey, view: &ViewState) -> String {
    if view.sort.key == key {
        format!("{} {}", label, view.sort.direction.arrow())
    } else {
        label.to_string()
    }
}

fn matrix_headers(first: &str, columns: &[RealmColumn], view: &ViewState) -> Vec<String> {
    let mut headers = vec![header_label(first, SortKey::Resource, view)];
    headers.extend(
        columns
            .iter()
            .map(|column| header_label(&column.name, SortKey::Realm(column.id), view)),
    );
    headers.push(header_label("Total", SortKey::Total, view));
    headers
}

fn matrix_rows(snapshot: &Snapshot, resources: &[String]) -> Vec<Vec<String>> {
    let matrix = snapshot.matrix();
    resources
        .iter()
        .map(|resource| {
            let mut cells = vec![resource.clone()];
            cells.extend(
                matrix
                    .columns()
                    .iter()
                    .map(|column| format_amount(matrix.amount(resource, column.id))),
            );
            cells.push(format_amount(matrix.total(resource)));
            cells
        })
        .collect()
}

/// Writes the resource × realm table for the rows `view` selects.
pub fn print_resource_table(
    snapshot: &Snapshot,
    view: &ViewState,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    let rows = snapshot.rows(view);
    let label = if view.tab == Tab::Military {
        "Unit Type"
    } else {
        "Resource"
    };
    if rows.is_empty() {
        writeln!(writer, "No matching resources.")?;
        return Ok(());
    }
    let headers = matrix_headers(label, snapshot.columns(), view);
    write_table(writer, &headers, &matrix_rows(snapshot, &rows))
}

/// Writes the family × tier summary table.
pub fn print_military_summary(
    summary: &MilitarySummary,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(writer, "=== Military Units Summary ===")?;
    if summary.is_empty() {
        writeln!(writer, "No military units found in the current data.")?;
        return Ok(());
    }

    let mut headers = vec!["Unit Type".to_string()];
    headers.extend(Tier::ALL.iter().map(|tier| tier.to_string()));
    headers.push("Total".to_string());

    let mut rows: Vec<Vec<String>> = UnitFamily::ALL
        .iter()
        .map(|family| {
            let counts = summary.family(*family);
            let mut cells = vec![family.to_string()];
            cells.extend(Tier::ALL.iter().map(|tier| format_amount(counts.tier(*tier))));
            cells.push(format_amount(counts.total));
            cells
        })
        .collect();

    let mut totals = vec!["Total".to_string()];
    totals.extend(
        Tier::ALL
            .iter()
            .map(|tier| format_amount(summary.totals.tier(*tier))),
    );
    totals.push(format_amount(summary.totals.grand_total));
    rows.push(totals);

    write_table(writer, &headers, &rows)
}

/// Writes the summary, the unit table and the per-family unit cards.
pub fn print_military_view(
    snapshot: &Snapshot,
    view: &ViewState,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    let view = view.clone().with_tab(Tab::Military);
    print_military_summary(snapshot.summary(), writer)?;
    writeln!(writer)?;

    writeln!(writer, "=== Military Units ===")?;
    print_resource_table(snapshot, &view, writer)?;
    writeln!(writer)?;

    let units = snapshot.rows(&view);
    for (family, cards) in unit_cards(&units, snapshot.matrix()) {
        writeln!(writer, "--- {} ---", family)?;
        if cards.is_empty() {
            writeln!(writer, "  (none)")?;
        }
        for card in cards {
            writeln!(writer, "  {}: {}", card.unit, format_amount(card.total))?;
            for (realm, amount) in &card.holders {
                writeln!(writer, "    {}: {}", realm, format_amount(*amount))?;
            }
        }
    }
    Ok(())
}

/// One table row in a JSON report; `amounts` follow `realms` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub resource: String,
    pub amounts: Vec<f64>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub view: ViewState,
    pub realms: Vec<RealmColumn>,
    pub rows: Vec<ReportRow>,
    pub military: MilitarySummary,
}

impl DashboardReport {
    pub fn new(snapshot: &Snapshot, view: &ViewState) -> Self {
        let matrix = snapshot.matrix();
        let rows = snapshot
            .rows(view)
            .into_iter()
            .map(|resource| ReportRow {
                amounts: matrix
                    .columns()
                    .iter()
                    .map(|column| matrix.amount(&resource, column.id))
                    .collect(),
                total: matrix.total(&resource),
                resource,
            })
            .collect();
        Self {
            last_updated: None,
            view: view.clone(),
            realms: snapshot.columns().to_vec(),
            rows,
            military: *snapshot.summary(),
        }
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }
}

pub fn json_report(report: &DashboardReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
