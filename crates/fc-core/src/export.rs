//! Rendering a batch as delimited text, JSON or Markdown.

use crate::batch::{NumberedRoll, RollBatch};
use crate::error::{CheckError, CheckResult};

/// Column headers shared by the CSV and Markdown renderings.
pub const COLUMNS: [&str; 9] = [
    "roll",
    "level_gap",
    "d20",
    "modifier",
    "threshold",
    "total",
    "fate",
    "outcome",
    "absolute_success",
];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with a header line.
    Csv,
    /// Pretty-printed JSON.
    Json,
    /// A Markdown table.
    Markdown,
}

impl ExportFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> CheckResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(CheckError::UnknownFormat(s.to_string())),
        }
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render a batch in the given format.
pub fn export(batch: &RollBatch, format: ExportFormat) -> CheckResult<String> {
    match format {
        ExportFormat::Csv => Ok(export_csv(batch)),
        ExportFormat::Json => export_json(batch),
        ExportFormat::Markdown => Ok(export_markdown(batch)),
    }
}

fn row_fields(roll: &NumberedRoll) -> [String; 9] {
    let r = &roll.record;
    [
        roll.number.to_string(),
        r.level_gap.to_string(),
        r.primary.to_string(),
        r.modifier.to_string(),
        r.threshold.to_string(),
        r.total.to_string(),
        r.fate.symbol().to_string(),
        r.outcome.label().to_string(),
        r.absolute_success.to_string(),
    ]
}

fn export_csv(batch: &RollBatch) -> String {
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for roll in batch.rolls() {
        let fields: Vec<String> = row_fields(roll).iter().map(|f| csv_field(f)).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field if it contains a delimiter, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn export_json(batch: &RollBatch) -> CheckResult<String> {
    Ok(serde_json::to_string_pretty(batch)?)
}

fn export_markdown(batch: &RollBatch) -> String {
    let mut out = format!(
        "# Check results\n\nLevel gap {}, modifier {:+}, threshold {}\n\n",
        batch.input.level_gap,
        batch.input.modifier,
        batch.input.threshold()
    );
    out.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    out.push_str(&format!("|{}\n", "---|".repeat(COLUMNS.len())));
    for roll in batch.rolls() {
        let fields = row_fields(roll).map(|f| f.replace('|', "\\|"));
        out.push_str(&format!("| {} |\n", fields.join(" | ")));
    }
    out
}
