pub mod export;
pub mod roll;
pub mod rules;

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use fc_core::{CheckConfig, FinalOutcome, OutcomeStyle, RollBatch, RollRecord, roll_batch};

/// Validate the config and roll a batch.
fn roll_from_config(config: &CheckConfig) -> Result<RollBatch, String> {
    let input = config.input().map_err(|e| e.to_string())?;
    let count = config.roll_count().map_err(|e| e.to_string())?;
    let mut rng = config.rng();
    Ok(roll_batch(input, count, &mut rng))
}

/// Build the results table for a batch.
fn results_table(batch: &RollBatch) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#",
        "Level gap",
        "d20",
        "Mod",
        "Threshold",
        "Total",
        "Fate",
        "Result",
        ">= 11",
    ]);

    for roll in batch.rolls() {
        let r = &roll.record;
        table.add_row(vec![
            Cell::new(roll.number),
            Cell::new(r.level_gap),
            d20_cell(r),
            Cell::new(format!("{:+}", r.modifier)),
            Cell::new(r.threshold),
            Cell::new(r.total),
            Cell::new(r.fate),
            outcome_cell(r.outcome),
            Cell::new(if r.absolute_success { "yes" } else { "no" }),
        ]);
    }

    table
}

fn d20_cell(record: &RollRecord) -> Cell {
    let cell = Cell::new(record.primary);
    if record.is_natural() {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn outcome_cell(outcome: FinalOutcome) -> Cell {
    let color = match outcome.style() {
        OutcomeStyle::Favorable => Color::Green,
        OutcomeStyle::Unfavorable => Color::Red,
    };
    let cell = Cell::new(outcome).fg(color);
    if outcome.is_refined() {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}
