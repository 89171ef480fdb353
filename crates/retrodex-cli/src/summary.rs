use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use retrodex_ingest::Ingestion;

pub fn print_summary(ingestion: &Ingestion) {
    println!("Games: {}", ingestion.records.len());
    println!("Warnings: {}", ingestion.warning_count);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Platform"),
        header_cell("Games"),
        header_cell("Total spent"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut per_platform: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for record in &ingestion.records {
        let entry = per_platform.entry(record.platform.as_str()).or_default();
        entry.0 += 1;
        entry.1 += record.purchase_price;
    }
    let mut total_spent = 0.0;
    for (platform, (count, spent)) in &per_platform {
        total_spent += spent;
        table.add_row(vec![
            Cell::new(platform),
            Cell::new(count),
            Cell::new(format!("{spent:.2}")),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(ingestion.records.len()).add_attribute(Attribute::Bold),
        Cell::new(format!("{total_spent:.2}")).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !ingestion.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &ingestion.warnings {
            eprintln!("- {warning}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
