use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use retrodex_analysis::build_prompt;
use retrodex_ingest::{IngestOptions, Ingestion, ingest_path, synonyms_for};
use retrodex_model::CanonicalField;

use crate::cli::{IngestArgs, PromptArgs};
use crate::summary::apply_table_style;

pub fn run_ingest(args: &IngestArgs) -> Result<Ingestion> {
    let span = info_span!("ingest", input = %args.input.display());
    let _guard = span.enter();

    let ingestion = ingest_path(&args.input, &IngestOptions::default())
        .with_context(|| format!("ingest {}", args.input.display()))?;

    if let Some(path) = &args.records_out {
        let json =
            serde_json::to_string_pretty(&ingestion.records).context("serialize records")?;
        fs::write(path, json).with_context(|| format!("write records: {}", path.display()))?;
        info!(path = %path.display(), "wrote canonical records");
    }

    Ok(ingestion)
}

pub fn run_prompt(args: &PromptArgs) -> Result<()> {
    let span = info_span!("prompt", input = %args.input.display());
    let _guard = span.enter();

    let ingestion = ingest_path(&args.input, &IngestOptions::default())
        .with_context(|| format!("ingest {}", args.input.display()))?;
    let prompt = build_prompt(&ingestion.records);

    match &args.out {
        Some(path) => {
            fs::write(path, &prompt)
                .with_context(|| format!("write prompt: {}", path.display()))?;
            info!(path = %path.display(), records = ingestion.records.len(), "wrote prompt");
        }
        None => println!("{prompt}"),
    }
    Ok(())
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Required", "Accepted headers"]);
    apply_table_style(&mut table);
    for field in CanonicalField::BASE {
        table.add_row(vec![
            field.as_str().to_string(),
            if field.is_mandatory() { "yes" } else { "" }.to_string(),
            synonyms_for(field).join(", "),
        ]);
    }
    for field in [
        CanonicalField::PriceLoose,
        CanonicalField::PriceCib,
        CanonicalField::PriceNew,
    ] {
        table.add_row(vec![
            field.as_str().to_string(),
            String::new(),
            synonyms_for(field).join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}
