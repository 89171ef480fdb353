use proptest::prelude::*;

use retrodex_ingest::{IngestOptions, ingest_text, tokenize};

proptest! {
    // Cells without delimiters, quotes, or surrounding whitespace survive
    // tokenization untouched.
    #[test]
    fn simple_cells_round_trip(
        rows in prop::collection::vec(
            prop::collection::vec("[a-z0-9]{1,8}", 1..6),
            1..20,
        )
    ) {
        let text = rows
            .iter()
            .map(|row| row.join(","))
            .collect::<Vec<_>>()
            .join("\n");
        let table = tokenize(&text);
        prop_assert_eq!(table.rows, rows);
    }

    // One record per data row for any resolvable table without blank rows.
    #[test]
    fn record_count_matches_data_rows(
        titles in prop::collection::vec("[a-z]{1,10}", 1..40),
    ) {
        let mut text = "title,platform,price\n".to_string();
        for title in &titles {
            text.push_str(title);
            text.push_str(",snes,10\n");
        }
        let ingestion = ingest_text(&text, &IngestOptions::default()).unwrap();
        prop_assert_eq!(ingestion.records.len(), titles.len());
    }
}
