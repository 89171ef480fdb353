use std::fs;
use std::path::PathBuf;

use retrodex_ingest::{IngestOptions, ingest_path, ingest_text};
use retrodex_model::IngestError;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = tempfile::tempdir().expect("create temp dir").keep();
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn round_trip_single_record() {
    let text = "title,platform,purchase_price\nGame A,SNES,\"10,50\"";
    let options = IngestOptions::default();
    let ingestion = ingest_text(text, &options).expect("ingest");
    assert_eq!(ingestion.records.len(), 1);

    let record = &ingestion.records[0];
    assert_eq!(record.title, "Game A");
    assert_eq!(record.platform, "SNES");
    assert_eq!(record.purchase_price, 10.5);
    assert_eq!(record.genre, options.defaults.genre);
    assert_eq!(record.condition, options.defaults.condition);
    assert_eq!(record.rarity, options.defaults.rarity);
    assert_eq!(record.year, 0);
}

#[test]
fn record_count_excludes_fully_blank_rows() {
    let text = "titulo,plataforma,precio\nA,SNES,10\n,,\nB,NES,20\n   \nC,GBA,5";
    let ingestion = ingest_text(text, &IngestOptions::default()).expect("ingest");
    assert_eq!(ingestion.records.len(), 3);
}

#[test]
fn spanish_headers_resolve() {
    let text = "Título,Consola,Precio Compra,Género,Año,Estado,Rareza\n\
                Metal Slug,Neo Geo,120,run and gun,1996,completo,rara";
    let ingestion = ingest_text(text, &IngestOptions::default()).expect("ingest");
    let record = &ingestion.records[0];
    assert_eq!(record.title, "Metal Slug");
    assert_eq!(record.platform, "Neo Geo");
    assert_eq!(record.year, 1996);
    assert_eq!(record.condition, "completo");
}

#[test]
fn missing_mandatory_columns_name_exactly_the_missing_fields() {
    let text = "title,genre\nGame A,rpg";
    let err = ingest_text(text, &IngestOptions::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("platform"));
    assert!(message.contains("purchase_price"));
    assert!(!message.contains("title,"));
}

#[test]
fn empty_title_fails_with_display_row() {
    let text = "title,platform,price\nGame A,SNES,10\n,NES,20";
    let err = ingest_text(text, &IngestOptions::default()).unwrap_err();
    match err {
        IngestError::Validation(message) => {
            assert!(message.contains("Row 3"), "message was: {message}");
            assert!(message.contains("title"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn header_only_table_fails_without_a_crash() {
    let text = "title,platform,price\n";
    let err = ingest_text(text, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::Validation(_)));
}

#[test]
fn blank_data_rows_only_is_a_no_games_error() {
    let text = "title,platform,price\n,,\n ,,";
    let err = ingest_text(text, &IngestOptions::default()).unwrap_err();
    assert!(err.to_string().contains("no games found"));
}

#[test]
fn warning_year_does_not_block_ingestion() {
    let text = "title,platform,price,year\nGame A,SNES,10,1969";
    let ingestion = ingest_text(text, &IngestOptions::default()).expect("ingest");
    assert_eq!(ingestion.records.len(), 1);
    assert_eq!(ingestion.error_count, 0);
    assert_eq!(ingestion.warning_count, 1);
}

#[test]
fn ingestion_is_idempotent() {
    let text = "title,platform,price,priceloose\nGame A,SNES,\"19,99\",30\nGame B,NES,5,";
    let options = IngestOptions::default();
    let first = ingest_text(text, &options).expect("first run");
    let second = ingest_text(text, &options).expect("second run");
    assert_eq!(first.records, second.records);
}

#[test]
fn ingest_path_reads_a_csv_file() {
    let path = temp_file("games.csv", "title,platform,price\nGame A,SNES,10\n");
    let ingestion = ingest_path(&path, &IngestOptions::default()).expect("ingest file");
    assert_eq!(ingestion.records.len(), 1);
    let _ = fs::remove_file(&path);
}

#[test]
fn ingest_path_rejects_disallowed_extensions() {
    let path = temp_file("games.pdf", "not a table");
    let err = ingest_path(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::File(_)));
    let _ = fs::remove_file(&path);
}

#[test]
fn ingest_path_rejects_missing_files() {
    let path = PathBuf::from("/nonexistent/games.csv");
    assert!(ingest_path(&path, &IngestOptions::default()).is_err());
}
