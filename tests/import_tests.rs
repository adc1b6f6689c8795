use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rovertime::core::calculator::schedule::resolve_profile;
use rovertime::errors::{AppError, ImportError};
use rovertime::export::ExportScope;
use rovertime::export::csv::render_csv;
use rovertime::import::ImportLogic;
use rovertime::import::csv::parse_csv;
use rovertime::store::RecordStore;
use rovertime::store::kv::MemoryStorage;
use std::fs;

mod common;
use common::{date, init_db_with_data, record, rot, setup_test_db, temp_out};

fn import_error(content: &str) -> ImportError {
    match parse_csv(content) {
        Err(AppError::Import(e)) => e,
        other => panic!("expected an import error, got {:?}", other),
    }
}

#[test]
fn exported_csv_imports_back() {
    let records = vec![
        record(date(2024, 3, 4), "08:00", "17:00"),
        record(date(2024, 3, 5), "08:00", "14:00"),
        record(date(2024, 3, 6), "08:00", ""),
    ];
    let scope = ExportScope::month(&records, 2024, 3, resolve_profile(None));
    let csv = render_csv(&scope, true).unwrap();

    let imported = parse_csv(&csv).unwrap();
    assert_eq!(imported.len(), 3);
    for (orig, back) in records.iter().zip(&imported) {
        assert_eq!(orig.date, back.date);
        assert_eq!(orig.entry, back.entry);
        assert_eq!(orig.exit, back.exit);
        assert_ne!(orig.id, back.id);
    }
}

#[test]
fn columns_are_found_by_name_in_any_order() {
    let content = "Saida;x\n";
    assert!(matches!(
        import_error(content),
        ImportError::MissingColumns(_)
    ));

    let content = "Status,Saída,Data,Entrada\nok,17:30,2024-03-04,08:00\n";
    let imported = parse_csv(content).unwrap();
    assert_eq!(imported.len(), 1);
    assert_eq!(imported[0].worked_minutes(), 570);
}

#[test]
fn missing_columns_are_named() {
    match import_error("Data,Status\n04/03/2024,ok\n") {
        ImportError::MissingColumns(cols) => {
            assert_eq!(cols, vec!["Entrada".to_string(), "Saída".to_string()]);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn empty_and_useless_files_are_rejected() {
    assert_eq!(import_error(""), ImportError::EmptyFile);
    assert_eq!(import_error("\u{feff}\n\n"), ImportError::EmptyFile);
    assert_eq!(
        import_error("Data,Entrada,Saída\nnot a date,08:00,17:00\n,08:00,17:00\n"),
        ImportError::NoValidRows
    );
}

#[test]
fn bad_rows_are_skipped() {
    let content = "\
Data,Entrada,Saída,Status
04/03/2024,08:00,17:00,x
31/02/2024,08:00,17:00,x
short
05/03/2024,,,x
\"--- RESUMO DO PERÍODO ---\",,,
";
    let imported = parse_csv(content).unwrap();
    assert_eq!(imported.len(), 2);
    assert_eq!(imported[1].entry, None);
    assert_eq!(imported[1].exit, None);
}

#[test]
fn import_replaces_the_whole_store() {
    let mut store = RecordStore::new(MemoryStorage::new());
    store.load().unwrap();
    store
        .add(record(date(2024, 1, 2), "08:00", "16:00"))
        .unwrap();

    let incoming = vec![
        record(date(2024, 3, 4), "08:00", "17:00"),
        record(date(2024, 3, 5), "08:00", "14:00"),
    ];
    let count = ImportLogic::apply(&mut store, incoming).unwrap();

    assert_eq!(count, 2);
    assert!(store.records().iter().all(|r| r.date.format("%Y-%m").to_string() == "2024-03"));
}

#[test]
fn read_file_checks_the_extension() {
    let path = temp_out("import_wrong_ext", "txt");
    fs::write(&path, "Data,Entrada,Saída\n04/03/2024,08:00,17:00\n").unwrap();

    match ImportLogic::read_file(std::path::Path::new(&path)) {
        Err(AppError::Import(ImportError::WrongExtension(_))) => {}
        other => panic!("expected WrongExtension, got {:?}", other),
    }
}

#[test]
fn cli_import_round_trip_replaces_records() {
    let db_path = setup_test_db("import_round_trip");
    let out = temp_out("import_round_trip", "csv");
    init_db_with_data(&db_path);

    rot()
        .args(["--db", &db_path, "export", "--file", &out, "--month", "2024-03"])
        .assert()
        .success();

    rot()
        .args(["--db", &db_path, "add", "2024-03-07", "--in", "09:00", "--out", "10:00"])
        .assert()
        .success();

    rot()
        .args(["--db", &db_path, "import", &out, "--yes"])
        .assert()
        .success()
        .stdout(contains("Imported 2 records"));

    rot()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("2024-03-04").and(contains("2024-03-07").not()));
}

#[test]
fn cli_import_rejects_bad_header_and_keeps_records() {
    let db_path = setup_test_db("import_bad_header");
    let bad = temp_out("import_bad_header", "csv");
    init_db_with_data(&db_path);
    fs::write(&bad, "Dia,Inicio,Fim\n04/03/2024,08:00,17:00\n").unwrap();

    rot()
        .args(["--db", &db_path, "import", &bad, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Missing expected columns"));

    rot()
        .args(["--db", &db_path, "list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("2024-03-04").and(contains("2024-03-05")));
}

#[test]
fn cli_import_rejects_wrong_extension() {
    let db_path = setup_test_db("import_wrong_ext_cli");
    let txt = temp_out("import_wrong_ext_cli", "txt");
    fs::write(&txt, "Data,Entrada,Saída\n").unwrap();

    rot()
        .args(["--db", &db_path, "import", &txt, "--yes"])
        .assert()
        .failure()
        .stderr(contains("expected .csv"));
}
