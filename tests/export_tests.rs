use predicates::str::contains;
use rovertime::core::calculator::schedule::resolve_profile;
use rovertime::export::csv::render_csv;
use rovertime::export::{DayStatus, ExportRow, ExportScope, build_pdf};
use std::fs;

mod common;
use common::{date, init_db_with_data, record, rot, setup_test_db, temp_out};

fn march_scope() -> ExportScope {
    let records = vec![
        record(date(2024, 3, 5), "08:00", "14:00"),
        record(date(2024, 3, 4), "08:00", "17:00"),
        record(date(2024, 3, 6), "08:00", ""),
        record(date(2024, 4, 1), "08:00", "17:00"),
    ];
    ExportScope::month(&records, 2024, 3, resolve_profile(Some("6x1")))
}

#[test]
fn scope_keeps_the_month_sorted() {
    let scope = march_scope();
    assert_eq!(scope.records.len(), 3);
    assert_eq!(scope.records[0].date, date(2024, 3, 4));
    assert_eq!(scope.slug, "2024-03");
    assert_eq!(scope.title, "Março 2024");
    assert_eq!(
        scope.default_file_name("csv", date(2024, 4, 2)),
        "horas-extras-2024-03-2024-04-02.csv"
    );
}

#[test]
fn row_status_follows_the_balance() {
    let profile = resolve_profile(Some("6x1"));

    let over = ExportRow::from_record(&record(date(2024, 3, 4), "08:00", "17:00"), profile);
    assert_eq!(over.status, DayStatus::Overtime);
    assert_eq!(over.balance_minutes, 120);

    let short = ExportRow::from_record(&record(date(2024, 3, 4), "08:00", "14:00"), profile);
    assert_eq!(short.status, DayStatus::Deficit);

    let exact = ExportRow::from_record(&record(date(2024, 3, 4), "08:00", "15:00"), profile);
    assert_eq!(exact.status, DayStatus::Complete);

    let open = ExportRow::from_record(&record(date(2024, 3, 4), "08:00", ""), profile);
    assert_eq!(open.status, DayStatus::NoRecord);
    assert_eq!(open.balance_minutes, 0);
    assert_eq!(open.cells(None)[4], "0:00h");
}

#[test]
fn csv_has_bom_quoted_header_rows_and_trailers() {
    let csv = render_csv(&march_scope(), true).unwrap();

    assert!(csv.starts_with('\u{feff}'));
    assert!(csv.contains(
        r#""Data","Entrada","Saída","Horas Trabalhadas","Diferença da Jornada","Status","Escala""#
    ));
    assert!(csv.contains(
        r#""04/03/2024","08:00","17:00","9:00h","+2:00h","Hora Extra","Escala 6x1 (Segunda a Sábado)""#
    ));
    assert!(csv.contains(r#""05/03/2024","08:00","14:00","6:00h","-1:00h","Débito""#));
    assert!(csv.contains(r#""06/03/2024","08:00","","0:00h","0:00h","Sem Registro""#));
    assert!(csv.contains("RESUMO DO PERÍODO"));
    assert!(csv.contains("CONFIGURAÇÃO DA ESCALA"));
    assert!(!csv.contains("01/04/2024"));
}

#[test]
fn csv_without_schedule_drops_column_and_row() {
    let csv = render_csv(&march_scope(), false).unwrap();
    assert!(!csv.contains("Escala"));
    assert!(!csv.contains("CONFIGURAÇÃO DA ESCALA"));
    assert!(csv.contains("RESUMO DO PERÍODO"));
}

#[test]
fn summary_lines_report_balance() {
    let lines = march_scope().summary_lines();
    assert!(lines.iter().any(|l| l.contains("Dias registrados: 3")));
    assert!(lines.iter().any(|l| l.contains("Saldo: +1:00h")));
    assert!(lines.iter().any(|l| l.contains("26 dias úteis")));
}

#[test]
fn pdf_is_a_pdf_document() {
    let pdf = build_pdf(&march_scope(), true);
    assert_eq!(pdf.page_count(), 1);

    let bytes = pdf.finish();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn pdf_paginates_long_tables() {
    let records: Vec<_> = (0..120)
        .map(|i| record(date(2024, 1, 1) + chrono::Days::new(i), "08:00", "16:00"))
        .collect();
    let scope = ExportScope::all(&records, resolve_profile(None));

    let pdf = build_pdf(&scope, false);
    assert!(pdf.page_count() > 1);
}

#[test]
fn cli_export_csv_month() {
    let db_path = setup_test_db("export_csv_month");
    let out = temp_out("export_csv_month", "csv");
    init_db_with_data(&db_path);

    rot()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2024-03",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.contains("Hora Extra"));
    assert!(content.contains("Débito"));
    assert!(content.contains("RESUMO DO PERÍODO"));
}

#[test]
fn cli_export_pdf() {
    let db_path = setup_test_db("export_pdf");
    let out = temp_out("export_pdf", "pdf");
    init_db_with_data(&db_path);

    rot()
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &out, "--force"])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn cli_export_json_keeps_stored_layout() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    rot()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let raw = fs::read_to_string(&out).expect("json written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    assert_eq!(value[0]["data"], "2024-03-04");
    assert_eq!(value[0]["entrada"], "2024-03-04T08:00:00");
}

#[test]
fn cli_export_empty_month_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    rot()
        .args(["--db", &db_path, "export", "--file", &out, "--month", "2023-01"])
        .assert()
        .success()
        .stdout(contains("No records found"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn cli_export_to_directory_uses_generated_name() {
    let db_path = setup_test_db("export_dir");
    let mut dir = std::env::temp_dir();
    dir.push("rovertime_export_dir_test");
    fs::remove_dir_all(&dir).ok();
    init_db_with_data(&db_path);

    rot()
        .args([
            "--db",
            &db_path,
            "export",
            "--dir",
            &dir.to_string_lossy(),
            "--month",
            "2024-03",
        ])
        .assert()
        .success();

    let names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("horas-extras-2024-03-"));
    assert!(names[0].ends_with(".csv"));
}
