mod common;
use common::{record, temp_dir};
use rpclogger::core::logic::{Core, MonthReport};
use rpclogger::core::request::MonthRequest;
use rpclogger::export::{ExportFormat, ExportLogic, summaries_to_rows};
use rpclogger::source::MemorySource;
use std::fs;

const HEADER: &str =
    "Date,First Startup,Last Shutdown,Work Hours,Work Hours (Rounded),Work Hours (Decimal)";

fn march_report() -> MonthReport {
    let source = MemorySource::new(vec![
        record("2024-03-01 08:00:00", 6005),
        record("2024-03-01 17:30:00", 6006),
        record("2024-03-03 09:00:00", 6005),
        record("2024-03-03 09:40:00", 6006),
    ]);
    Core::build_month_report(&source, MonthRequest::new(2024, 3).unwrap()).unwrap()
}

#[test]
fn test_export_file_name() {
    let report = march_report();
    assert_eq!(
        ExportLogic::file_name(&report, ExportFormat::Csv),
        "pc_events_2024_3.csv"
    );
    assert_eq!(
        ExportLogic::file_name(&report, ExportFormat::Json),
        "pc_events_2024_3.json"
    );
}

#[test]
fn test_export_csv_columns_and_rows() {
    let dir = temp_dir("export_csv_rows");
    let report = march_report();

    let path = ExportLogic::export(&report, ExportFormat::Csv, &dir, true)
        .unwrap()
        .expect("file written");
    assert_eq!(path, dir.join("pc_events_2024_3.csv"));

    let content = fs::read_to_string(&path).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "2024-03-01 (Friday),08:00:00,17:30:00,08:30:00,08:30:00,8.5");
    assert_eq!(lines[2], "2024-03-02 (Saturday),N/A,N/A,N/A,N/A,");
    assert!(lines[3].starts_with("2024-03-03 (Sunday),09:00:00,09:40:00,00:00:00,00:00:00,"));
}

#[test]
fn test_export_json() {
    let dir = temp_dir("export_json");
    let report = march_report();

    let path = ExportLogic::export(&report, ExportFormat::Json, &dir, true)
        .unwrap()
        .expect("file written");

    let content = fs::read_to_string(&path).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["Work Hours (Decimal)"], 8.5);
    assert!(rows[1]["Work Hours (Decimal)"].is_null());
    assert_eq!(rows[1]["First Startup"], "N/A");
}

#[test]
fn test_export_empty_report_writes_nothing() {
    let dir = temp_dir("export_empty");
    let report = Core::build_month_report(
        &MemorySource::default(),
        MonthRequest::new(2024, 3).unwrap(),
    )
    .unwrap();

    let res = ExportLogic::export(&report, ExportFormat::Csv, &dir, true).unwrap();
    assert!(res.is_none());
    assert!(!dir.join("pc_events_2024_3.csv").exists());
}

#[test]
fn test_export_force_overwrites() {
    let dir = temp_dir("export_force");
    fs::write(dir.join("pc_events_2024_3.csv"), "old").unwrap();

    ExportLogic::export(&march_report(), ExportFormat::Csv, &dir, true).unwrap();

    let content = fs::read_to_string(dir.join("pc_events_2024_3.csv")).unwrap();
    assert!(content.starts_with(HEADER));
}

#[test]
fn test_export_into_missing_dir_fails() {
    let dir = temp_dir("export_missing_dir").join("not_there");
    let err = ExportLogic::export(&march_report(), ExportFormat::Csv, &dir, true).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_formatting_leaves_summary_untouched() {
    let report = march_report();
    let before = report.days.clone();

    let rows = summaries_to_rows(&report.days);

    assert_eq!(rows[0].work_hours, "08:30:00");
    assert_eq!(report.days, before);
    assert_eq!(
        report.days[0].work_duration,
        Some(chrono::TimeDelta::minutes(9 * 60 + 30))
    );
}

#[test]
fn test_terminal_table_respects_show_weekday() {
    use rpclogger::cli::commands::show::render_report;

    let report = march_report();

    let with_weekday = render_report(&report, true);
    assert!(with_weekday.contains("2024-03-01 (Friday)"));
    assert!(with_weekday.contains("Work Hours"));

    let plain = render_report(&report, false);
    assert!(plain.contains("2024-03-01"));
    assert!(!plain.contains("(Friday)"));
    // empty day keeps its row
    assert!(plain.contains("2024-03-02"));
}

#[test]
fn test_terminal_table_dims_missing_values() {
    use rpclogger::cli::commands::show::render_report;
    use rpclogger::ui::messages::{dim, dim_missing};

    let table = render_report(&march_report(), false);
    let empty_day = table
        .lines()
        .find(|l| l.starts_with("2024-03-02"))
        .expect("row for the day without events");

    // first startup, last shutdown and work hours are all missing
    assert_eq!(empty_day.matches("\x1b[90mN/A").count(), 3);
    // a complete day has nothing to dim
    assert!(!table.lines().nth(2).unwrap().contains("\x1b[90m"));

    assert_eq!(dim_missing("N/A   "), dim("N/A   "));
    assert_eq!(dim_missing("   "), dim("   "));
    assert_eq!(dim_missing("08:30:00"), "08:30:00");
}
