use tapcard_backend::export::quote_export::{export, ExportError, ExportFormat, ExportRow};
use tapcard_backend::model::quote::{Quote, ServiceKind};

fn quote(name: &str, description: Option<&str>, created_at: Option<&str>) -> Quote {
    Quote {
        id: Some(1),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        service: ServiceKind::DigitalBusinessCards,
        description: description.map(|s| s.to_string()),
        created_at: created_at.map(|s| s.to_string()),
        updated_at: created_at.map(|s| s.to_string()),
    }
}

#[test]
fn test_json_export_round_trips_projection() {
    let quotes = vec![
        quote("Alice", Some("front and back"), Some("2025-06-01T09:30:00+00:00")),
        quote("Bob", Some("logo refresh"), None),
    ];

    let artifact = export(&quotes, ExportFormat::Json).expect("export");
    assert_eq!(artifact.content_type, "application/json");

    let rows: Vec<ExportRow> = serde_json::from_slice(&artifact.bytes).expect("parse");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].email, "alice@example.com");
    assert_eq!(rows[0].service, "Digital business cards");
    assert_eq!(rows[0].description, "front and back");
    assert_eq!(rows[0].created_at, "2025-06-01T09:30:00+00:00");
    // A record with no creation date exports the N/A placeholder.
    assert_eq!(rows[1].created_at, "N/A");
}

#[test]
fn test_json_export_uses_display_field_names() {
    let quotes = vec![quote("Alice", Some("d"), Some("2025-06-01T09:30:00+00:00"))];
    let artifact = export(&quotes, ExportFormat::Json).expect("export");
    let value: serde_json::Value = serde_json::from_slice(&artifact.bytes).expect("parse");
    let row = &value.as_array().unwrap()[0];
    for key in ["Name", "Email", "Service", "Description", "Created At"] {
        assert!(row.get(key).is_some(), "missing key {}", key);
    }
}

#[test]
fn test_csv_export_header_and_rows() {
    let quotes = vec![quote("Alice", Some("simple"), Some("2025-06-01T09:30:00+00:00"))];
    let artifact = export(&quotes, ExportFormat::Csv).expect("export");
    assert_eq!(artifact.content_type, "text/csv");

    let text = String::from_utf8(artifact.bytes).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "Name,Email,Service,Description,Created At");
    assert_eq!(
        lines.next().unwrap(),
        "Alice,alice@example.com,Digital business cards,simple,2025-06-01T09:30:00+00:00"
    );
    assert!(lines.next().is_none());
}

#[test]
fn test_csv_export_escapes_commas_and_quotes() {
    let quotes = vec![quote(
        "Alice",
        Some("two cards, one \"premium\" finish"),
        Some("2025-06-01T09:30:00+00:00"),
    )];
    let artifact = export(&quotes, ExportFormat::Csv).expect("export");
    let text = String::from_utf8(artifact.bytes.clone()).expect("utf8");
    assert!(text.contains("\"two cards, one \"\"premium\"\" finish\""));

    // A standard CSV reader reproduces the original text exactly.
    let mut reader = csv::Reader::from_reader(artifact.bytes.as_slice());
    let rows: Vec<ExportRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("parse csv");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "two cards, one \"premium\" finish");
}

#[test]
fn test_csv_export_missing_description_is_empty() {
    let quotes = vec![quote("Alice", None, None)];
    let artifact = export(&quotes, ExportFormat::Csv).expect("export");
    let text = String::from_utf8(artifact.bytes).expect("utf8");
    let row = text.lines().nth(1).unwrap();
    assert_eq!(row, "Alice,alice@example.com,Digital business cards,,N/A");
}

#[test]
fn test_export_empty_input_fails() {
    let err = export(&[], ExportFormat::Csv).unwrap_err();
    assert!(matches!(err, ExportError::EmptyInput));
    let err = export(&[], ExportFormat::Json).unwrap_err();
    assert!(matches!(err, ExportError::EmptyInput));
}

#[test]
fn test_export_filename_carries_date_and_extension() {
    let quotes = vec![quote("Alice", Some("d"), None)];

    let artifact = export(&quotes, ExportFormat::Csv).expect("export");
    let expected = format!("quotes_export_{}.csv", chrono::Utc::now().format("%Y-%m-%d"));
    assert_eq!(artifact.filename, expected);

    let artifact = export(&quotes, ExportFormat::Json).expect("export");
    assert!(artifact.filename.ends_with(".json"));
    assert!(artifact.filename.starts_with("quotes_export_"));
}

#[test]
fn test_export_format_parsing() {
    assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
    assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
    assert!("xml".parse::<ExportFormat>().is_err());
}
