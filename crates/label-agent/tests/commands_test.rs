use application::CodeSource;
use domain::barcode::BarcodeIdentity;
use infrastructure::config::{AppConfig, PrinterKind, TimingsConfig};
use label_agent::commands::{self, PrintRequest};

fn fast_config(spool_dir: &std::path::Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.printer.kind = PrinterKind::File;
    config.printer.spool_dir = spool_dir.to_string_lossy().to_string();
    config.timings = TimingsConfig {
        settle_delay_ms: 10,
        fallback_timeout_ms: 50,
        assets_timeout_ms: 50,
    };
    config
}

#[test]
fn test_generate_report() {
    let report = commands::generate("abc123", "v1");
    assert_eq!(report.code.as_str(), "0011135808409");
    assert_eq!(report.payload, "001113580840");
    assert_eq!(report.check_digit, 9);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["code"], "0011135808409");
    assert_eq!(json["vendor_id"], "v1");
}

#[test]
fn test_validate() {
    assert!(commands::validate("0011135808409").is_ok());
    assert!(commands::validate("0011135808400").is_err());
}

#[tokio::test]
async fn test_print_to_spool_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = fast_config(dir.path());

    let request = PrintRequest {
        source: CodeSource::Identity(BarcodeIdentity::new("abc123", "v1")),
        name: "Green Tea".to_string(),
        price: 2.5,
    };
    let printed = commands::print(&config, request).await.unwrap();
    assert!(printed);

    let printed_dir = dir.path().join("printed");
    let files: Vec<_> = std::fs::read_dir(&printed_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(files.len(), 1);

    let markup = std::fs::read_to_string(files[0].path()).unwrap();
    assert!(markup.contains("2.500 KWD"));
    assert!(markup.contains("0011135808409"));
}

#[tokio::test]
async fn test_print_rejects_bad_supplied_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = fast_config(dir.path());

    let request = PrintRequest {
        source: CodeSource::Supplied("1234567890123".to_string()),
        name: "Green Tea".to_string(),
        price: 2.5,
    };
    let err = commands::print(&config, request).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid barcode"));
    assert!(!dir.path().join("pending").exists());
}
