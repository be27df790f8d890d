use anyhow::{Context, Result};
use application::{BarcodeService, CodeSource, PrintOrchestrator};
use domain::DomainError;
use domain::barcode::{BarcodeCode, BarcodeIdentity, generate_code};
use infrastructure::config::AppConfig;
use infrastructure::surface::SurfaceFactory;
use serde::Serialize;
use tracing::info;

/// Output of the `code` subcommand
#[derive(Debug, Serialize)]
pub struct CodeReport {
    pub product_id: String,
    pub vendor_id: String,
    pub code: BarcodeCode,
    pub payload: String,
    pub check_digit: u8,
}

pub fn generate(product_id: &str, vendor_id: &str) -> CodeReport {
    let identity = BarcodeIdentity::new(product_id, vendor_id);
    let code = generate_code(&identity);
    CodeReport {
        product_id: identity.product_id().to_string(),
        vendor_id: identity.vendor_id().to_string(),
        payload: code.payload().to_string(),
        check_digit: code.check_digit(),
        code,
    }
}

pub fn validate(raw: &str) -> Result<BarcodeCode, DomainError> {
    BarcodeCode::parse(raw)
}

#[derive(Debug, Clone)]
pub struct PrintRequest {
    pub source: CodeSource,
    pub name: String,
    pub price: f64,
}

/// Print one label with the printer and timings from `config`
pub async fn print(config: &AppConfig, request: PrintRequest) -> Result<bool> {
    let label = BarcodeService::label(&request.source, request.name, request.price)
        .context("Invalid label")?;

    let provider = SurfaceFactory::create_provider(&config.printer);
    let orchestrator = PrintOrchestrator::new(provider, config.label.clone())
        .with_timings(config.print_timings());

    info!(code = %label.code(), printer = ?config.printer.kind, "🖨️ Printing label");
    let printed = orchestrator
        .print_label(label)
        .await
        .context("Print job failed")?;
    Ok(printed)
}
