use anyhow::Result;
use application::CodeSource;
use clap::{Parser, Subcommand};
use domain::barcode::BarcodeIdentity;
use dotenv::dotenv;
use infrastructure::config::{AppConfig, PrinterKind};
use label_agent::commands::{self, PrintRequest};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the barcode for a product/vendor pair
    Code {
        #[arg(long)]
        product: String,
        #[arg(long)]
        vendor: String,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a 13-digit code's check digit
    Validate { code: String },
    /// Print a label
    Print {
        /// Use an existing code instead of deriving one
        #[arg(long, conflicts_with_all = ["product", "vendor"])]
        code: Option<String>,
        #[arg(long, requires = "vendor")]
        product: Option<String>,
        #[arg(long, requires = "product")]
        vendor: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,

        /// Override currency suffix
        #[arg(long)]
        currency: Option<String>,
        /// Override printer kind (file or network)
        #[arg(long)]
        printer: Option<String>,
        /// Override spool directory for file printing
        #[arg(long)]
        spool_dir: Option<String>,
        /// Override network printer host
        #[arg(long)]
        host: Option<String>,
        /// Override network printer port
        #[arg(long)]
        port: Option<u16>,
    },
}

async fn run() -> Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,label_agent=debug,application=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Code {
            product,
            vendor,
            json,
        } => {
            let report = commands::generate(&product, &vendor);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.code);
            }
        }
        Command::Validate { code } => match commands::validate(&code) {
            Ok(code) => println!("{} is valid", code),
            Err(e) => {
                error!("❌ {}", e);
                anyhow::bail!(e);
            }
        },
        Command::Print {
            code,
            product,
            vendor,
            name,
            price,
            currency,
            printer,
            spool_dir,
            host,
            port,
        } => {
            info!("📂 Config directory: {}", args.config_dir);
            let mut config = AppConfig::load(&args.config_dir)?;

            // Override with CLI args if present
            if let Some(currency) = currency {
                config.label.currency = currency;
            }
            if let Some(kind) = printer {
                config.printer.kind = match kind.to_ascii_lowercase().as_str() {
                    "file" => PrinterKind::File,
                    "network" => PrinterKind::Network,
                    other => anyhow::bail!("unknown printer kind: {other}"),
                };
            }
            if let Some(dir) = spool_dir {
                config.printer.spool_dir = dir;
            }
            if let Some(host) = host {
                config.printer.host = host;
            }
            if let Some(port) = port {
                config.printer.port = port;
            }

            let source = match (code, product, vendor) {
                (Some(code), _, _) => CodeSource::Supplied(code),
                (None, Some(product), Some(vendor)) => {
                    CodeSource::Identity(BarcodeIdentity::new(product, vendor))
                }
                _ => anyhow::bail!("either --code or both --product and --vendor are required"),
            };

            commands::print(&config, PrintRequest { source, name, price }).await?;
            println!("printed");
        }
    }

    Ok(())
}

fn main() {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("❌ Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(run()) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
