use config::{Config, ConfigError, Environment, File};
use domain::label::LabelSettings;
use domain::printer::PrintTimings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrinterKind {
    File,
    Network,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PrinterConfig {
    #[serde(default = "default_printer_kind")]
    pub kind: PrinterKind,
    #[serde(default = "default_spool_dir")]
    pub spool_dir: String,
    #[serde(default = "default_printer_host")]
    pub host: String,
    #[serde(default = "default_printer_port")]
    pub port: u16,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_printer_kind() -> PrinterKind {
    PrinterKind::File
}
fn default_spool_dir() -> String {
    "spool".to_string()
}
fn default_printer_host() -> String {
    "127.0.0.1".to_string()
}
fn default_printer_port() -> u16 {
    9100
}
fn default_connect_timeout_ms() -> u64 {
    5000
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            kind: default_printer_kind(),
            spool_dir: default_spool_dir(),
            host: default_printer_host(),
            port: default_printer_port(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TimingsConfig {
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_fallback_timeout_ms")]
    pub fallback_timeout_ms: u64,
    #[serde(default = "default_assets_timeout_ms")]
    pub assets_timeout_ms: u64,
}

fn default_settle_delay_ms() -> u64 {
    PrintTimings::DEFAULT_SETTLE_DELAY.as_millis() as u64
}
fn default_fallback_timeout_ms() -> u64 {
    PrintTimings::DEFAULT_FALLBACK_TIMEOUT.as_millis() as u64
}
fn default_assets_timeout_ms() -> u64 {
    PrintTimings::DEFAULT_ASSETS_TIMEOUT.as_millis() as u64
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            fallback_timeout_ms: default_fallback_timeout_ms(),
            assets_timeout_ms: default_assets_timeout_ms(),
        }
    }
}

impl From<&TimingsConfig> for PrintTimings {
    fn from(cfg: &TimingsConfig) -> Self {
        Self {
            settle_delay: Duration::from_millis(cfg.settle_delay_ms),
            fallback_timeout: Duration::from_millis(cfg.fallback_timeout_ms),
            assets_timeout: Duration::from_millis(cfg.assets_timeout_ms),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub label: LabelSettings,
    #[serde(default)]
    pub timings: TimingsConfig,
    #[serde(default)]
    pub printer: PrinterConfig,
}

impl AppConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Base settings shipped with the install, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. LABEL__PRINTER__KIND=network)
            .add_source(Environment::with_prefix("LABEL").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn print_timings(&self) -> PrintTimings {
        PrintTimings::from(&self.timings)
    }
}
