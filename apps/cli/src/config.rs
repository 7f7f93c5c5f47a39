//! CLI configuration.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`, `--currency`, `--format`, `--now`)
//! 2. Environment variables (`STOREFRONT_*`)
//! 3. Defaults (this file)

use chrono::{DateTime, Utc};
use storefront_core::CurrencyFormat;

/// Output format of the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable card list.
    #[default]
    Text,
    /// `{ "header": ..., "cards": [...] }` for the UI layer.
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Catalog file path
    pub catalog_path: String,

    /// Currency rendering rules
    pub currency: CurrencyFormat,

    /// Output format
    pub format: OutputFormat,

    /// Fixed evaluation instant. `None` means the system clock.
    pub now: Option<DateTime<Utc>>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            catalog_path: "catalog.json".to_string(),
            currency: CurrencyFormat::usd(),
            format: OutputFormat::Text,
            now: None,
        }
    }
}

/// What the caller should do after parsing flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Render,
    Help,
}

pub const USAGE: &str = "\
Storefront catalog renderer

Usage: storefront [OPTIONS]

Options:
  -c, --catalog <PATH>     Catalog JSON file (default: catalog.json)
      --currency <CODE>    USD, GBP, CAD or EUR (default: USD)
  -f, --format <FORMAT>    text or json (default: text)
      --now <RFC3339>      Evaluate badges at this instant instead of now
  -h, --help               Show this help message

Environment:
  STOREFRONT_CATALOG, STOREFRONT_CURRENCY, STOREFRONT_FORMAT, STOREFRONT_NOW
  RUST_LOG (default: info)";

impl CliConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = CliConfig::default();

        if let Some(path) = lookup("STOREFRONT_CATALOG") {
            config.catalog_path = path;
        }

        if let Some(code) = lookup("STOREFRONT_CURRENCY") {
            config.currency = parse_currency("STOREFRONT_CURRENCY", &code)?;
        }

        if let Some(format) = lookup("STOREFRONT_FORMAT") {
            config.format = OutputFormat::parse(&format)
                .ok_or_else(|| ConfigError::InvalidValue("STOREFRONT_FORMAT".to_string()))?;
        }

        if let Some(now) = lookup("STOREFRONT_NOW") {
            config.now = Some(parse_now("STOREFRONT_NOW", &now)?);
        }

        Ok(config)
    }

    /// Applies command-line flags on top of the loaded configuration.
    ///
    /// `args` excludes the program name.
    pub fn apply_args<I, S>(&mut self, args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let flag = arg.as_ref();
            let mut value = || {
                args.next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| ConfigError::MissingRequired(flag.to_string()))
            };

            match flag {
                "--catalog" | "-c" => self.catalog_path = value()?,
                "--currency" => self.currency = parse_currency("--currency", &value()?)?,
                "--format" | "-f" => {
                    self.format = OutputFormat::parse(&value()?)
                        .ok_or_else(|| ConfigError::InvalidValue("--format".to_string()))?
                }
                "--now" => self.now = Some(parse_now("--now", &value()?)?),
                "--help" | "-h" => return Ok(Command::Help),
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }

        Ok(Command::Render)
    }
}

fn parse_currency(source: &str, code: &str) -> Result<CurrencyFormat, ConfigError> {
    CurrencyFormat::for_code(code).map_err(|_| ConfigError::InvalidValue(source.to_string()))
}

fn parse_now(source: &str, value: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| ConfigError::InvalidValue(source.to_string()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing value for {0}")]
    MissingRequired(String),

    #[error("Unknown option: {0}")]
    UnknownFlag(String),
}
