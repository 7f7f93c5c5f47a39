//! # Storefront Catalog Renderer
//!
//! Reads a catalog file, evaluates every card at one instant and prints the
//! page for the UI layer.
//!
//! ```text
//! catalog.json ──► parse_catalog ──► Page::build(now) ──► text | JSON ──► stdout
//!                                            ▲
//!                              --now / STOREFRONT_NOW / SystemClock
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod output;

use std::fs;

use storefront_core::catalog::parse_catalog;
use storefront_core::Clock;
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::error::AppError;
use crate::output::{render_json, render_text, Page};

/// Renders the configured catalog. `clock` is consulted only when the
/// configuration does not pin `now`.
pub fn run(config: &CliConfig, clock: &impl Clock) -> Result<String, AppError> {
    let now = config.now.unwrap_or_else(|| clock.now());

    let json = fs::read_to_string(&config.catalog_path).map_err(|source| AppError::ReadCatalog {
        path: config.catalog_path.clone(),
        source,
    })?;
    debug!(path = %config.catalog_path, bytes = json.len(), "Catalog read");

    let listings = parse_catalog(&json)?;
    let page = Page::build(&listings, now, &config.currency);
    info!(
        cards = page.cards.len(),
        %now,
        currency = config.currency.code,
        "Page built"
    );

    match config.format {
        OutputFormat::Text => Ok(render_text(&page)),
        OutputFormat::Json => Ok(render_json(&page)?),
    }
}
