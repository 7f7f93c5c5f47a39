//! Page assembly and output encoding.

use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_core::{CurrencyFormat, Header, ShoeCard, ShoeListing};

/// One rendered page: the header plus every card, evaluated at one instant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub evaluated_at: DateTime<Utc>,
    pub header: Header,
    pub cards: Vec<ShoeCard>,
}

impl Page {
    pub fn build(listings: &[ShoeListing], now: DateTime<Utc>, currency: &CurrencyFormat) -> Page {
        Page {
            evaluated_at: now,
            header: Header::storefront(currency),
            cards: ShoeCard::build_all(listings, now, currency),
        }
    }
}

pub fn render_json(page: &Page) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(page)
}

/// Plain-text rendering. A struck-through price is wrapped in `~`.
pub fn render_text(page: &Page) -> String {
    let nav: Vec<String> = page
        .header
        .nav
        .iter()
        .map(|link| {
            let label = link.label.to_uppercase();
            if link.tone.is_some() {
                format!("*{label}*")
            } else {
                label
            }
        })
        .collect();

    let mut lines = vec![page.header.super_header.message.clone(), nav.join("  ")];

    for card in &page.cards {
        lines.push(String::new());

        lines.push(match &card.flag {
            Some(flag) => format!("{}  [{}]", card.name, flag.label),
            None => card.name.clone(),
        });
        lines.push(format!("  {}", card.href));

        let price = if card.price_struck_through {
            format!("~{}~", card.price_label)
        } else {
            card.price_label.clone()
        };
        lines.push(match &card.sale_price_label {
            Some(sale) => format!("  {price}  {sale}"),
            None => format!("  {price}"),
        });
        lines.push(format!("  {}", card.colors_label));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
