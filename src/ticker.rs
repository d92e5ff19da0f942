//! Market ticker shown on the trading dashboard card.
//!
//! The dashboard never shows an error: when the price source fails the fixed
//! fallback quotes are shown instead, on every poll, until it recovers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Market-data ids paired with the symbol shown on the card.
pub const ASSETS: [(&str, &str); 3] = [("bitcoin", "BTC"), ("ethereum", "ETH"), ("solana", "SOL")];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TickerError {
    #[error("price request failed: {0}")]
    Transport(String),
    #[error("price endpoint returned status {0}")]
    Status(u16),
    #[error("couldn't decode price response: {0}")]
    Decode(String),
    #[error("price response had no known assets")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn class(self) -> &'static str {
        match self {
            Trend::Up => "text-green-400",
            Trend::Down => "text-red-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, price: f64, change: f64, change_percent: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change,
            change_percent,
        }
    }

    /// Flat counts as down, matching the red styling for `<= 0`.
    pub fn trend(&self) -> Trend {
        if self.change_percent > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn formatted_price(&self) -> String {
        format!("${}", group_thousands(self.price))
    }

    pub fn formatted_change(&self) -> String {
        let sign = if self.change_percent > 0.0 { "+" } else { "" };
        format!("{sign}{:.2}%", self.change_percent)
    }
}

/// `1234567.891` -> `1,234,567.89`
fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && fixed != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac}")
}

pub fn fallback_quotes() -> Vec<Quote> {
    vec![
        Quote::new("BTC", 67420.50, 1250.30, 1.89),
        Quote::new("ETH", 3840.25, -85.40, -2.18),
        Quote::new("SOL", 185.30, 12.80, 7.42),
    ]
}

#[allow(async_fn_in_trait)]
pub trait PriceSource {
    async fn fetch(&self) -> Result<Vec<Quote>, TickerError>;
}

#[derive(Debug, Deserialize)]
struct AssetPrice {
    usd: f64,
    #[serde(default)]
    usd_24h_change: Option<f64>,
}

/// Maps a `{ "<id>": { "usd": .., "usd_24h_change": .. } }` body onto
/// [`ASSETS`], skipping assets the response left out.
pub fn parse_prices(body: &str) -> Result<Vec<Quote>, TickerError> {
    let prices: HashMap<String, AssetPrice> =
        serde_json::from_str(body).map_err(|e| TickerError::Decode(e.to_string()))?;
    let quotes: Vec<Quote> = ASSETS
        .iter()
        .filter_map(|(id, symbol)| {
            let asset = prices.get(*id)?;
            let pct = asset.usd_24h_change.unwrap_or(0.0);
            // absolute move over the same window, derived from the percentage
            let change = asset.usd * pct / (100.0 + pct);
            Some(Quote::new(*symbol, asset.usd, change, pct))
        })
        .collect();
    if quotes.is_empty() {
        return Err(TickerError::Empty);
    }
    Ok(quotes)
}

#[derive(Debug, Clone)]
pub struct HttpPriceSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPriceSource {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl PriceSource for HttpPriceSource {
    async fn fetch(&self) -> Result<Vec<Quote>, TickerError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TickerError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TickerError::Status(status.as_u16()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| TickerError::Transport(e.to_string()))?;
        parse_prices(&body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickerFrame {
    pub quotes: Vec<Quote>,
    /// `false` when `quotes` is the fallback set.
    pub live: bool,
}

impl TickerFrame {
    pub fn fallback() -> Self {
        Self {
            quotes: fallback_quotes(),
            live: false,
        }
    }
}

pub struct PriceTicker<P> {
    source: P,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl<P: PriceSource> PriceTicker<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    pub async fn poll(&self) -> TickerFrame {
        match self.source.fetch().await {
            Ok(quotes) if !quotes.is_empty() => TickerFrame { quotes, live: true },
            Ok(_) => TickerFrame::fallback(),
            Err(err) => {
                log::warn!("{err}; showing fallback quotes");
                TickerFrame::fallback()
            }
        }
    }

    /// Like [`PriceTicker::poll`] for overlapping polls: `None` when a poll
    /// issued later has already produced a frame.
    pub async fn poll_latest(&self) -> Option<TickerFrame> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let frame = self.poll().await;
        if self.applied.fetch_max(generation, Ordering::SeqCst) < generation {
            Some(frame)
        } else {
            log::debug!("dropping stale ticker frame {generation}");
            None
        }
    }
}
