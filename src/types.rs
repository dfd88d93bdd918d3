//! Canonical trading-instrument model shared across the SDK.
//!
//! All numeric fields are `Option<f64>`: an unknown value stays `None` and
//! propagates through derived fields, never defaulting to zero.

use serde::Serialize;

/// Inclusive bounds on a value, either side possibly unknown.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MinMax {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Price and amount granularity as reported by the venue, not reinterpreted.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MarketPrecision {
    pub price: Option<f64>,
    pub amount: Option<f64>,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MarketLimits {
    pub amount: MinMax,
    pub price: MinMax,
    /// `cost.min` is derived as `amount.min * price.min`; it is never
    /// venue-supplied, and unknown operands propagate.
    pub cost: MinMax,
}

/// A canonical trading pair.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Market {
    /// Venue product identifier, e.g. "BTC-KRW".
    pub id: String,
    /// Canonical symbol, `{base}/{quote}`.
    pub symbol: String,
    pub base: String,
    pub quote: String,
    pub base_id: String,
    pub quote_id: String,
    pub active: bool,
    pub precision: MarketPrecision,
    pub limits: MarketLimits,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrencyLimits {
    pub amount: MinMax,
    pub price: MinMax,
    pub cost: MinMax,
    pub deposit: MinMax,
    pub withdraw: MinMax,
}

/// A canonical currency listing.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Currency {
    /// Venue identifier, as given.
    pub id: String,
    /// Canonicalized uppercase code.
    pub code: String,
    /// True only when both deposits and withdrawals are enabled.
    pub active: bool,
    pub name: String,
    pub precision: Option<f64>,
    pub limits: CurrencyLimits,
}

/// Maker/taker fee proportions. Absent venue fields stay `None`; zero would
/// falsely claim a fee-free venue.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct TradingFees {
    pub maker: Option<f64>,
    pub taker: Option<f64>,
}

/// A canonical account balance entry.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Balance {
    pub code: String,
    pub free: Option<f64>,
    pub used: Option<f64>,
    pub total: Option<f64>,
}

/// A canonical ticker snapshot.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Ticker {
    pub symbol: String,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
    pub volume: Option<f64>,
    pub timestamp: Option<u64>,
}
