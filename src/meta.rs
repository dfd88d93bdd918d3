//! Raw venue response records, deserialized as received.
//!
//! These mirror the venue's wire format; `normalize` turns them into the
//! canonical model. Missing numeric fields decode to `None` rather than
//! failing the whole payload.

use serde::Deserialize;

/// One entry of the venue's currency list.
#[derive(Deserialize, Debug, Clone)]
pub struct RawCurrency {
    pub name: String,
    #[serde(default)]
    pub deposit_status: Option<bool>,
    #[serde(default)]
    pub withdraw_status: Option<bool>,
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub min_deposit: Option<f64>,
    #[serde(default)]
    pub min_withdrawal: Option<f64>,
    #[serde(default)]
    pub max_withdrawal: Option<f64>,
}

/// One entry of the venue's trading-pair list.
#[derive(Deserialize, Debug, Clone)]
pub struct RawMarket {
    /// Pair identifier, `{base}-{quote}`.
    pub product_id: String,
    /// Amount granularity, venue-defined.
    #[serde(default)]
    pub unit_size: Option<f64>,
    /// Price granularity, venue-defined.
    #[serde(default)]
    pub quote_increment: Option<f64>,
    #[serde(default)]
    pub min_size: Option<f64>,
    #[serde(default)]
    pub max_size: Option<f64>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default = "default_true")]
    pub trading_enabled: bool,
}

fn default_true() -> bool {
    true
}

/// The venue's fee-rate response.
#[derive(Deserialize, Debug, Clone)]
pub struct RawTradingFees {
    #[serde(default)]
    pub maker_fee: Option<f64>,
    #[serde(default)]
    pub taker_fee: Option<f64>,
}

/// One entry of the venue's balance list.
#[derive(Deserialize, Debug, Clone)]
pub struct RawBalance {
    pub asset: String,
    #[serde(default)]
    pub avail: Option<f64>,
    #[serde(default)]
    pub hold: Option<f64>,
    #[serde(default)]
    pub pending_withdrawal: Option<f64>,
}

/// The venue's per-pair ticker response.
#[derive(Deserialize, Debug, Clone)]
pub struct RawTicker {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub ask: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub time: Option<u64>,
}
