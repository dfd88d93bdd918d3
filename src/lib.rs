#![deny(unreachable_pub)]

// Core modules
mod classify;
mod client;
mod consts;
mod errors;
mod meta;
mod normalize;
mod prelude;
mod req;
mod request;
mod signing;
mod symbols;
mod types;

// Re-exports
pub use classify::classify;
pub use client::GopaxClient;
pub use consts::{
    BaseUrl, ACCESS_DIGEST_HEADER, ACCESS_KEY_HEADER, ACCESS_TIMESTAMP_HEADER, API_VERSION,
    EXCHANGE_ID, LOCAL_API_URL, MAINNET_API_URL,
};
pub use errors::{ApiError, Error, ErrorKind};
pub use meta::{RawBalance, RawCurrency, RawMarket, RawTicker, RawTradingFees};
pub use normalize::{
    normalize_balance, normalize_currency, normalize_fees, normalize_market, normalize_ticker,
    symbol_for,
};
pub use req::HttpClient;
pub use request::{ApiClass, ApiRequest, Method, RequestBuilder};
pub use signing::{sign, signature_for, Credentials, NonceCounter};
pub use symbols::SymbolTable;
pub use types::{
    Balance, Currency, CurrencyLimits, Market, MarketLimits, MarketPrecision, MinMax, Ticker,
    TradingFees,
};
