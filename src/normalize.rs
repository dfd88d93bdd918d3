//! Pure mappings from raw venue records to the canonical model.

use crate::{
    consts::EXCHANGE_ID,
    errors::{ApiError, ErrorKind},
    meta::{RawBalance, RawCurrency, RawMarket, RawTicker, RawTradingFees},
    prelude::*,
    symbols::SymbolTable,
    types::{
        Balance, Currency, CurrencyLimits, Market, MarketLimits, MarketPrecision, MinMax, Ticker,
        TradingFees,
    },
    Error,
};

/// Split a product id into its base and quote identifiers.
///
/// The venue encodes pairs as `{base}-{quote}`; anything that does not split
/// into exactly two non-empty segments cannot yield a symbol, so it is a
/// hard failure rather than a degraded record.
pub(crate) fn split_product_id(product_id: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = product_id.split('-').collect();
    match parts.as_slice() {
        [base, quote] if !base.is_empty() && !quote.is_empty() => Ok((base, quote)),
        _ => Err(Error::Api(ApiError::new(
            ErrorKind::Exchange,
            format!("malformed product id: {product_id}"),
            product_id,
            format!("{EXCHANGE_ID} market"),
        ))),
    }
}

/// Canonical symbol (`BASE/QUOTE`) for a venue product id.
pub fn symbol_for(product_id: &str, symbols: &SymbolTable) -> Result<String> {
    let (base_id, quote_id) = split_product_id(product_id)?;
    Ok(format!(
        "{}/{}",
        symbols.canonicalize(base_id),
        symbols.canonicalize(quote_id)
    ))
}

pub fn normalize_market(raw: &RawMarket, symbols: &SymbolTable) -> Result<Market> {
    let (base_id, quote_id) = split_product_id(&raw.product_id)?;
    let base = symbols.canonicalize(base_id);
    let quote = symbols.canonicalize(quote_id);

    let amount = MinMax {
        min: raw.min_size,
        max: raw.max_size,
    };
    let price = MinMax {
        min: raw.min_price,
        max: raw.max_price,
    };
    // Derived bound: defined only when both operands are.
    let cost_min = match (amount.min, price.min) {
        (Some(a), Some(p)) => Some(a * p),
        _ => None,
    };

    Ok(Market {
        id: raw.product_id.clone(),
        symbol: format!("{base}/{quote}"),
        base,
        quote,
        base_id: base_id.to_string(),
        quote_id: quote_id.to_string(),
        active: raw.trading_enabled,
        precision: MarketPrecision {
            price: raw.quote_increment,
            amount: raw.unit_size,
        },
        limits: MarketLimits {
            amount,
            price,
            cost: MinMax {
                min: cost_min,
                max: None,
            },
        },
    })
}

pub fn normalize_currency(raw: &RawCurrency, symbols: &SymbolTable) -> Currency {
    let deposit = raw.deposit_status.unwrap_or(false);
    let withdraw = raw.withdraw_status.unwrap_or(false);

    Currency {
        id: raw.name.clone(),
        code: symbols.canonicalize(&raw.name),
        active: deposit && withdraw,
        name: raw.name.clone(),
        precision: raw.precision,
        limits: CurrencyLimits {
            amount: MinMax::default(),
            price: MinMax::default(),
            cost: MinMax::default(),
            deposit: MinMax {
                min: raw.min_deposit,
                max: None,
            },
            withdraw: MinMax {
                min: raw.min_withdrawal,
                max: raw.max_withdrawal,
            },
        },
    }
}

pub fn normalize_fees(raw: &RawTradingFees) -> TradingFees {
    TradingFees {
        maker: raw.maker_fee,
        taker: raw.taker_fee,
    }
}

pub fn normalize_balance(raw: &RawBalance, symbols: &SymbolTable) -> Balance {
    // Total is the sum of whatever sides are known; fully unknown stays None.
    let total = match (raw.avail, raw.hold) {
        (None, None) => None,
        (free, used) => Some(free.unwrap_or(0.0) + used.unwrap_or(0.0)),
    };
    Balance {
        code: symbols.canonicalize(&raw.asset),
        free: raw.avail,
        used: raw.hold,
        total,
    }
}

pub fn normalize_ticker(raw: &RawTicker, symbol: impl Into<String>) -> Ticker {
    Ticker {
        symbol: symbol.into(),
        bid: raw.bid,
        ask: raw.ask,
        last: raw.price,
        volume: raw.volume,
        timestamp: raw.time,
    }
}
