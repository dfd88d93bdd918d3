//! The client composition root.
//!
//! `GopaxClient` wires the request builder, signer, transport, and error
//! classifier together: build a descriptor, sign it when the endpoint is
//! private, perform the call, classify the result, then decode or normalize
//! the payload.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    classify::classify,
    consts::{BaseUrl, API_VERSION, EXCHANGE_ID},
    meta::{RawBalance, RawCurrency, RawMarket, RawTicker, RawTradingFees},
    normalize::{
        normalize_balance, normalize_currency, normalize_fees, normalize_market, normalize_ticker,
        symbol_for,
    },
    prelude::*,
    req::HttpClient,
    request::{ApiClass, Method, RequestBuilder},
    signing::{sign, Credentials, NonceCounter},
    symbols::SymbolTable,
    types::{Balance, Currency, Market, Ticker, TradingFees},
    Error,
};

#[derive(Debug)]
pub struct GopaxClient {
    pub http_client: HttpClient,
    builder: RequestBuilder,
    credentials: Option<Credentials>,
    nonce: NonceCounter,
    symbols: SymbolTable,
}

impl GopaxClient {
    /// Create a client for public endpoints only.
    pub fn new(client: Option<Client>, base_url: Option<BaseUrl>) -> Self {
        Self::new_internal(client, base_url, None)
    }

    /// Create a client with credentials for private endpoints.
    ///
    /// The credentials and the nonce counter belong to this session alone;
    /// callers running several API keys create one client per key.
    pub fn with_credentials(
        client: Option<Client>,
        base_url: Option<BaseUrl>,
        credentials: Credentials,
    ) -> Self {
        Self::new_internal(client, base_url, Some(credentials))
    }

    fn new_internal(
        client: Option<Client>,
        base_url: Option<BaseUrl>,
        credentials: Option<Credentials>,
    ) -> Self {
        let client = client.unwrap_or_default();
        let base_url = base_url.unwrap_or(BaseUrl::Mainnet).get_url();

        GopaxClient {
            builder: RequestBuilder::new(base_url.clone(), API_VERSION),
            http_client: HttpClient::new(client, base_url),
            credentials,
            nonce: NonceCounter::new(),
            symbols: SymbolTable::default(),
        }
    }

    /// Replace the canonicalization alias table.
    pub fn with_symbol_table(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path_template: &str,
        params: &[(&str, Value)],
        api: ApiClass,
    ) -> Result<T> {
        let request = self.builder.build(method, path_template, params, api)?;
        let request = match api {
            ApiClass::Public => request,
            ApiClass::Private => {
                let credentials = self.credentials.as_ref().ok_or_else(|| {
                    Error::Authentication("credentials required for private endpoint".to_string())
                })?;
                sign(request, credentials, &self.nonce)?
            }
        };

        let context = format!("{EXCHANGE_ID} {} {}", method.as_str(), request.path);
        debug!(method = method.as_str(), path = %request.path, "sending request");

        let (status, body) = self.http_client.execute(&request).await?;
        if let Some(api_error) = classify(status, &body, &context) {
            return Err(Error::Api(api_error));
        }
        serde_json::from_str(&body).map_err(|e| Error::JsonParse(e.to_string()))
    }

    /// Fetch and normalize the venue's trading-pair list.
    pub async fn fetch_markets(&self) -> Result<Vec<Market>> {
        let raw: Vec<RawMarket> = self
            .request(Method::Get, "/trading-pairs", &[], ApiClass::Public)
            .await?;
        raw.iter().map(|r| normalize_market(r, &self.symbols)).collect()
    }

    /// Fetch and normalize the venue's currency list.
    pub async fn fetch_currencies(&self) -> Result<Vec<Currency>> {
        let raw: Vec<RawCurrency> = self
            .request(Method::Get, "/assets", &[], ApiClass::Public)
            .await?;
        Ok(raw
            .iter()
            .map(|r| normalize_currency(r, &self.symbols))
            .collect())
    }

    /// Fetch the current ticker for a venue product id, e.g. "BTC-KRW".
    pub async fn fetch_ticker(&self, product_id: &str) -> Result<Ticker> {
        let symbol = symbol_for(product_id, &self.symbols)?;
        let raw: RawTicker = self
            .request(
                Method::Get,
                "/trading-pairs/{pair}/ticker",
                &[("pair", json!(product_id))],
                ApiClass::Public,
            )
            .await?;
        Ok(normalize_ticker(&raw, symbol))
    }

    /// Fetch the account's maker/taker fee rates.
    pub async fn fetch_trading_fees(&self) -> Result<TradingFees> {
        let raw: RawTradingFees = self
            .request(Method::Get, "/fee-rates", &[], ApiClass::Private)
            .await?;
        Ok(normalize_fees(&raw))
    }

    /// Fetch and normalize the account's balances.
    pub async fn fetch_balances(&self) -> Result<Vec<Balance>> {
        let raw: Vec<RawBalance> = self
            .request(Method::Get, "/balances", &[], ApiClass::Private)
            .await?;
        Ok(raw
            .iter()
            .map(|r| normalize_balance(r, &self.symbols))
            .collect())
    }

    /// Place an order. Returns the venue's acknowledgement payload verbatim.
    pub async fn place_order(
        &self,
        product_id: &str,
        side: &str,
        order_type: &str,
        amount: f64,
        price: Option<f64>,
    ) -> Result<Value> {
        let mut params = vec![
            ("product_id", json!(product_id)),
            ("side", json!(side)),
            ("type", json!(order_type)),
            ("amount", json!(amount)),
        ];
        if let Some(price) = price {
            params.push(("price", json!(price)));
        }
        self.request(Method::Post, "/orders", &params, ApiClass::Private)
            .await
    }

    /// Cancel an order by venue order id.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        self.request(
            Method::Delete,
            "/orders/{order_id}",
            &[("order_id", json!(order_id))],
            ApiClass::Private,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_client_rejects_private_calls() {
        let client = GopaxClient::new(None, Some(BaseUrl::Localhost));
        let err = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.fetch_balances())
            .unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_client_debug_redacts_secret() {
        let client = GopaxClient::with_credentials(
            None,
            Some(BaseUrl::Localhost),
            Credentials::new("key-id", "hunter2"),
        );
        let out = format!("{client:?}");
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn test_base_url_selection() {
        let client = GopaxClient::new(None, None);
        assert!(client.http_client.is_mainnet());
        let client = GopaxClient::new(None, Some(BaseUrl::Localhost));
        assert!(!client.http_client.is_mainnet());
    }
}
