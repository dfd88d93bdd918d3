use reqwest::Client;
use tracing::warn;

use crate::{
    prelude::*,
    request::{ApiRequest, Method},
    Error,
};

/// Thin transport over `reqwest`.
///
/// Performs a built request and hands back the status and raw body for
/// classification; carries no retry policy of its own, since retry decisions
/// belong to the caller once errors are classified.
#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
}

impl HttpClient {
    pub fn new(client: Client, base_url: String) -> Self {
        HttpClient { client, base_url }
    }

    /// Perform the request, returning `(status, body)`.
    ///
    /// Only transport-level failures (connect, timeout, body read) are
    /// errors here; HTTP error statuses are returned to the caller intact.
    pub async fn execute(&self, request: &ApiRequest) -> Result<(u16, String)> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::GenericRequest(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::GenericRequest(e.to_string()))?;

        if status >= 400 {
            warn!(status, path = %request.path, "HTTP error response");
        }

        Ok((status, text))
    }

    pub fn is_mainnet(&self) -> bool {
        self.base_url == crate::consts::MAINNET_API_URL
    }
}
