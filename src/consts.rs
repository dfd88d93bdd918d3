pub const MAINNET_API_URL: &str = "https://api.gopax.co.kr";
pub const LOCAL_API_URL: &str = "http://localhost:3000";

/// Version segment inserted between the base URL and every resolved path.
pub const API_VERSION: &str = "v1";

/// Authentication header names attached to every signed request.
pub const ACCESS_KEY_HEADER: &str = "ACCESS-KEY";
pub const ACCESS_TIMESTAMP_HEADER: &str = "ACCESS-TIMESTAMP";
pub const ACCESS_DIGEST_HEADER: &str = "ACCESS-DIGEST";

/// Exchange identifier used in error context strings.
pub const EXCHANGE_ID: &str = "gopax";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrl {
    Mainnet,
    Localhost,
}

impl BaseUrl {
    pub fn get_url(&self) -> String {
        match self {
            BaseUrl::Mainnet => MAINNET_API_URL.to_string(),
            BaseUrl::Localhost => LOCAL_API_URL.to_string(),
        }
    }
}
