use thiserror::Error;

/// Closed taxonomy for venue-reported failures.
///
/// Kinds are matched from the venue's free-text error messages by the rule
/// tables in `classify`; callers dispatch on the kind for programmatic
/// handling (back off on `DdosProtection`, re-sync the nonce on
/// `InvalidNonce`, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    InvalidNonce,
    InvalidOrder,
    OrderNotFound,
    InsufficientFunds,
    PermissionDenied,
    DdosProtection,
    ExchangeNotAvailable,
    /// Generic catch-all for unrecognized or malformed venue responses.
    Exchange,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Authentication => "AuthenticationError",
            ErrorKind::InvalidNonce => "InvalidNonce",
            ErrorKind::InvalidOrder => "InvalidOrder",
            ErrorKind::OrderNotFound => "OrderNotFound",
            ErrorKind::InsufficientFunds => "InsufficientFunds",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::DdosProtection => "DDoSProtection",
            ErrorKind::ExchangeNotAvailable => "ExchangeNotAvailable",
            ErrorKind::Exchange => "ExchangeError",
        }
    }
}

/// A classified venue error.
///
/// Carries the venue's message verbatim, the raw response body, and the
/// identity of the originating call for diagnostics.
#[derive(Error, Debug, Clone)]
#[error("{context}: {} {message}", .kind.as_str())]
pub struct ApiError {
    pub kind: ErrorKind,
    /// Venue error message, verbatim.
    pub message: String,
    /// Raw response body as received.
    pub body: String,
    /// Originating call identity, e.g. "gopax GET /orders".
    pub context: String,
}

impl ApiError {
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        body: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        ApiError {
            kind,
            message: message.into(),
            body: body.into(),
            context: context.into(),
        }
    }
}

/// Main SDK error type.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Venue-reported failure, classified by the rule tables
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Missing or unresolved request argument
    #[error("Argument error: {0}")]
    Argument(String),

    /// Credentials missing or unusable before any network call
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Generic request error
    #[error("Generic request error: {0}")]
    GenericRequest(String),

    /// JSON parse error
    #[error("Json parse error: {0}")]
    JsonParse(String),
}

impl Error {
    /// Create a generic venue error carrying the raw body.
    pub fn exchange(
        message: impl Into<String>,
        body: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Error::Api(ApiError::new(ErrorKind::Exchange, message, body, context))
    }

    /// Kind of the underlying venue error, if this is one.
    pub fn api_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Api(e) => Some(e.kind),
            _ => None,
        }
    }
}
