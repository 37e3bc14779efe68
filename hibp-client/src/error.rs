/// Failures surfaced by the client.
///
/// Nothing is retried and nothing is swallowed: every non-success transport
/// outcome maps onto exactly one variant here, except 404, which each
/// endpoint resolves to an empty collection or an absent value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bad request: the account does not comply with an acceptable format")]
    BadRequest,

    #[error("forbidden: missing or invalid user agent or API key")]
    Forbidden,

    #[error("too many requests: the rate limit has been exceeded")]
    RateLimited,

    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("a non-empty user agent is required")]
    MissingUserAgent,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("range prefix must be exactly 5 hex characters")]
    InvalidPrefix,
}
