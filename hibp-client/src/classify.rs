//! Status-code classification shared by every endpoint call.
//!
//! Funnelling all responses through [`classify`] keeps the error mapping
//! identical across endpoints. The one intentional split is 404: it comes
//! back as [`Classified::Empty`] and each call site decides whether that
//! means "no records" or "absent value".

use crate::error::Error;

/// A transport outcome that is not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified {
    /// Success status; the body carries the expected payload.
    Success,
    /// 404. The call site resolves this to an empty collection or `None`.
    Empty,
}

/// Classify an HTTP status code into a success, an empty result, or a
/// typed error.
pub fn classify(status: u16) -> Result<Classified, Error> {
    match status {
        200..=299 => Ok(Classified::Success),
        404 => Ok(Classified::Empty),
        400 => Err(Error::BadRequest),
        // The v3 protocol answers a missing API key with 401 and a missing
        // user agent with 403; both are rejections of the client identity.
        401 | 403 => Err(Error::Forbidden),
        429 => Err(Error::RateLimited),
        other => Err(Error::UnexpectedStatus { status: other }),
    }
}
