//! Parsing and matching for pwned-passwords range responses.
//!
//! A range response is plain text, one `SUFFIX:COUNT` pair per line, where
//! SUFFIX is the 35-character tail of a SHA-1 digest whose first 5 characters
//! were the query prefix.

use std::fmt;

use crate::error::Error;

/// One entry of a range response: a hash suffix and the number of times the
/// corresponding password was seen in breach corpora.
///
/// With padding enabled the service mixes decoy entries into the response.
/// Decoys are not distinguishable from real rows at this layer; they carry a
/// count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PwnedHash {
    pub suffix: String,
    pub count: u64,
}

impl fmt::Display for PwnedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.suffix, self.count)
    }
}

/// Parses a newline-delimited `suffix:count` body into entries.
///
/// Tolerates CRLF line endings and skips blank lines. An empty body is the
/// valid "no matches in this shard" outcome and parses to an empty vec. A
/// line without a colon, or whose count is not a non-negative integer, is a
/// [`Error::MalformedResponse`].
pub fn parse_range(body: &str) -> Result<Vec<PwnedHash>, Error> {
    let mut hashes = Vec::new();
    for line in body.lines() {
        if line.is_empty() {
            continue;
        }
        let (suffix, count) = line.split_once(':').ok_or_else(|| Error::MalformedResponse {
            reason: format!("range line without separator: {:?}", line),
        })?;
        let count = count.parse::<u64>().map_err(|_| Error::MalformedResponse {
            reason: format!("range line with non-integer count: {:?}", line),
        })?;
        hashes.push(PwnedHash { suffix: suffix.to_string(), count });
    }
    Ok(hashes)
}

/// Tests whether `full_hash` appears in a range result queried with `prefix`.
///
/// Each candidate is reconstructed as `prefix + suffix` and compared against
/// `full_hash`. Both sides are uppercase hex by construction, so comparison
/// is exact. Absence of a match is an ordinary `false`, not an error.
pub fn is_match(full_hash: &str, prefix: &str, hashes: &[PwnedHash]) -> bool {
    match full_hash.strip_prefix(prefix) {
        Some(rest) => hashes.iter().any(|h| h.suffix == rest),
        None => false,
    }
}
