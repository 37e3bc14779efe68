//! Client for the [Have I Been Pwned](https://haveibeenpwned.com/) services.
//!
//! Answers three questions about an identity or credential: which data
//! breaches an account appears in, which public pastes mention it, and
//! whether a password is present in the pwned-passwords corpus.
//!
//! Password checks use the k-anonymity range protocol: the password is hashed
//! locally with SHA-1 and only the first 5 hex characters of the digest are
//! sent to the service, which answers with every known hash suffix sharing
//! that prefix. The match decision happens entirely on the client, so neither
//! the password nor its full hash ever leaves the process.
//!
//! # Usage
//!
//! ```no_run
//! use hibp_client::HibpClient;
//!
//! # async fn run() -> Result<(), hibp_client::Error> {
//! let client = HibpClient::builder("my-app-v1")
//!     .api_key("xxxxxxxx")
//!     .add_padding(true)
//!     .build()?;
//!
//! if client.is_password_pwned("hunter2").await? {
//!     println!("pick another password");
//! }
//!
//! for breach in client.all_breaches_for_account("someone@example.com").await? {
//!     println!("{}: {}", breach.name, breach.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The breach service rejects unidentified clients, so a non-empty,
//! application-identifying user agent is mandatory and has no default.
//! Account-scoped endpoints additionally require an API key. Rate limiting
//! (HTTP 429) is surfaced as [`Error::RateLimited`] and the client never
//! retries on its own; backoff policy belongs to the embedding application.

pub mod classify;
pub mod client;
pub mod error;
pub mod hash;
pub mod model;
pub mod range;

pub use client::{BreachQuery, HibpClient, HibpClientBuilder};
pub use error::Error;
pub use hash::sha1_hex;
pub use model::{Breach, Paste};
pub use range::{PwnedHash, is_match, parse_range};

/// Default base URL for the breach and paste service.
pub const HIBP_BASE_URL: &str = "https://haveibeenpwned.com/api/v3/";

/// Default base URL for the pwned-passwords range service.
pub const PWNED_PASSWORDS_BASE_URL: &str = "https://api.pwnedpasswords.com/";

/// Length of the hash prefix transmitted during a range search (5 hex chars).
pub const PREFIX_LEN: usize = 5;
