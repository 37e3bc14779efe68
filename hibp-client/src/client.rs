//! The client itself: configuration, request construction, and the public
//! breach, paste, and pwned-passwords operations.

use reqwest::{Proxy, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::classify::{Classified, classify};
use crate::error::Error;
use crate::hash::sha1_hex;
use crate::model::{Breach, Paste};
use crate::range::{PwnedHash, is_match, parse_range};
use crate::{HIBP_BASE_URL, PREFIX_LEN, PWNED_PASSWORDS_BASE_URL};

/// Header carrying the API key on account-scoped requests.
const API_KEY_HEADER: &str = "hibp-api-key";

/// Optional filters for a breached-account lookup.
#[derive(Debug, Clone, Default)]
pub struct BreachQuery {
    /// Restrict results to breaches against this domain.
    pub domain: Option<String>,
    /// Ask the service to return only breach names.
    pub truncate_response: bool,
    /// Include breaches flagged as unverified.
    pub include_unverified: bool,
}

/// Builder for [`HibpClient`].
///
/// The user agent is mandatory and has no default: the breach service
/// answers 403 to unidentified clients, so [`build`](Self::build) refuses an
/// empty one up front.
pub struct HibpClientBuilder {
    hibp_url: String,
    pwned_passwords_url: String,
    user_agent: String,
    api_key: Option<String>,
    add_padding: bool,
    proxy: Option<Proxy>,
}

impl HibpClientBuilder {
    fn new(user_agent: &str) -> Self {
        Self {
            hibp_url: HIBP_BASE_URL.to_string(),
            pwned_passwords_url: PWNED_PASSWORDS_BASE_URL.to_string(),
            user_agent: user_agent.to_string(),
            api_key: None,
            add_padding: false,
            proxy: None,
        }
    }

    /// Overrides the base URL of the breach and paste service.
    pub fn hibp_url(mut self, url: &str) -> Self {
        self.hibp_url = url.to_string();
        self
    }

    /// Overrides the base URL of the pwned-passwords range service.
    pub fn pwned_passwords_url(mut self, url: &str) -> Self {
        self.pwned_passwords_url = url.to_string();
        self
    }

    /// Sets the API key sent as `hibp-api-key` with account-scoped requests.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Asks the range service to pad responses with decoy entries, which
    /// obscures the real suffix counts from traffic analysis.
    pub fn add_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// Routes all requests through the given proxy.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Builds the client. Fails if the user agent is empty, a base URL does
    /// not parse, or the HTTP transport cannot be constructed.
    pub fn build(self) -> Result<HibpClient, Error> {
        if self.user_agent.trim().is_empty() {
            return Err(Error::MissingUserAgent);
        }

        let hibp_url = parse_base_url(&self.hibp_url)?;
        let pwned_passwords_url = parse_base_url(&self.pwned_passwords_url)?;

        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(proxy) = self.proxy {
            builder = builder.proxy(proxy);
        }
        let http = builder.build()?;

        Ok(HibpClient {
            http,
            hibp_url,
            pwned_passwords_url,
            api_key: self.api_key,
            add_padding: self.add_padding,
        })
    }
}

/// Client for the Have I Been Pwned breach, paste, and pwned-passwords
/// services.
///
/// Immutable once built. Holds no per-call state, so a single instance can
/// be shared and called from any number of tasks concurrently; connection
/// reuse lives inside the transport.
#[derive(Clone)]
pub struct HibpClient {
    http: reqwest::Client,
    hibp_url: Url,
    pwned_passwords_url: Url,
    api_key: Option<String>,
    add_padding: bool,
}

impl HibpClient {
    /// Starts building a client with the given application-identifying user
    /// agent.
    pub fn builder(user_agent: &str) -> HibpClientBuilder {
        HibpClientBuilder::new(user_agent)
    }

    /// Fetches all breaches an account appears in, with default options: no
    /// domain filter, full records, verified breaches only.
    ///
    /// An account that appears in no breach yields an empty vec; that is a
    /// successful outcome, not an error.
    pub async fn all_breaches_for_account(&self, account: &str) -> Result<Vec<Breach>, Error> {
        self.breaches_for_account(account, &BreachQuery::default()).await
    }

    /// Fetches the breaches for an account, honouring the given filters.
    ///
    /// A malformed or empty account is answered by the service with 400 and
    /// surfaces as [`Error::BadRequest`], never as an empty list.
    pub async fn breaches_for_account(
        &self,
        account: &str,
        query: &BreachQuery,
    ) -> Result<Vec<Breach>, Error> {
        let mut url = endpoint(&self.hibp_url, &["breachedaccount", account]);
        {
            let mut pairs = url.query_pairs_mut();
            // "includeUnveridied" is the service's own spelling, typo and all.
            pairs.append_pair("includeUnveridied", bool_str(query.include_unverified));
            pairs.append_pair("truncateResponse", bool_str(query.truncate_response));
            if let Some(domain) = &query.domain {
                pairs.append_pair("domain", domain);
            }
        }
        debug!(account, "breachedaccount lookup");
        Ok(self.get_json(url, true).await?.unwrap_or_default())
    }

    /// Fetches a single breach by its stable name.
    ///
    /// Returns `Ok(None)` when no breach goes by that name.
    pub async fn breach_by_name(&self, name: &str) -> Result<Option<Breach>, Error> {
        let url = endpoint(&self.hibp_url, &["breach", name]);
        debug!(name, "breach lookup");
        self.get_json(url, false).await
    }

    /// Fetches the catalog of all breaches in the system, optionally
    /// filtered to breaches against one domain.
    pub async fn all_breaches(&self, domain: Option<&str>) -> Result<Vec<Breach>, Error> {
        let mut url = endpoint(&self.hibp_url, &["breaches"]);
        if let Some(domain) = domain {
            url.query_pairs_mut().append_pair("domain", domain);
        }
        debug!(domain, "breach catalog fetch");
        Ok(self.get_json(url, false).await?.unwrap_or_default())
    }

    /// Fetches every data-class label known to the service, in the order the
    /// service reports them.
    pub async fn all_data_classes(&self) -> Result<Vec<String>, Error> {
        let url = endpoint(&self.hibp_url, &["dataclasses"]);
        debug!("dataclasses fetch");
        Ok(self.get_json(url, false).await?.unwrap_or_default())
    }

    /// Fetches the pastes that mention an account.
    ///
    /// An account unknown to the paste index is answered with 404; that is
    /// reported here as an empty vec, the same as an account with no pastes.
    pub async fn pastes_for_account(&self, account: &str) -> Result<Vec<Paste>, Error> {
        let url = endpoint(&self.hibp_url, &["pasteaccount", account]);
        debug!(account, "pasteaccount lookup");
        Ok(self.get_json(url, true).await?.unwrap_or_default())
    }

    /// True iff the account appears in at least one breach.
    ///
    /// Performs exactly one underlying breach lookup.
    pub async fn is_account_pwned(&self, account: &str) -> Result<bool, Error> {
        Ok(!self.all_breaches_for_account(account).await?.is_empty())
    }

    /// Queries the range service for every known hash suffix sharing the
    /// given 5-character prefix.
    ///
    /// Only the prefix is transmitted. Anything that is not exactly 5 hex
    /// characters is rejected locally, before any request is made, so a
    /// longer fragment of a hash can never leave the process through this
    /// call. With padding enabled the response includes decoy rows; they are
    /// returned as-is.
    pub async fn search_by_range(&self, prefix: &str) -> Result<Vec<PwnedHash>, Error> {
        if prefix.len() != PREFIX_LEN || !prefix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidPrefix);
        }

        let mut url = endpoint(&self.pwned_passwords_url, &["range", prefix]);
        if self.add_padding {
            url.query_pairs_mut().append_pair("mode", "padded");
        }
        debug!(prefix, "range search");

        let resp = self.http.get(url).send().await?;
        match classify(resp.status().as_u16())? {
            Classified::Empty => Ok(Vec::new()),
            Classified::Success => parse_range(&resp.text().await?),
        }
    }

    /// Checks a plaintext password against the pwned-passwords corpus.
    ///
    /// The password is hashed locally and never transmitted; see
    /// [`is_password_hash_pwned`](Self::is_password_hash_pwned).
    pub async fn is_password_pwned(&self, password: &str) -> Result<bool, Error> {
        self.is_password_hash_pwned(&sha1_hex(password)).await
    }

    /// Checks a SHA-1 password digest against the pwned-passwords corpus.
    ///
    /// Only the first 5 characters of the digest are sent to the service;
    /// the returned suffixes are matched locally. Zero-count rows are
    /// padding decoys and are ignored for the match decision.
    pub async fn is_password_hash_pwned(&self, password_hash: &str) -> Result<bool, Error> {
        let full_hash = password_hash.to_ascii_uppercase();
        let Some(prefix) = full_hash.get(..PREFIX_LEN) else {
            return Err(Error::InvalidPrefix);
        };
        let hashes: Vec<PwnedHash> = self
            .search_by_range(prefix)
            .await?
            .into_iter()
            .filter(|h| h.count > 0)
            .collect();
        Ok(is_match(&full_hash, prefix, &hashes))
    }

    /// One GET against the breach service, classified and decoded.
    ///
    /// `Ok(None)` is the 404 outcome; every call site decides what an empty
    /// result means for its endpoint. `with_api_key` attaches the configured
    /// key on account-scoped endpoints.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        with_api_key: bool,
    ) -> Result<Option<T>, Error> {
        let mut req = self.http.get(url);
        if with_api_key {
            if let Some(key) = &self.api_key {
                req = req.header(API_KEY_HEADER, key);
            }
        }

        let resp = req.send().await?;
        match classify(resp.status().as_u16())? {
            Classified::Empty => Ok(None),
            Classified::Success => {
                let body = resp.text().await?;
                let value = serde_json::from_str(&body).map_err(|e| Error::MalformedResponse {
                    reason: format!("invalid JSON in response: {}", e),
                })?;
                Ok(Some(value))
            }
        }
    }
}

fn parse_base_url(url: &str) -> Result<Url, Error> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidBaseUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl {
            url: url.to_string(),
            reason: "cannot be a base URL".to_string(),
        });
    }
    Ok(parsed)
}

/// Appends path segments to a base URL, percent-encoding each segment so
/// account identifiers survive the trip intact.
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().expect("base URL validated at build");
        path.pop_if_empty();
        path.extend(segments);
    }
    url
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
