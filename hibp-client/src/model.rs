//! Typed records decoded from the breach service.
//!
//! Field names bind to the service's exact wire names (PascalCase on the
//! wire). Records are plain data: created only by decoding a response and
//! never mutated afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A single breach event.
///
/// `name` is the stable key for the breach; `title` is the human-readable
/// form and may change over time. A breach listing requested with
/// `truncate_response` returns records carrying only `Name` on the wire, so
/// every other field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Breach {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub domain: String,
    /// Date the breach occurred (a calendar date on the wire).
    #[serde(default)]
    pub breach_date: Option<NaiveDate>,
    /// Instant the breach was added to the service.
    #[serde(default)]
    pub added_date: Option<DateTime<Utc>>,
    /// Instant the breach record was last modified.
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pwn_count: u64,
    #[serde(default)]
    pub description: String,
    /// Categories of personal data compromised in the breach, in the order
    /// the service reports them.
    #[serde(default)]
    pub data_classes: Vec<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_fabricated: bool,
    #[serde(default)]
    pub is_sensitive: bool,
    #[serde(default)]
    pub is_retired: bool,
    #[serde(default)]
    pub is_spam_list: bool,
    #[serde(default)]
    pub logo_path: Option<String>,
}

/// A public paste that mentions an account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Paste {
    pub source: String,
    pub id: String,
    /// Pastes frequently have no title.
    #[serde(default)]
    pub title: Option<String>,
    /// Date the paste was posted; absent when the source does not report it.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub email_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADOBE: &str = r#"{
        "Name": "Adobe",
        "Title": "Adobe",
        "Domain": "adobe.com",
        "BreachDate": "2013-10-04",
        "AddedDate": "2013-12-04T00:00:00Z",
        "ModifiedDate": "2022-05-15T23:52:49Z",
        "PwnCount": 152445165,
        "Description": "In October 2013, 153 million Adobe accounts were breached.",
        "LogoPath": "https://haveibeenpwned.com/Content/Images/PwnedLogos/Adobe.png",
        "DataClasses": ["Email addresses", "Password hints", "Passwords", "Usernames"],
        "IsVerified": true,
        "IsFabricated": false,
        "IsSensitive": false,
        "IsRetired": false,
        "IsSpamList": false
    }"#;

    #[test]
    fn decodes_full_breach_record() {
        let breach: Breach = serde_json::from_str(ADOBE).unwrap();
        assert_eq!(breach.name, "Adobe");
        assert_eq!(breach.domain, "adobe.com");
        assert_eq!(breach.breach_date, NaiveDate::from_ymd_opt(2013, 10, 4));
        assert_eq!(breach.pwn_count, 152_445_165);
        assert_eq!(breach.data_classes.len(), 4);
        assert_eq!(breach.data_classes[0], "Email addresses");
        assert!(breach.is_verified);
        assert!(!breach.is_sensitive);
        assert!(breach.logo_path.is_some());
    }

    #[test]
    fn decodes_truncated_breach_record() {
        // truncateResponse=true returns records with only the stable name.
        let breach: Breach = serde_json::from_str(r#"{"Name":"Adobe"}"#).unwrap();
        assert_eq!(breach.name, "Adobe");
        assert_eq!(breach.title, "");
        assert_eq!(breach.breach_date, None);
        assert_eq!(breach.pwn_count, 0);
        assert!(breach.data_classes.is_empty());
        assert!(!breach.is_verified);
    }

    #[test]
    fn missing_name_is_a_decode_error() {
        assert!(serde_json::from_str::<Breach>(r#"{"Title":"Adobe"}"#).is_err());
    }

    #[test]
    fn decodes_paste_record() {
        let json = r#"{
            "Source": "Pastebin",
            "Id": "8Q0BvKD8",
            "Title": "syslog",
            "Date": "2014-03-04T19:14:54Z",
            "EmailCount": 139
        }"#;
        let paste: Paste = serde_json::from_str(json).unwrap();
        assert_eq!(paste.source, "Pastebin");
        assert_eq!(paste.id, "8Q0BvKD8");
        assert_eq!(paste.title.as_deref(), Some("syslog"));
        assert_eq!(paste.email_count, 139);
        assert!(paste.date.is_some());
    }

    #[test]
    fn paste_title_and_date_may_be_null() {
        let json = r#"{"Source":"AdHocUrl","Id":"x","Title":null,"Date":null,"EmailCount":2}"#;
        let paste: Paste = serde_json::from_str(json).unwrap();
        assert_eq!(paste.title, None);
        assert_eq!(paste.date, None);
    }
}
