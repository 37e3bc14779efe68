//! SHA-1 helper for the pwned-passwords protocol.

use sha1::{Digest, Sha1};

/// Computes the SHA-1 digest of a password and renders it as 40 uppercase
/// hex characters, the form the range protocol works with.
///
/// Any string is a valid input, including the empty one.
pub fn sha1_hex(password: &str) -> String {
    format!("{:X}", Sha1::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        // Classic test vector for "password".
        assert_eq!(
            sha1_hex("password"),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
    }

    #[test]
    fn empty_input_is_valid() {
        assert_eq!(sha1_hex(""), "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709");
    }

    #[test]
    fn deterministic_and_well_formed() {
        let a = sha1_hex("correct horse battery staple");
        let b = sha1_hex("correct horse battery staple");
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(a.bytes().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn differing_inputs_differ() {
        assert_ne!(sha1_hex("password"), sha1_hex("password "));
        assert_ne!(sha1_hex("a"), sha1_hex("b"));
    }
}
