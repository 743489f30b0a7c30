//! Credential types for station and access-point mode
//!
//! SSID and passphrase bounds follow 802.11: an SSID is at most 32 octets,
//! a WPA2 passphrase is 8 to 63 printable ASCII characters. Construction
//! validates, so any value of these types is usable as-is by the radio stack.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum SSID length in bytes (802.11 limit)
pub const MAX_SSID_LEN: usize = 32;

/// Minimum WPA2 passphrase length
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Maximum WPA2 passphrase length
pub const MAX_PASSPHRASE_LEN: usize = 63;

/// Credential validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CredentialError {
    /// SSID is empty
    EmptySsid,
    /// SSID exceeds 32 bytes
    SsidTooLong,
    /// Passphrase outside the 8-63 byte WPA2 range
    PassphraseLength,
    /// Credential contains non-ASCII bytes
    NotAscii,
}

/// A validated SSID/passphrase pair
///
/// Serves both station mode (the network the instrument joins) and AP mode
/// (the network it hosts for on-site configuration).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Credentials {
    ssid: String<MAX_SSID_LEN>,
    passphrase: String<MAX_PASSPHRASE_LEN>,
}

impl Credentials {
    /// Validate and build a credential pair
    pub fn new(ssid: &str, passphrase: &str) -> Result<Self, CredentialError> {
        check(ssid, passphrase)?;
        let ssid = String::try_from(ssid).map_err(|_| CredentialError::SsidTooLong)?;
        let passphrase =
            String::try_from(passphrase).map_err(|_| CredentialError::PassphraseLength)?;
        Ok(Self { ssid, passphrase })
    }

    /// Network name
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// WPA2 passphrase
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Re-check every invariant
    ///
    /// For values that crossed a serialization boundary, where the derived
    /// decoder bypasses [`Credentials::new`].
    pub fn validate(&self) -> Result<(), CredentialError> {
        check(&self.ssid, &self.passphrase)
    }
}

fn check(ssid: &str, passphrase: &str) -> Result<(), CredentialError> {
    if ssid.is_empty() {
        return Err(CredentialError::EmptySsid);
    }
    if !ssid.is_ascii() || !passphrase.is_ascii() {
        return Err(CredentialError::NotAscii);
    }
    if ssid.len() > MAX_SSID_LEN {
        return Err(CredentialError::SsidTooLong);
    }
    if passphrase.len() < MIN_PASSPHRASE_LEN || passphrase.len() > MAX_PASSPHRASE_LEN {
        return Err(CredentialError::PassphraseLength);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_credentials() {
        let cred = Credentials::new("mywifissid", "mywifipasswd").unwrap();
        assert_eq!(cred.ssid(), "mywifissid");
        assert_eq!(cred.passphrase(), "mywifipasswd");
        assert!(cred.validate().is_ok());
    }

    #[test]
    fn test_empty_ssid_rejected() {
        assert_eq!(
            Credentials::new("", "mywifipasswd"),
            Err(CredentialError::EmptySsid)
        );
    }

    #[test]
    fn test_ssid_too_long_rejected() {
        let ssid = "x".repeat(MAX_SSID_LEN + 1);
        assert_eq!(
            Credentials::new(&ssid, "mywifipasswd"),
            Err(CredentialError::SsidTooLong)
        );
    }

    #[test]
    fn test_passphrase_bounds() {
        assert_eq!(
            Credentials::new("net", "short"),
            Err(CredentialError::PassphraseLength)
        );
        let long = "p".repeat(MAX_PASSPHRASE_LEN + 1);
        assert_eq!(
            Credentials::new("net", &long),
            Err(CredentialError::PassphraseLength)
        );
        let max = "p".repeat(MAX_PASSPHRASE_LEN);
        assert!(Credentials::new("net", &max).is_ok());
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(
            Credentials::new("café-net", "mywifipasswd"),
            Err(CredentialError::NotAscii)
        );
        assert_eq!(
            Credentials::new("net", "pässwörter"),
            Err(CredentialError::NotAscii)
        );
    }

    proptest! {
        #[test]
        fn prop_ascii_in_bounds_accepted(
            ssid in "[ -~]{1,32}",
            passphrase in "[ -~]{8,63}",
        ) {
            let cred = Credentials::new(&ssid, &passphrase).unwrap();
            prop_assert_eq!(cred.ssid(), ssid.as_str());
            prop_assert_eq!(cred.passphrase(), passphrase.as_str());
        }

        #[test]
        fn prop_oversized_ssid_rejected(ssid in "[ -~]{33,64}") {
            prop_assert_eq!(
                Credentials::new(&ssid, "mywifipasswd"),
                Err(CredentialError::SsidTooLong)
            );
        }
    }
}
