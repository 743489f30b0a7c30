//! Stored credential override record
//!
//! The config UI persists user-entered credentials to flash as a
//! postcard-encoded record with a magic number, format version and CRC32.
//! The boot path checks all three before trusting an override.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::credentials::{CredentialError, Credentials};

/// Magic number identifying a credential override record ("WIFC")
pub const STORED_MAGIC: u32 = 0x5749_4643;

/// Current override record version
pub const STORED_VERSION: u8 = 1;

/// Stored record errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoredError {
    /// Postcard decoding failed
    Decode,
    /// Output buffer too small for the encoded record
    Encode,
    /// Magic number does not match
    BadMagic,
    /// Record version mismatch
    VersionMismatch,
    /// CRC32 check failed
    CrcMismatch,
    /// Decoded credentials violate 802.11 bounds
    Invalid(CredentialError),
}

/// Credential override written by the config UI
///
/// Stores only credentials. Feature toggles are build-time facts and never
/// come from flash.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredWifiConfig {
    /// Magic number for validation
    pub magic: u32,
    /// Record format version
    pub version: u8,
    /// Station-mode override
    pub client: Credentials,
    /// Access-point override
    pub ap: Credentials,
    /// CRC32 over magic, version and credential bytes
    pub crc: u32,
}

impl StoredWifiConfig {
    /// Build a record with the CRC already stamped
    pub fn new(client: Credentials, ap: Credentials) -> Self {
        let mut record = Self {
            magic: STORED_MAGIC,
            version: STORED_VERSION,
            client,
            ap,
            crc: 0,
        };
        record.crc = record.calculate_crc();
        record
    }

    /// Check magic and version
    pub fn is_valid(&self) -> bool {
        self.magic == STORED_MAGIC && self.version == STORED_VERSION
    }

    /// Calculate the CRC32 over everything except the crc field
    pub fn calculate_crc(&self) -> u32 {
        let mut crc: u32 = 0xFFFF_FFFF;
        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version]);
        crc = crc32_update(crc, self.client.ssid().as_bytes());
        crc = crc32_update(crc, self.client.passphrase().as_bytes());
        crc = crc32_update(crc, self.ap.ssid().as_bytes());
        crc = crc32_update(crc, self.ap.passphrase().as_bytes());
        !crc
    }

    /// Verify the stored CRC
    pub fn verify_crc(&self) -> bool {
        self.crc == self.calculate_crc()
    }

    /// Encode into a caller-provided buffer, returning the used slice
    #[cfg(feature = "serde")]
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a [u8], StoredError> {
        let used = postcard::to_slice(self, buf).map_err(|_| StoredError::Encode)?;
        Ok(used)
    }

    /// Decode and fully validate a record read from flash
    ///
    /// Checks magic, version and CRC, then re-validates the credentials,
    /// since the derived decoder bypasses the checked constructors.
    #[cfg(feature = "serde")]
    pub fn from_bytes(data: &[u8]) -> Result<Self, StoredError> {
        let record: Self = postcard::from_bytes(data).map_err(|_| StoredError::Decode)?;
        if record.magic != STORED_MAGIC {
            return Err(StoredError::BadMagic);
        }
        if record.version != STORED_VERSION {
            return Err(StoredError::VersionMismatch);
        }
        if !record.verify_crc() {
            return Err(StoredError::CrcMismatch);
        }
        record.client.validate().map_err(StoredError::Invalid)?;
        record.ap.validate().map_err(StoredError::Invalid)?;
        Ok(record)
    }
}

/// CRC32 update (IEEE 802.3 polynomial)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB8_8320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoredWifiConfig {
        StoredWifiConfig::new(
            Credentials::new("home-net", "hunter2hunter2").unwrap(),
            Credentials::new("TempLogger", "TempLogger").unwrap(),
        )
    }

    #[test]
    fn test_new_record_is_valid() {
        let record = sample();
        assert!(record.is_valid());
        assert!(record.verify_crc());
    }

    #[test]
    fn test_crc_detects_tampering() {
        let mut record = sample();
        record.client = Credentials::new("evil-net", "hunter2hunter2").unwrap();
        assert!(!record.verify_crc());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_roundtrip() {
        let record = sample();
        let mut buf = [0u8; 256];
        let encoded = record.to_slice(&mut buf).unwrap();
        let decoded = StoredWifiConfig::from_bytes(encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_corrupt_bytes_rejected() {
        let record = sample();
        let mut buf = [0u8; 256];
        let len = record.to_slice(&mut buf).unwrap().len();
        // Flip a byte inside the encoded credentials
        buf[len / 2] ^= 0xFF;
        assert!(StoredWifiConfig::from_bytes(&buf[..len]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_bad_magic_rejected() {
        let mut record = sample();
        record.magic = 0x0BAD_F00D;
        record.crc = record.calculate_crc();
        let mut buf = [0u8; 256];
        let encoded = record.to_slice(&mut buf).unwrap();
        assert_eq!(
            StoredWifiConfig::from_bytes(encoded),
            Err(StoredError::BadMagic)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_version_mismatch_rejected() {
        let mut record = sample();
        record.version = STORED_VERSION + 1;
        record.crc = record.calculate_crc();
        let mut buf = [0u8; 256];
        let encoded = record.to_slice(&mut buf).unwrap();
        assert_eq!(
            StoredWifiConfig::from_bytes(encoded),
            Err(StoredError::VersionMismatch)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_truncated_bytes_rejected() {
        let record = sample();
        let mut buf = [0u8; 256];
        let len = record.to_slice(&mut buf).unwrap().len();
        assert_eq!(
            StoredWifiConfig::from_bytes(&buf[..len - 1]),
            Err(StoredError::Decode)
        );
    }
}
