//! Aggregate Wi-Fi configuration

use crate::credentials::{CredentialError, Credentials};
use crate::flags::FeatureFlags;

/// Configuration format version for persistence compatibility checks
pub const CONFIG_VERSION: u8 = 1;

/// Aggregate configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Format version does not match [`CONFIG_VERSION`]
    VersionMismatch,
    /// Credential violates 802.11 bounds
    Credential(CredentialError),
}

impl From<CredentialError> for ConfigError {
    fn from(e: CredentialError) -> Self {
        ConfigError::Credential(e)
    }
}

/// Complete Wi-Fi configuration for one firmware image
///
/// Station-mode credentials, AP-mode credentials and the build-time toggles,
/// as resolved for a particular boot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WifiConfig {
    /// Format version for compatibility checks
    pub version: u8,
    /// Station-mode credentials (the network the instrument joins)
    pub client: Credentials,
    /// Access-point credentials (the network the instrument hosts)
    pub ap: Credentials,
    /// Build-time toggles
    pub flags: FeatureFlags,
}

impl WifiConfig {
    /// Assemble a configuration at the current format version
    pub fn new(client: Credentials, ap: Credentials, flags: FeatureFlags) -> Self {
        Self {
            version: CONFIG_VERSION,
            client,
            ap,
            flags,
        }
    }

    /// Check format compatibility and credential invariants
    ///
    /// For configurations assembled field-by-field instead of through
    /// [`WifiConfig::new`], such as a future persisted format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }
        self.client.validate()?;
        self.ap.validate()?;
        Ok(())
    }
}
