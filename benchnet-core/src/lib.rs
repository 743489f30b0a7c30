//! Wi-Fi provisioning defaults for the benchnet instrument family
//!
//! The battery test station and the temperature logger are separate firmware
//! builds that share this crate. It defines everything about Wi-Fi that is
//! fixed when an image is built:
//!
//! - Credential types with 802.11 validation
//! - Per-board default credentials and feature toggles
//! - The stored override record written by the config UI
//!
//! Nothing here touches a radio. Boot-time selection between defaults and
//! stored overrides lives in `benchnet-loader`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod credentials;
pub mod flags;
pub mod profile;
pub mod stored;

pub use config::{ConfigError, WifiConfig, CONFIG_VERSION};
pub use credentials::{
    CredentialError, Credentials, MAX_PASSPHRASE_LEN, MAX_SSID_LEN, MIN_PASSPHRASE_LEN,
};
pub use flags::FeatureFlags;
pub use profile::BuildProfile;
pub use stored::{StoredError, StoredWifiConfig, STORED_MAGIC, STORED_VERSION};
