//! Boot-time credential selection
//!
//! Picks between the compiled-in profile defaults and the overrides the
//! config UI may have stored, and makes the force-default toggle explicit
//! instead of leaving the interaction ambiguous.

use benchnet_core::{BuildProfile, CredentialError, StoredWifiConfig, WifiConfig};

use crate::toml::parse_config;

/// Where the boot credentials came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CredentialSource {
    /// Compiled-in profile defaults
    BuiltinDefaults,
    /// TOML override written by the config UI
    StoredToml,
    /// Binary override record written by the config UI
    StoredRecord,
}

/// Resolved boot configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootConfig {
    /// The configuration to hand to the radio stack
    pub config: WifiConfig,
    /// Where its credentials came from
    pub source: CredentialSource,
}

/// Select the configuration an instrument boots with
///
/// Overrides are consulted only when the board profile carries the config UI
/// and force-default is off. TOML is tried before the binary record, matching
/// the order the config UI writes them. An unreadable override falls back to
/// the next candidate rather than failing the boot.
///
/// Feature toggles are build-time facts; stored values never change them.
pub fn select_boot_config(
    profile: BuildProfile,
    stored_toml: Option<&str>,
    stored_record: Option<&[u8]>,
) -> Result<BootConfig, CredentialError> {
    let defaults = profile.config()?;

    if !defaults.flags.overrides_allowed() {
        #[cfg(feature = "defmt")]
        defmt::info!("booting with compiled-in Wi-Fi defaults");
        return Ok(BootConfig {
            config: defaults,
            source: CredentialSource::BuiltinDefaults,
        });
    }

    if let Some(toml) = stored_toml {
        match parse_config(toml) {
            Ok(mut config) => {
                config.flags = defaults.flags;
                #[cfg(feature = "defmt")]
                defmt::info!("booting with stored TOML credentials");
                return Ok(BootConfig {
                    config,
                    source: CredentialSource::StoredToml,
                });
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("stored TOML override rejected, trying binary record");
            }
        }
    }

    if let Some(bytes) = stored_record {
        match StoredWifiConfig::from_bytes(bytes) {
            Ok(record) => {
                #[cfg(feature = "defmt")]
                defmt::info!("booting with stored binary credentials");
                return Ok(BootConfig {
                    config: WifiConfig::new(record.client, record.ap, defaults.flags),
                    source: CredentialSource::StoredRecord,
                });
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("stored binary override rejected, using defaults");
            }
        }
    }

    #[cfg(feature = "defmt")]
    defmt::info!("no usable override, booting with compiled-in Wi-Fi defaults");
    Ok(BootConfig {
        config: defaults,
        source: CredentialSource::BuiltinDefaults,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchnet_core::Credentials;

    const OVERRIDE_TOML: &str = r#"
[wifi.client]
ssid = "home-net"
passphrase = "hunter2hunter2"

[wifi.ap]
ssid = "TempLogger"
passphrase = "TempLogger"
"#;

    fn encoded_record(buf: &mut [u8]) -> &[u8] {
        let record = StoredWifiConfig::new(
            Credentials::new("lab-net", "labpassphrase").unwrap(),
            Credentials::new("TempLogger", "TempLogger").unwrap(),
        );
        record.to_slice(buf).unwrap()
    }

    #[test]
    fn test_no_config_ui_ignores_overrides() {
        // The battery tester has no config UI, so nothing could have
        // written an override; stored data is stale or foreign.
        let boot = select_boot_config(BuildProfile::BattTester, Some(OVERRIDE_TOML), None).unwrap();
        assert_eq!(boot.source, CredentialSource::BuiltinDefaults);
        assert_eq!(boot.config.ap.ssid(), "BattTester");
    }

    #[cfg(not(feature = "force-default-wifi"))]
    #[test]
    fn test_toml_override_wins() {
        let boot = select_boot_config(BuildProfile::TempLogger, Some(OVERRIDE_TOML), None).unwrap();
        assert_eq!(boot.source, CredentialSource::StoredToml);
        assert_eq!(boot.config.client.ssid(), "home-net");
        // Flags still come from the build, not from storage
        assert!(boot.config.flags.config_ui);
    }

    #[cfg(not(feature = "force-default-wifi"))]
    #[test]
    fn test_corrupt_toml_falls_back_to_record() {
        let mut buf = [0u8; 256];
        let bytes = encoded_record(&mut buf);
        let boot =
            select_boot_config(BuildProfile::TempLogger, Some("[wifi.client]\n"), Some(bytes))
                .unwrap();
        assert_eq!(boot.source, CredentialSource::StoredRecord);
        assert_eq!(boot.config.client.ssid(), "lab-net");
    }

    #[cfg(not(feature = "force-default-wifi"))]
    #[test]
    fn test_corrupt_everything_falls_back_to_defaults() {
        let boot = select_boot_config(
            BuildProfile::TempLogger,
            Some("not toml at all = ="),
            Some(&[0xFF, 0x00, 0xFF]),
        )
        .unwrap();
        assert_eq!(boot.source, CredentialSource::BuiltinDefaults);
        assert_eq!(boot.config.client.ssid(), BuildProfile::TempLogger.client_ssid());
    }

    #[cfg(not(feature = "force-default-wifi"))]
    #[test]
    fn test_nothing_stored_uses_defaults() {
        let boot = select_boot_config(BuildProfile::TempLogger, None, None).unwrap();
        assert_eq!(boot.source, CredentialSource::BuiltinDefaults);
        assert_eq!(boot.config.ap.ssid(), "TempLogger");
    }

    #[cfg(feature = "force-default-wifi")]
    #[test]
    fn test_force_default_ignores_stored() {
        let mut buf = [0u8; 256];
        let bytes = encoded_record(&mut buf);
        let boot =
            select_boot_config(BuildProfile::TempLogger, Some(OVERRIDE_TOML), Some(bytes)).unwrap();
        assert_eq!(boot.source, CredentialSource::BuiltinDefaults);
        assert_eq!(boot.config.client.ssid(), BuildProfile::TempLogger.client_ssid());
    }
}
