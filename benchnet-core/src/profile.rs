//! Board personalities
//!
//! The battery test station and the temperature logger are per-project forks
//! of the same platform. They share station-mode defaults; each hosts its own
//! access point, and only the temperature logger ships the Wi-Fi config UI.
//! The forks stay separate build targets rather than being merged into one
//! default set.

use crate::config::WifiConfig;
use crate::credentials::{CredentialError, Credentials};
use crate::flags::FeatureFlags;

#[cfg(all(feature = "batt-tester", feature = "temp-logger"))]
compile_error!(
    "features `batt-tester` and `temp-logger` select the board personality; enable exactly one"
);

/// Station-mode SSID shared by the instrument family
///
/// Overridable per build via the `BENCHNET_WIFI_SSID` environment variable.
pub const DEFAULT_CLIENT_SSID: &str = match option_env!("BENCHNET_WIFI_SSID") {
    Some(ssid) => ssid,
    None => "mywifissid",
};

/// Station-mode passphrase shared by the instrument family
///
/// Overridable per build via `BENCHNET_WIFI_PASSPHRASE`.
pub const DEFAULT_CLIENT_PASSPHRASE: &str = match option_env!("BENCHNET_WIFI_PASSPHRASE") {
    Some(passphrase) => passphrase,
    None => "mywifipasswd",
};

/// Board personality for a firmware build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuildProfile {
    /// Battery test station
    BattTester,
    /// Temperature logger
    TempLogger,
}

impl BuildProfile {
    /// The personality selected by the build
    ///
    /// Only defined when exactly one of the `batt-tester` / `temp-logger`
    /// features is enabled.
    #[cfg(all(feature = "batt-tester", not(feature = "temp-logger")))]
    pub const fn active() -> Self {
        Self::BattTester
    }

    /// The personality selected by the build
    ///
    /// Only defined when exactly one of the `batt-tester` / `temp-logger`
    /// features is enabled.
    #[cfg(all(feature = "temp-logger", not(feature = "batt-tester")))]
    pub const fn active() -> Self {
        Self::TempLogger
    }

    /// Default station-mode SSID
    pub const fn client_ssid(self) -> &'static str {
        DEFAULT_CLIENT_SSID
    }

    /// Default station-mode passphrase
    pub const fn client_passphrase(self) -> &'static str {
        DEFAULT_CLIENT_PASSPHRASE
    }

    /// Access-point SSID for this board
    pub const fn ap_ssid(self) -> &'static str {
        match self {
            Self::BattTester => "BattTester",
            Self::TempLogger => "TempLogger",
        }
    }

    /// Access-point passphrase for this board
    pub const fn ap_passphrase(self) -> &'static str {
        match self {
            Self::BattTester => "Batteries",
            Self::TempLogger => "TempLogger",
        }
    }

    /// Feature toggles for this board
    ///
    /// Force-default stays off unless the build enables the
    /// `force-default-wifi` feature. Only the temperature logger carries the
    /// config UI.
    pub const fn flags(self) -> FeatureFlags {
        FeatureFlags {
            force_default_on_boot: cfg!(feature = "force-default-wifi"),
            config_ui: matches!(self, Self::TempLogger),
        }
    }

    /// Build the complete default configuration for this board
    ///
    /// Fails only if a build-time override put a credential outside the
    /// 802.11 bounds; the shipped literals always pass.
    pub fn config(self) -> Result<WifiConfig, CredentialError> {
        Ok(WifiConfig::new(
            Credentials::new(self.client_ssid(), self.client_passphrase())?,
            Credentials::new(self.ap_ssid(), self.ap_passphrase())?,
            self.flags(),
        ))
    }
}
