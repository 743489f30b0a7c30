//! Boot-time Wi-Fi configuration selection
//!
//! Resolves the credentials a benchnet instrument boots with: a stored
//! config-UI override when one is present and trusted, otherwise the
//! compiled-in defaults of the board profile. Flash access is out of scope;
//! the caller hands in whatever bytes it read.

#![no_std]
#![deny(unsafe_code)]

pub mod boot;
pub mod toml;

pub use boot::{select_boot_config, BootConfig, CredentialSource};
pub use toml::{parse_config, ParseError};

/// Factory configuration shipped with the battery test station
pub const BATT_TESTER_TOML: &str = include_str!("../profiles/batt_tester.toml");

/// Factory configuration shipped with the temperature logger
pub const TEMP_LOGGER_TOML: &str = include_str!("../profiles/temp_logger.toml");
