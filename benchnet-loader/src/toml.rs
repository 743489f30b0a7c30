//! Simple TOML parser for Wi-Fi configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for the
//! benchnet credential record. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, boolean)
//! - [wifi], [wifi.client], [wifi.ap] section headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings
//! - Arrays and inline tables
//! - Dotted keys outside section headers

use benchnet_core::{CredentialError, Credentials, FeatureFlags, WifiConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Section header is not one of wifi, wifi.client, wifi.ap
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// A required credential key is absent
    MissingField(&'static str),
    /// Credential violates 802.11 bounds
    InvalidCredential(CredentialError),
}

impl From<CredentialError> for ParseError {
    fn from(e: CredentialError) -> Self {
        ParseError::InvalidCredential(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy)]
enum Section {
    Root,
    Wifi,
    Client,
    Ap,
}

/// Parse TOML configuration into WifiConfig
///
/// All four credential keys are required; a missing one is a hard error
/// rather than a silent empty default. Unknown keys are ignored.
pub fn parse_config(input: &str) -> Result<WifiConfig, ParseError> {
    let mut section = Section::Root;
    let mut flags = FeatureFlags::new();
    let mut client_ssid: Option<&str> = None;
    let mut client_passphrase: Option<&str> = None;
    let mut ap_ssid: Option<&str> = None;
    let mut ap_passphrase: Option<&str> = None;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        // Parse key = value
        if let Some((key, value)) = parse_key_value(line) {
            match section {
                Section::Wifi => match key {
                    "force_default_on_boot" => {
                        flags.force_default_on_boot = parse_bool(value)?;
                    }
                    "config_ui" => flags.config_ui = parse_bool(value)?,
                    _ => {} // Ignore unknown keys
                },
                Section::Client => match key {
                    "ssid" => client_ssid = Some(parse_string(value)?),
                    "passphrase" | "password" => client_passphrase = Some(parse_string(value)?),
                    _ => {}
                },
                Section::Ap => match key {
                    "ssid" => ap_ssid = Some(parse_string(value)?),
                    "passphrase" | "password" => ap_passphrase = Some(parse_string(value)?),
                    _ => {}
                },
                Section::Root => {}
            }
        }
    }

    let client = Credentials::new(
        client_ssid.ok_or(ParseError::MissingField("wifi.client.ssid"))?,
        client_passphrase.ok_or(ParseError::MissingField("wifi.client.passphrase"))?,
    )?;
    let ap = Credentials::new(
        ap_ssid.ok_or(ParseError::MissingField("wifi.ap.ssid"))?,
        ap_passphrase.ok_or(ParseError::MissingField("wifi.ap.passphrase"))?,
    )?;

    Ok(WifiConfig::new(client, ap, flags))
}

/// Parse section header like "wifi", "wifi.client" or "wifi.ap"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "wifi" => Ok(Section::Wifi),
        "wifi.client" => Ok(Section::Client),
        "wifi.ap" => Ok(Section::Ap),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}
