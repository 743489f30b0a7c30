//! Build script for benchnet-loader
//!
//! Validates the factory profile TOML files at compile time. A firmware
//! image must never ship with a missing or malformed credential, so the
//! build fails loudly instead of defaulting to an empty string.

use std::fs;
use std::path::Path;

const PROFILES: &[&str] = &["profiles/batt_tester.toml", "profiles/temp_logger.toml"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    for profile in PROFILES {
        println!("cargo:rerun-if-changed={}", profile);
        validate_profile(Path::new(profile));
    }
}

/// Validate one factory profile file
fn validate_profile(path: &Path) {
    if !path.exists() {
        fail(path, &[format!("file not found: {}", path.display())]);
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            fail(path, &[format!("failed to read: {}", e)]);
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            fail(path, &[format!("invalid TOML syntax: {}", e)]);
        }
    };

    let mut errors = Vec::new();

    let wifi = match config.get("wifi") {
        Some(toml::Value::Table(t)) => t,
        _ => {
            fail(path, &["missing [wifi] section".to_string()]);
        }
    };

    for flag in ["force_default_on_boot", "config_ui"] {
        match wifi.get(flag) {
            Some(toml::Value::Boolean(_)) => {}
            Some(_) => errors.push(format!("[wifi] {} must be a boolean", flag)),
            None => errors.push(format!("[wifi] missing '{}'", flag)),
        }
    }

    validate_credentials(wifi, "client", &mut errors);
    validate_credentials(wifi, "ap", &mut errors);

    if !errors.is_empty() {
        fail(path, &errors);
    }
}

/// Validate one [wifi.client] / [wifi.ap] credential table
fn validate_credentials(wifi: &toml::value::Table, role: &str, errors: &mut Vec<String>) {
    let table = match wifi.get(role) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[wifi.{}] must be a table", role));
            return;
        }
        None => {
            errors.push(format!("missing [wifi.{}] section", role));
            return;
        }
    };

    match table.get("ssid") {
        Some(toml::Value::String(ssid)) => {
            if ssid.is_empty() {
                errors.push(format!("[wifi.{}] ssid must not be empty", role));
            }
            if ssid.len() > 32 {
                errors.push(format!("[wifi.{}] ssid exceeds 32 bytes", role));
            }
            if !ssid.is_ascii() {
                errors.push(format!("[wifi.{}] ssid must be ASCII", role));
            }
        }
        Some(_) => errors.push(format!("[wifi.{}] ssid must be a string", role)),
        None => errors.push(format!("[wifi.{}] missing 'ssid'", role)),
    }

    match table.get("passphrase") {
        Some(toml::Value::String(passphrase)) => {
            if passphrase.len() < 8 || passphrase.len() > 63 {
                errors.push(format!("[wifi.{}] passphrase must be 8-63 bytes", role));
            }
            if !passphrase.is_ascii() {
                errors.push(format!("[wifi.{}] passphrase must be ASCII", role));
            }
        }
        Some(_) => errors.push(format!("[wifi.{}] passphrase must be a string", role)),
        None => errors.push(format!("[wifi.{}] missing 'passphrase'", role)),
    }
}

/// Abort the build with a readable error box
fn fail(path: &Path, errors: &[String]) -> ! {
    let location = path.display().to_string();
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid factory Wi-Fi profile                            ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        ║  {:<64} ║\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        location,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
