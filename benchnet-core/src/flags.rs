//! Build-time feature toggles
//!
//! The original firmware expressed these as preprocessor defines that were
//! commented in or out per project. Modeling them as data keeps the
//! selection auditable and lets the boot path reason about it explicitly.

/// Feature toggles fixed when a firmware image is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeatureFlags {
    /// Ignore stored credentials and boot with the compiled-in defaults
    pub force_default_on_boot: bool,
    /// This image carries the Wi-Fi configuration UI
    pub config_ui: bool,
}

impl FeatureFlags {
    /// Both toggles off
    pub const fn new() -> Self {
        Self {
            force_default_on_boot: false,
            config_ui: false,
        }
    }

    /// Whether stored credential overrides may be consulted at boot
    ///
    /// Overrides can only exist on images that carry the config UI, and the
    /// force-default toggle wins over anything the UI has stored.
    pub const fn overrides_allowed(self) -> bool {
        self.config_ui && !self.force_default_on_boot
    }
}
