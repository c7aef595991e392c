use crate::button::{CHECKOUT_BUTTON_ID, PROCESSING_LABEL};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay before the button's lock is asserted a second time.
pub const DEFAULT_RELOCK_DELAY_MS: u64 = 500;

/// Tunables for a [`SubmissionGuard`](crate::SubmissionGuard).
///
/// Every field has a default, so a TOML document only needs the keys it overrides:
///
/// ```toml
/// button-id = "checkout-btn"
/// processing-label = "Processing..."
/// relock-delay-ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GuardConfig {
    /// Element id of the guarded button.
    pub button_id: String,

    /// Label shown next to the spinner.
    pub processing_label: String,

    /// Milliseconds between the initial lock and the relock.
    pub relock_delay_ms: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            button_id: CHECKOUT_BUTTON_ID.to_string(),
            processing_label: PROCESSING_LABEL.to_string(),
            relock_delay_ms: DEFAULT_RELOCK_DELAY_MS,
        }
    }
}

impl GuardConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would render an unusable button.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.button_id.trim().is_empty() {
            return Err(ConfigError::EmptyButtonId);
        }

        if self.processing_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }

        Ok(())
    }

    /// The relock delay as a [`Duration`].
    pub fn relock_delay(&self) -> Duration {
        Duration::from_millis(self.relock_delay_ms)
    }
}
