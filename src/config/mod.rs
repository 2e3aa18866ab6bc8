//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `QUOTECRAFT`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use quotecraft::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("GST rate: {}", config.pricing.tax_rate);
//! ```

mod error;
mod pricing;

pub use error::{ConfigError, ConfigValidationError};
pub use pricing::{LaborFactors, PricingConfig};

use serde::Deserialize;

use crate::domain::foundation::TaxRate;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pricing rates and labor multipliers.
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads variables with the
    /// `QUOTECRAFT` prefix. Double underscores separate nesting:
    /// `QUOTECRAFT__PRICING__TAX_RATE=0.12` sets `pricing.tax_rate`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QUOTECRAFT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any rate is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.pricing.validate()
    }

    /// The configured tax rate as a domain value.
    ///
    /// Call [`Self::validate`] first; an out-of-range rate panics here.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::try_new(self.pricing.tax_rate).expect("tax rate validated at load")
    }
}
