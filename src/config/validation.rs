//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::Limits;
use super::Config;
use crate::bill::AMOUNT_DECIMALS;

impl Limits {
    /// Validate limits
    pub fn validate(&self) -> Result<()> {
        if self.max_price <= rust_decimal::Decimal::ZERO {
            anyhow::bail!(
                "limits.max_price must be greater than 0, got {}",
                self.max_price
            );
        }
        if self.max_price.normalize().scale() > AMOUNT_DECIMALS {
            anyhow::bail!(
                "limits.max_price must have at most {} decimal places, got {}",
                AMOUNT_DECIMALS,
                self.max_price
            );
        }
        if self.max_pieces == 0 {
            anyhow::bail!("limits.max_pieces must be greater than 0");
        }
        Ok(())
    }
}

impl Config {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;

        if self.sentinel.trim().is_empty() {
            anyhow::bail!("sentinel must not be blank");
        }
        if self.sentinel.trim() != self.sentinel {
            anyhow::bail!(
                "sentinel must not have surrounding whitespace, got {:?}",
                self.sentinel
            );
        }
        Ok(())
    }
}
