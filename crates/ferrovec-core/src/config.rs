//! Growth configuration parameters.

use crate::error::VecError;

/// Configuration for geometric capacity growth.
///
/// Controls how far capacity jumps when an append finds the buffer full.
/// Validated by [`GrowthConfig::validate`]; [`Geometric::new`] refuses an
/// invalid config.
///
/// [`Geometric::new`]: crate::growth::Geometric::new
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Multiplier applied to the current capacity on growth.
    ///
    /// Default: 2. Must be at least 2 so that `n` appends from empty cost
    /// O(n) element moves in total.
    pub factor: usize,

    /// Capacity of the first allocation made by an append on an empty
    /// container.
    ///
    /// Default: 1. Must be non-zero.
    pub min_capacity: usize,
}

impl GrowthConfig {
    /// Default growth multiplier.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity of the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Create a config with the default factor and the given first
    /// allocation size.
    pub fn new(min_capacity: usize) -> Self {
        Self {
            factor: Self::DEFAULT_FACTOR,
            min_capacity,
        }
    }

    /// Check that the config guarantees multiplicative growth.
    pub fn validate(&self) -> Result<(), VecError> {
        if self.factor < 2 {
            return Err(VecError::InvalidConfig {
                reason: format!("factor must be >= 2 (got {})", self.factor),
            });
        }
        if self.min_capacity == 0 {
            return Err(VecError::InvalidConfig {
                reason: "min_capacity must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_doubles_from_one() {
        let config = GrowthConfig::default();
        assert_eq!(config.factor, 2);
        assert_eq!(config.min_capacity, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn factor_below_two_is_rejected() {
        let config = GrowthConfig {
            factor: 1,
            min_capacity: 4,
        };
        assert!(matches!(
            config.validate(),
            Err(VecError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn zero_min_capacity_is_rejected() {
        let config = GrowthConfig::new(0);
        assert!(matches!(
            config.validate(),
            Err(VecError::InvalidConfig { .. })
        ));
    }
}
