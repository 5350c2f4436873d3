//! Capacity growth policies.
//!
//! A [`GrowthPolicy`] maps the current capacity and the capacity an append
//! needs onto the capacity to allocate. It is kept apart from the container
//! so the reallocation path never hard-codes a factor.

use crate::config::GrowthConfig;
use crate::error::VecError;

/// Decides the next capacity when a container runs out of room.
pub trait GrowthPolicy {
    /// Capacity to allocate when `current` slots are full and at least
    /// `required` are needed.
    ///
    /// Implementations must return a value `>= required`. For amortized O(1)
    /// appends the result must also grow multiplicatively in `current`.
    fn next_capacity(&self, current: usize, required: usize) -> usize;
}

/// Multiplicative growth: `max(current * factor, required, min_capacity)`.
///
/// If the multiplication overflows, falls back to exact fit (`required`)
/// and lets the allocator reject the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometric {
    factor: usize,
    min_capacity: usize,
}

impl Geometric {
    /// Build a policy from a validated config.
    pub fn new(config: GrowthConfig) -> Result<Self, VecError> {
        config.validate()?;
        Ok(Self {
            factor: config.factor,
            min_capacity: config.min_capacity,
        })
    }

    /// The growth multiplier.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Capacity of the first allocation from empty.
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }
}

impl Default for Geometric {
    fn default() -> Self {
        Self {
            factor: GrowthConfig::DEFAULT_FACTOR,
            min_capacity: GrowthConfig::DEFAULT_MIN_CAPACITY,
        }
    }
}

impl GrowthPolicy for Geometric {
    fn next_capacity(&self, current: usize, required: usize) -> usize {
        current
            .checked_mul(self.factor)
            .unwrap_or(required)
            .max(required)
            .max(self.min_capacity)
    }
}

impl<P: GrowthPolicy + ?Sized> GrowthPolicy for &P {
    fn next_capacity(&self, current: usize, required: usize) -> usize {
        (**self).next_capacity(current, required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_grows_to_min_capacity() {
        let policy = Geometric::default();
        assert_eq!(policy.next_capacity(0, 1), 1);

        let policy = Geometric::new(GrowthConfig::new(8)).unwrap();
        assert_eq!(policy.next_capacity(0, 1), 8);
    }

    #[test]
    fn default_doubles() {
        let policy = Geometric::default();
        assert_eq!(policy.next_capacity(1, 2), 2);
        assert_eq!(policy.next_capacity(4, 5), 8);
        assert_eq!(policy.next_capacity(1024, 1025), 2048);
    }

    #[test]
    fn large_request_wins_over_factor() {
        let policy = Geometric::default();
        assert_eq!(policy.next_capacity(4, 100), 100);
    }

    #[test]
    fn overflow_falls_back_to_exact_fit() {
        let policy = Geometric::default();
        let current = usize::MAX / 2 + 1;
        assert_eq!(policy.next_capacity(current, current + 1), current + 1);
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = GrowthConfig {
            factor: 1,
            min_capacity: 1,
        };
        assert!(Geometric::new(config).is_err());
    }

    proptest! {
        #[test]
        fn next_capacity_satisfies_request(
            current in 0usize..1_000_000,
            extra in 1usize..1_000,
            factor in 2usize..5,
        ) {
            let policy = Geometric::new(GrowthConfig { factor, min_capacity: 1 }).unwrap();
            let required = current + extra;
            let next = policy.next_capacity(current, required);
            prop_assert!(next >= required);
            prop_assert!(next >= current * factor);
        }
    }
}
