//! Positive quantities.

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};

/// Strictly positive quantity of one inventory entry (value object).
///
/// Backed by `NonZeroU32`, so "an existing key always has a positive
/// quantity" holds at the type level: a zero quantity is unrepresentable,
/// and removal deletes the whole entry instead of decrementing to zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Quantity of exactly one.
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Validate a raw amount. Zero is rejected as invalid input.
    pub fn new(raw: u32) -> InventoryResult<Self> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or_else(|| InventoryError::invalid_input("quantity must be a positive integer"))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Merge-by-sum addition; `None` when the sum would overflow.
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.get()).map(Self)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        let err = Quantity::new(0).unwrap_err();
        match err {
            InventoryError::InvalidInput(_) => {}
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn positive_amounts_are_accepted() {
        assert_eq!(Quantity::new(5).unwrap().get(), 5);
        assert_eq!(Quantity::ONE.get(), 1);
    }

    #[test]
    fn checked_add_sums() {
        let five = Quantity::new(5).unwrap();
        let three = Quantity::new(3).unwrap();
        assert_eq!(five.checked_add(three).unwrap().get(), 8);
    }

    #[test]
    fn checked_add_detects_overflow() {
        let max = Quantity::new(u32::MAX).unwrap();
        assert!(max.checked_add(Quantity::ONE).is_none());
    }

    #[test]
    fn deserialize_rejects_zero() {
        let result: Result<Quantity, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: construction succeeds exactly for non-zero amounts.
            #[test]
            fn new_accepts_exactly_the_positives(raw in any::<u32>()) {
                match Quantity::new(raw) {
                    Ok(q) => prop_assert_eq!(q.get(), raw),
                    Err(_) => prop_assert_eq!(raw, 0),
                }
            }

            /// Property: checked_add agrees with u64 arithmetic.
            #[test]
            fn checked_add_matches_wide_sum(a in 1u32.., b in 1u32..) {
                let qa = Quantity::new(a).unwrap();
                let qb = Quantity::new(b).unwrap();
                let wide = u64::from(a) + u64::from(b);
                match qa.checked_add(qb) {
                    Some(sum) => prop_assert_eq!(u64::from(sum.get()), wide),
                    None => prop_assert!(wide > u64::from(u32::MAX)),
                }
            }
        }
    }
}
