use std::fmt;

use crate::models::ServiceTier;

/// Visits in a May–October season, used for the "per visit" hint.
pub const SEASON_VISITS: u64 = 24;

/// Early-bird discount as a fraction of 100.
pub const EARLY_BIRD_PERCENT_OFF: u64 = 10;

/// A dollar amount kept in cents so the 10% discount stays exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_dollars(dollars: u64) -> Self {
        Money(dollars * 100)
    }

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn is_whole_dollars(self) -> bool {
        self.0 % 100 == 0
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

/// Whole amounts print without decimals ("175"), anything else with two ("175.50").
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole_dollars() {
            write!(f, "{}", self.0 / 100)
        } else {
            write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
        }
    }
}

pub fn apply_discount(amount: Money, early_bird: bool) -> Money {
    if !early_bird {
        return amount;
    }
    let kept = 100 - EARLY_BIRD_PERCENT_OFF;
    // round half up to the cent
    Money((amount.0 * kept + 50) / 100)
}

/// Everything a tier card shows for the current toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierQuote {
    pub base: Money,
    pub leaf_option: Money,
    pub total: Money,
    pub per_visit_dollars: u64,
}

pub fn quote(tier: &ServiceTier, with_leaves: bool, early_bird: bool) -> TierQuote {
    let base = apply_discount(tier.monthly_price, early_bird);
    let leaf_option = apply_discount(tier.leaf_option_price, early_bird);
    let total = if with_leaves { base + leaf_option } else { base };

    TierQuote {
        base,
        leaf_option,
        total,
        per_visit_dollars: per_visit(base, tier.billing_months),
    }
}

pub fn monthly_total(tier: &ServiceTier, with_leaves: bool, early_bird: bool) -> Money {
    quote(tier, with_leaves, early_bird).total
}

/// Whole-dollar cost of one visit over the season, rounded half up.
/// Only a display hint, never billed.
pub fn per_visit(monthly: Money, billing_months: u32) -> u64 {
    let season_cents = monthly.0 * u64::from(billing_months);
    let divisor = SEASON_VISITS * 100;
    (season_cents + divisor / 2) / divisor
}

pub fn leaves_only_price(tier: &ServiceTier, early_bird: bool) -> Money {
    apply_discount(tier.leaves_only_price, early_bird)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{tier, PropertyType, PRICING_TIERS};
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Money::from_dollars(175), "175")]
    #[case(Money::from_cents(17_550), "175.50")]
    #[case(Money::from_cents(22_050), "220.50")]
    #[case(Money::from_cents(4_005), "40.05")]
    #[case(Money::ZERO, "0")]
    fn money_display(#[case] amount: Money, #[case] expected: &str) {
        assert_eq!(amount.to_string(), expected);
    }

    #[test]
    fn jumele_regular_price() {
        let q = quote(tier(PropertyType::Jumele), false, false);
        assert_eq!(q.total.to_string(), "175");
        assert_eq!(q.per_visit_dollars, 44);
    }

    #[test]
    fn detache_early_bird_with_leaves() {
        let q = quote(tier(PropertyType::Detache), true, true);
        assert_eq!(q.base, Money::from_cents(17_550));
        assert_eq!(q.leaf_option, Money::from_dollars(45));
        assert_eq!(q.total.to_string(), "220.50");
    }

    #[rstest]
    #[case(PropertyType::Jumele, false, "175")]
    #[case(PropertyType::Jumele, true, "157.50")]
    #[case(PropertyType::Detache, false, "195")]
    #[case(PropertyType::Detache, true, "175.50")]
    fn displayed_price_without_add_on(
        #[case] id: PropertyType,
        #[case] early_bird: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(monthly_total(tier(id), false, early_bird).to_string(), expected);
    }

    #[rstest]
    #[case(PropertyType::Jumele, false, "275")]
    #[case(PropertyType::Jumele, true, "247.50")]
    #[case(PropertyType::Detache, false, "350")]
    #[case(PropertyType::Detache, true, "315")]
    fn leaves_only_follows_the_same_discount(
        #[case] id: PropertyType,
        #[case] early_bird: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(leaves_only_price(tier(id), early_bird).to_string(), expected);
    }

    #[test]
    fn per_visit_uses_discounted_base_only() {
        // 157.50 * 6 / 24 = 39.375
        let q = quote(tier(PropertyType::Jumele), true, true);
        assert_eq!(q.per_visit_dollars, 39);
        // 195 * 6 / 24 = 48.75
        assert_eq!(quote(tier(PropertyType::Detache), true, false).per_visit_dollars, 49);
    }

    #[test]
    fn per_visit_rounds_half_up() {
        // 2 * 6 / 24 = 0.5
        assert_eq!(per_visit(Money::from_dollars(2), 6), 1);
    }

    proptest! {
        #[test]
        fn discount_is_ninety_percent_to_the_cent(cents in 0u64..10_000_000) {
            let discounted = apply_discount(Money::from_cents(cents), true).cents();
            let exact_times_ten = cents * 9;
            // within half a cent of the exact value
            prop_assert!((discounted * 10).abs_diff(exact_times_ten) <= 5);
            prop_assert_eq!(apply_discount(Money::from_cents(cents), false).cents(), cents);
        }

        #[test]
        fn add_on_discount_matches_base_discount(early_bird in any::<bool>(), with_leaves in any::<bool>()) {
            for t in &PRICING_TIERS {
                let q = quote(t, with_leaves, early_bird);
                let expected = apply_discount(t.monthly_price, early_bird)
                    + if with_leaves { apply_discount(t.leaf_option_price, early_bird) } else { Money::ZERO };
                prop_assert_eq!(q.total, expected);
            }
        }
    }
}
