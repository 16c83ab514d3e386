//! Unit tests for discount rates
//!
//! Covers construction, percentage formatting, and the linearity of
//! discount application across positive, zero, and negative amounts.

use core_kernel::{CoreError, DiscountRate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_accepts_fraction_in_range() {
        let rate = DiscountRate::new(dec!(0.15)).unwrap();
        assert_eq!(rate.fraction(), dec!(0.15));
    }

    #[test]
    fn test_new_rejects_rate_above_one() {
        let result = DiscountRate::new(dec!(1.5));
        assert_eq!(result, Err(CoreError::InvalidRate(dec!(1.5))));
    }

    #[test]
    fn test_new_rejects_negative_rate() {
        assert!(matches!(
            DiscountRate::new(dec!(-0.1)),
            Err(CoreError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_default_is_zero() {
        assert!(DiscountRate::default().is_zero());
        assert_eq!(DiscountRate::default(), DiscountRate::zero());
    }

    #[test]
    fn test_from_percent_matches_fraction() {
        assert_eq!(DiscountRate::from_percent(25), DiscountRate::new(dec!(0.25)).unwrap());
    }
}

mod application {
    use super::*;

    #[test]
    fn test_apply_on_positive_amount() {
        let rate = DiscountRate::from_percent(15);
        assert_eq!(rate.apply(dec!(100)), dec!(15));
        assert_eq!(rate.apply(dec!(1000.00)), dec!(150.00));
    }

    #[test]
    fn test_apply_on_zero_amount() {
        assert_eq!(DiscountRate::from_percent(25).apply(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_apply_on_negative_amount_scales() {
        assert_eq!(DiscountRate::from_percent(25).apply(dec!(-200)), dec!(-50));
    }

    #[test]
    fn test_zero_rate_never_discounts() {
        assert_eq!(DiscountRate::zero().apply(dec!(12345.67)), Decimal::ZERO);
    }

    #[test]
    fn test_net_of_subtracts_discount() {
        assert_eq!(DiscountRate::from_percent(25).net_of(dec!(100)), dec!(75));
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_percent_is_normalized() {
        assert_eq!(DiscountRate::from_percent(15).percent(), dec!(15));
        assert_eq!(DiscountRate::from_percent(15).percent().to_string(), "15");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiscountRate::from_percent(15)), "15%");
    }

    #[test]
    fn test_serializes_as_fraction() {
        let json = serde_json::to_string(&DiscountRate::from_percent(25)).unwrap();
        let back: DiscountRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DiscountRate::from_percent(25));
    }
}

proptest! {
    #[test]
    fn prop_apply_is_linear(mantissa in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..4u32) {
        let amount = Decimal::new(mantissa, scale);
        let rate = DiscountRate::from_percent(15);
        prop_assert_eq!(rate.apply(amount), amount * dec!(0.15));
        prop_assert_eq!(rate.apply(amount) + rate.apply(amount), rate.apply(amount + amount));
    }
}
