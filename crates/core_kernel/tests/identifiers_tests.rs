//! Tests for record identifiers and amounts

use core_kernel::{Amount, CoreError, RecordId};
use proptest::prelude::*;
use test_utils::record_id_strategy;

mod record_id_tests {
    use super::*;

    #[test]
    fn test_ordering_follows_numeric_value() {
        assert!(RecordId::new(2) < RecordId::new(10));
    }

    #[test]
    fn test_u64_conversion() {
        let id = RecordId::from(77);
        let back: u64 = id.into();
        assert_eq!(back, 77);
    }

    #[test]
    fn test_parse_error_names_kind_and_raw() {
        let err = "12a".parse::<RecordId>().unwrap_err();
        assert_eq!(err, CoreError::parse("record id", "12a"));
        assert_eq!(err.to_string(), "Cannot parse record id from '12a'");
    }

    #[test]
    fn test_json_is_transparent() {
        let json = serde_json::to_string(&RecordId::new(5)).unwrap();
        assert_eq!(json, "5");
    }

    proptest! {
        #[test]
        fn ordering_agrees_with_numeric_value(a in record_id_strategy(), b in record_id_strategy()) {
            prop_assert_eq!(a.cmp(&b), a.value().cmp(&b.value()));
        }
    }
}

mod amount_tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let amount: Amount = "1050".parse().unwrap();
        assert_eq!(amount.minor_units(), 1050);
        assert_eq!(amount.to_string(), "1050");
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        assert!("-5".parse::<Amount>().is_err());
    }

    #[test]
    fn test_zero() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn test_sum_of_amounts() {
        let total: Amount = vec![Amount::from_minor(10), Amount::from_minor(32)]
            .into_iter()
            .sum();
        assert_eq!(total, Amount::from_minor(42));
    }

    #[test]
    fn test_saturating_add() {
        let max = Amount::from_minor(u64::MAX);
        assert_eq!(max.saturating_add(Amount::from_minor(5)), max);
    }
}
