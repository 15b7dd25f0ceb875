use proptest::prelude::*;

use mintgate_types::{Address, Amount, Coin, Denom};

proptest! {
    /// Amount JSON encoding preserves every u128 exactly.
    #[test]
    fn amount_json_is_lossless(raw in any::<u128>()) {
        let amt = Amount::new(raw);
        let json = serde_json::to_string(&amt).unwrap();
        let back: Amount = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, amt);
    }

    /// checked_add agrees with u128 checked arithmetic.
    #[test]
    fn amount_checked_add_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        let sum = Amount::new(a).checked_add(Amount::new(b)).map(|s| s.raw());
        prop_assert_eq!(sum, a.checked_add(b));
    }

    /// Display followed by parse yields the same coin for factory denoms.
    #[test]
    fn coin_text_form_parses_back(raw in any::<u64>(), sub in "[a-z]{1,12}") {
        let denom = Denom::factory(&Address::new("juno1creator"), &sub).unwrap();
        let coin = Coin::new(raw as u128, denom);
        let parsed: Coin = coin.to_string().parse().unwrap();
        prop_assert_eq!(parsed, coin);
    }

    /// Any string containing whitespace is rejected as an address.
    #[test]
    fn whitespace_addresses_are_rejected(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let raw = format!("{a} {b}");
        prop_assert!(Address::parse(raw).is_err());
    }
}
