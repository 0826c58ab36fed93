use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;
use revadd::digits::{add_reversed, is_palindrome};
use revadd::{search, Digits, Outcome};

fn to_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|c| c - b'0').collect()
}

fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

fn reverse(n: &BigUint) -> BigUint {
    let reversed: String = n.to_str_radix(10).chars().rev().collect();
    BigUint::from_str_radix(&reversed, 10).unwrap()
}

fn is_palindrome_reference(n: &BigUint) -> bool {
    let s = n.to_str_radix(10);
    s.chars().eq(s.chars().rev())
}

// Reverse-and-add over a general purpose bignum.
fn reference_search(seed: u64, max_iterations: u32) -> Option<(u32, String)> {
    let mut n = BigUint::from(seed);
    for i in 1..=max_iterations {
        n = &n + reverse(&n);
        if is_palindrome_reference(&n) {
            return Some((i, n.to_str_radix(10)));
        }
    }
    None
}

proptest! {
    #[test]
    fn prop_add_reversed_matches_bignum(s in "[1-9][0-9]{0,499}") {
        let digits = to_digits(&s);
        let mut out = Vec::new();
        let len = add_reversed(&digits, &mut out);

        let n = BigUint::from_str_radix(&s, 10).unwrap();
        let expected = &n + reverse(&n);

        prop_assert_eq!(len, out.len());
        prop_assert_eq!(to_string(&out), expected.to_str_radix(10));
    }

    #[test]
    fn prop_add_reversed_length_grows_by_at_most_one(s in "[1-9][0-9]{0,499}") {
        let digits = to_digits(&s);
        let mut out = Vec::new();
        let len = add_reversed(&digits, &mut out);

        prop_assert!(len == digits.len() || len == digits.len() + 1);
        prop_assert_ne!(out[0], 0);
    }

    #[test]
    fn prop_is_palindrome_agrees_with_reversal(digits in prop::collection::vec(0u8..10, 1..200)) {
        let reversed: Vec<u8> = digits.iter().rev().copied().collect();
        prop_assert_eq!(is_palindrome(&digits), digits == reversed);
    }

    #[test]
    fn prop_mirrored_arrays_are_palindromes(half in prop::collection::vec(0u8..10, 0..100), middle in prop::option::of(0u8..10)) {
        let mut digits = half.clone();
        digits.extend(middle);
        digits.extend(half.iter().rev());
        prop_assume!(!digits.is_empty());
        prop_assert!(is_palindrome(&digits));
    }

    #[test]
    fn prop_search_matches_reference(seed in 1u64..100_000) {
        let expected = reference_search(seed, 60);
        let outcome = search(&seed.to_string(), 60).unwrap();
        match (outcome, expected) {
            (Outcome::Found { iterations, value }, Some((i, v))) => {
                prop_assert_eq!(iterations, i);
                prop_assert_eq!(value.to_string(), v);
            }
            (Outcome::Exhausted, None) => {}
            (outcome, expected) => {
                prop_assert!(false, "seed {}: {:?} vs {:?}", seed, outcome, expected);
            }
        }
    }
}

#[test]
fn test_single_digit_seeds_match_reference() {
    for seed in 1..=9u64 {
        let expected = reference_search(seed, 10).unwrap();
        let outcome = search(&seed.to_string(), 10).unwrap();
        assert_eq!(outcome.iterations(), Some(expected.0));
        assert_eq!(outcome.value().unwrap().to_string(), expected.1);
    }
}

#[test]
fn test_digits_add_reversed_matches_reference() {
    let seed = "1186060307891929990";
    let mut digits: Digits = seed.parse().unwrap();
    let mut n = BigUint::from_str_radix(seed, 10).unwrap();
    for _ in 0..100 {
        digits = digits.add_reversed();
        n = &n + reverse(&n);
        assert_eq!(digits.to_string(), n.to_str_radix(10));
    }
}
