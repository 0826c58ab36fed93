#![no_main]
use libfuzzer_sys::fuzz_target;
use revadd::digits::{add_reversed, is_palindrome};

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|b| b % 10).collect();
    if digits.is_empty() || digits[0] == 0 {
        return;
    }

    let mut sum = Vec::new();
    let len = add_reversed(&digits, &mut sum);
    assert!(len == digits.len() || len == digits.len() + 1);
    assert_ne!(sum[0], 0);

    // A number plus its reversal is unchanged by reversing the summands.
    let reversed: Vec<u8> = digits.iter().rev().copied().collect();
    if reversed[0] != 0 {
        let mut other = Vec::new();
        add_reversed(&reversed, &mut other);
        assert_eq!(sum, other);
    }
    let _ = is_palindrome(&sum);
});
