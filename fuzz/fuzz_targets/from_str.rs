#![no_main]
use libfuzzer_sys::fuzz_target;
use revadd::{Capacity, Outcome};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(outcome) = revadd::search_with(s, 64, Capacity::Fixed(256)) {
            if let Outcome::Found { iterations, value } = outcome {
                assert!(iterations >= 1 && iterations <= 64);
                assert!(value.is_palindrome());
            }
        }
    }
});
