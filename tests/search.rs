use revadd::{search, search_with, Capacity, Outcome, Search};

fn found(outcome: &Outcome) -> (u32, String) {
    match outcome {
        Outcome::Found { iterations, value } => (*iterations, value.to_string()),
        other => panic!("expected a palindrome, got {:?}", other),
    }
}

#[test]
fn test_89() {
    let outcome = search("89", 30).unwrap();
    assert_eq!(found(&outcome), (24, "8813200023188".to_owned()));
}

#[test]
fn test_89_exact_budget() {
    assert!(search("89", 24).unwrap().is_found());
    assert_eq!(search("89", 23).unwrap(), Outcome::Exhausted);
}

#[test]
fn test_98_shares_trajectory_with_89() {
    assert_eq!(search("98", 30).unwrap(), search("89", 30).unwrap());
}

#[test]
fn test_196_exhausted() {
    assert_eq!(search("196", 1000).unwrap(), Outcome::Exhausted);
    assert_eq!(
        search_with("196", 1000, Capacity::fixed()).unwrap(),
        Outcome::Exhausted
    );
}

#[test]
fn test_single_digit_seeds() {
    let expected = [
        ("1", 1, "2"),
        ("2", 1, "4"),
        ("3", 1, "6"),
        ("4", 1, "8"),
        ("5", 2, "11"),
        ("6", 2, "33"),
        ("7", 2, "55"),
        ("8", 2, "77"),
        ("9", 2, "99"),
    ];
    for (seed, iterations, value) in expected {
        let outcome = search(seed, 5).unwrap();
        assert_eq!(found(&outcome), (iterations, value.to_owned()), "seed {}", seed);
    }
}

#[test]
fn test_palindromic_seed_still_steps() {
    // The seed itself is never tested, only the sums.
    assert_eq!(found(&search("121", 5).unwrap()), (1, "242".to_owned()));
    assert_eq!(found(&search("10", 5).unwrap()), (1, "11".to_owned()));
}

#[test]
fn test_leading_zeros_are_dropped() {
    assert_eq!(search("0089", 30).unwrap(), search("89", 30).unwrap());
    assert_eq!(found(&search("0010", 5).unwrap()), (1, "11".to_owned()));
}

#[test]
fn test_delay_records() {
    let outcome = search("1186060307891929990", 300).unwrap();
    assert_eq!(outcome.iterations(), Some(261));
    assert_eq!(outcome.value().unwrap().len(), 119);
    assert!(outcome.value().unwrap().is_palindrome());

    let outcome = search("1000206827388999999095750", 400).unwrap();
    assert_eq!(outcome.iterations(), Some(293));
}

#[test]
fn test_fixed_seed_overflow() {
    let max = Capacity::fixed().max_seed_digits();
    assert_eq!(max, Capacity::FIXED_SLOTS - 1);

    let fits = "1".repeat(max);
    let outcome = search_with(&fits, 10, Capacity::fixed()).unwrap();
    assert_eq!(found(&outcome), (1, "2".repeat(max)));

    let too_long = "1".repeat(max + 1);
    assert_eq!(
        search_with(&too_long, 10, Capacity::fixed()).unwrap(),
        Outcome::CapacityOverflow
    );
}

#[test]
fn test_seed_overflow_keeps_seed() {
    let mut search = Search::new("00123456", 10, Capacity::Fixed(5)).unwrap();
    assert!(search.is_finished());
    assert_eq!(search.current(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(search.slots(), 0);
    assert_eq!(search.step(), Some(Outcome::CapacityOverflow));
    assert_eq!(search.iterations(), 0);
}

#[test]
fn test_unallocatable_capacity_overflows() {
    assert_eq!(
        search_with("89", 30, Capacity::Fixed(usize::MAX)).unwrap(),
        Outcome::CapacityOverflow
    );

    let mut search = Search::new("89", 30, Capacity::Fixed(usize::MAX)).unwrap();
    assert!(search.is_finished());
    assert_eq!(search.current(), &[8, 9]);
    assert_eq!(search.run(30), Outcome::CapacityOverflow);

    let unbounded = Capacity::Dynamic {
        ceiling: usize::MAX,
    };
    assert_eq!(
        search_with("89", 30, unbounded).unwrap(),
        revadd::search("89", 30).unwrap()
    );
}

#[test]
fn test_fixed_overflow_mid_search() {
    // 89, 187, 968, 1837, 9218, 17347: five digits fill all five slots.
    let mut search = Search::new("89", 30, Capacity::Fixed(5)).unwrap();
    assert_eq!(search.run(30), Outcome::CapacityOverflow);
    assert_eq!(search.iterations(), 5);
    assert_eq!(search.current(), &[1, 7, 3, 4, 7]);
    assert!(search.is_finished());
}

#[test]
fn test_dynamic_ceiling_overflow() {
    let capacity = Capacity::Dynamic { ceiling: 8 };
    assert_eq!(capacity.slots(2, 30), 8);
    assert_eq!(search_with("89", 30, capacity).unwrap(), Outcome::CapacityOverflow);
    assert_eq!(
        search_with("12345678", 30, capacity).unwrap(),
        Outcome::CapacityOverflow
    );
}

#[test]
fn test_dynamic_slots() {
    let search = Search::new("196", 1000, Capacity::default()).unwrap();
    assert_eq!(search.slots(), 3 + 1000 + Capacity::MARGIN);

    let capacity = Capacity::dynamic();
    assert_eq!(capacity.slots(10, u32::MAX), Capacity::DYNAMIC_CEILING);
    assert_eq!(capacity.slots(usize::MAX, 1), Capacity::DYNAMIC_CEILING);
}

#[test]
fn test_resume_matches_single_run() {
    let mut search = Search::new("89", 30, Capacity::default()).unwrap();
    for _ in 0..3 {
        assert_eq!(search.run(5), Outcome::Exhausted);
    }
    assert_eq!(search.iterations(), 15);
    assert_eq!(search.current(), &[1, 3, 1, 7, 5, 4, 4, 8, 2, 2]);

    let resumed = search.run(15);
    assert_eq!(resumed, revadd::search("89", 30).unwrap());
    assert_eq!(search.iterations(), 24);
}

#[test]
fn test_terminal_outcome_is_sticky() {
    let mut search = Search::new("5", 10, Capacity::default()).unwrap();
    assert_eq!(search.step(), None);
    let outcome = search.step().unwrap();
    assert_eq!(found(&outcome), (2, "11".to_owned()));

    assert_eq!(search.step(), Some(outcome.clone()));
    assert_eq!(search.run(10), outcome);
    assert_eq!(search.run(0), outcome);
    assert_eq!(search.iterations(), 2);
}

#[test]
fn test_run_zero_budget() {
    let mut search = Search::new("196", 10, Capacity::default()).unwrap();
    assert_eq!(search.run(0), Outcome::Exhausted);
    assert_eq!(search.iterations(), 0);
    assert_eq!(search.current(), &[1, 9, 6]);
}

#[test]
fn test_buffers_are_not_reallocated() {
    let mut search = Search::new("196", 500, Capacity::default()).unwrap();
    let slots = search.slots();
    let mut pointers = vec![search.current().as_ptr()];
    search.step();
    pointers.push(search.current().as_ptr());

    assert_eq!(search.run(498), Outcome::Exhausted);
    let last = search.current().as_ptr();
    assert!(pointers.contains(&last));
    assert!(search.current().len() < slots);
}
