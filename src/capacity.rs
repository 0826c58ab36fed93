//! How many digit slots a search may use.

/// Buffer sizing policy for a search.
///
/// Every reverse-and-add step writes `len + 1` digits before it knows
/// whether the top position carries, so a number of `n` digits needs `n + 1`
/// slots to be stepped. The policy decides the slot count once, when the
/// search starts, and both working buffers are allocated with it up front.
///
/// ```
/// use revadd::Capacity;
///
/// // 3-digit seed, 1000 iterations: 3 + 1000 + 10 slots.
/// assert_eq!(Capacity::default().slots(3, 1000), 1013);
///
/// // Fixed buffers ignore the seed and the budget.
/// assert_eq!(Capacity::Fixed(64).slots(3, 1000), 64);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Capacity {
    /// A constant number of slots per buffer.
    ///
    /// The largest accepted seed has one digit fewer than the slot count.
    /// Seeds or intermediate values that do not fit end the search with
    /// [`Outcome::CapacityOverflow`](crate::Outcome::CapacityOverflow).
    Fixed(usize),

    /// Slots computed from the seed length and the iteration budget.
    ///
    /// Each step grows a number by at most one digit, so
    /// `seed_len + max_iterations + MARGIN` slots always suffice. The result
    /// is clamped to `ceiling` to bound memory for huge budgets; seeds that
    /// would need more are reported as overflow, not treated as
    /// mathematically excluded.
    Dynamic {
        /// Hard upper bound on slots per buffer.
        ceiling: usize,
    },
}

impl Capacity {
    /// Slot count of [`Capacity::fixed()`].
    pub const FIXED_SLOTS: usize = 4096;

    /// Ceiling of [`Capacity::dynamic()`].
    pub const DYNAMIC_CEILING: usize = 1_000_000;

    /// Extra slots the dynamic policy adds on top of the growth bound.
    pub const MARGIN: usize = 10;

    /// Fixed policy with [`Capacity::FIXED_SLOTS`] slots.
    pub const fn fixed() -> Self {
        Capacity::Fixed(Capacity::FIXED_SLOTS)
    }

    /// Dynamic policy clamped at [`Capacity::DYNAMIC_CEILING`].
    pub const fn dynamic() -> Self {
        Capacity::Dynamic {
            ceiling: Capacity::DYNAMIC_CEILING,
        }
    }

    /// Number of slots per buffer for a seed of `seed_len` digits searched
    /// for at most `max_iterations` steps.
    pub fn slots(&self, seed_len: usize, max_iterations: u32) -> usize {
        match *self {
            Capacity::Fixed(slots) => slots,
            Capacity::Dynamic { ceiling } => seed_len
                .saturating_add(max_iterations as usize)
                .saturating_add(Capacity::MARGIN)
                .min(ceiling),
        }
    }

    /// Largest seed, in canonical digits, that this policy can step at all.
    pub fn max_seed_digits(&self) -> usize {
        match *self {
            Capacity::Fixed(slots) => slots.saturating_sub(1),
            Capacity::Dynamic { ceiling } => ceiling.saturating_sub(1),
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::dynamic()
    }
}
