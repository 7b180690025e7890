//! Discrete action and observation spaces.

extern crate alloc;

use alloc::vec::Vec;

/// A space of integers `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Discrete {
    /// Number of values in the space.
    pub n: usize,
}

impl Discrete {
    /// Creates a space of `n` values.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// Returns whether `value` lies in the space.
    #[must_use]
    pub const fn contains(&self, value: usize) -> bool {
        value < self.n
    }
}

/// Player totals run from 0 through 31.
pub const PLAYER_TOTAL_SPACE: Discrete = Discrete::new(32);

/// Dealer up cards run from 1 through 10.
pub const DEALER_CARD_SPACE: Discrete = Discrete::new(11);

/// Boolean flags.
pub const FLAG_SPACE: Discrete = Discrete::new(2);

/// Offset count values run from 0 through 64.
pub const COUNT_SPACE: Discrete = Discrete::new(65);

/// Returns the per-field observation space.
///
/// Fields are, in order: player total, dealer up card, usable ace, and with
/// card counting, the count value and the unknown-dealer flag.
#[must_use]
pub fn observation_space(card_counting: bool) -> Vec<Discrete> {
    let mut fields = alloc::vec![PLAYER_TOTAL_SPACE, DEALER_CARD_SPACE, FLAG_SPACE];
    if card_counting {
        fields.extend([COUNT_SPACE, FLAG_SPACE]);
    }
    fields
}
