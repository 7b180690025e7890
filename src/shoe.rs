//! The finite, depleting shoe used by card-counting environments.

use rand::Rng;

use crate::card::{DECK_COMPOSITION, DECK_SIZE, RANK_COUNT, Rank, count_weight, is_valid_rank};
use crate::error::DrawError;

/// Lowest running count a full shoe can reach.
///
/// The reported [`Shoe::deck_value`] is offset by this amount so it is
/// non-negative.
pub const MIN_RUNNING_COUNT: i32 = -32;

/// Number of cards below which the shoe is reshuffled by default.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 15;

/// A finite pool of cards shared across consecutive episodes.
///
/// The shoe tracks how many cards of each rank remain, the total remaining,
/// and a running count updated with [`count_weight`] for every drawn card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Remaining cards per rank, indexed by `rank - 1`.
    counts: [u8; RANK_COUNT],
    /// Total remaining cards.
    remaining: usize,
    /// Running count of the cards drawn so far.
    running_count: i32,
}

impl Shoe {
    /// Creates a fresh shoe holding one full deck composition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: DECK_COMPOSITION,
            remaining: DECK_SIZE,
            running_count: 0,
        }
    }

    /// Creates a shoe with an explicit per-rank composition.
    ///
    /// The running count starts at zero.
    #[must_use]
    pub fn with_counts(counts: [u8; RANK_COUNT]) -> Self {
        Self {
            counts,
            remaining: counts.iter().map(|&c| c as usize).sum(),
            running_count: 0,
        }
    }

    /// Restores the full composition and zeroes the running count.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns whether the shoe holds fewer than `threshold` cards.
    #[must_use]
    pub const fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.remaining < threshold
    }

    /// Draws a card.
    ///
    /// The rank is picked uniformly among the ranks that still have cards
    /// left, regardless of how many of each remain.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::ShoeExhausted`] if no cards remain.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Rank, DrawError> {
        let mut available = [0 as Rank; RANK_COUNT];
        let mut len = 0;
        for (rank, &count) in (1..).zip(self.counts.iter()) {
            if count > 0 {
                available[len] = rank;
                len += 1;
            }
        }

        if len == 0 {
            return Err(DrawError::ShoeExhausted);
        }

        let rank = available[rng.random_range(0..len)];
        self.take(rank)?;
        Ok(rank)
    }

    /// Removes one card of the given rank from the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidRank`] for ranks outside `1..=10` and
    /// [`DrawError::RankUnavailable`] when no card of that rank remains.
    pub fn take(&mut self, rank: Rank) -> Result<(), DrawError> {
        if !is_valid_rank(rank) {
            return Err(DrawError::InvalidRank(rank));
        }

        let count = &mut self.counts[usize::from(rank - 1)];
        if *count == 0 {
            return Err(DrawError::RankUnavailable(rank));
        }

        *count -= 1;
        self.remaining -= 1;
        self.running_count -= count_weight(rank);
        Ok(())
    }

    /// Returns the number of remaining cards of `rank`.
    #[must_use]
    pub fn remaining_of(&self, rank: Rank) -> u8 {
        if is_valid_rank(rank) {
            self.counts[usize::from(rank - 1)]
        } else {
            0
        }
    }

    /// Returns the remaining cards per rank, indexed by `rank - 1`.
    #[must_use]
    pub const fn counts(&self) -> &[u8; RANK_COUNT] {
        &self.counts
    }

    /// Returns the raw running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns the running count offset to be non-negative.
    #[must_use]
    pub const fn deck_value(&self) -> i32 {
        self.running_count - MIN_RUNNING_COUNT
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub const fn deck_count(&self) -> usize {
        self.remaining
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
