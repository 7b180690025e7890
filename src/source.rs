//! Where the environment's cards come from.

extern crate alloc;

use alloc::collections::VecDeque;

use rand::Rng;
use tracing::{debug, trace};

use crate::card::{Rank, draw_infinite, is_valid_rank};
use crate::error::DrawError;
use crate::shoe::Shoe;

/// The pool cards are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pool {
    /// Independent draws with replacement.
    Infinite,
    /// A finite shoe that depletes across episodes.
    Shoe(Shoe),
}

/// Produces card ranks on demand.
///
/// Cards queued with [`CardSource::stack`] are dealt first, in order; after
/// that, cards are drawn at random from the [`Pool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSource {
    /// The underlying pool.
    pub pool: Pool,
    /// Cards dealt before any random draw.
    stacked: VecDeque<Rank>,
}

impl CardSource {
    /// Creates a source drawing from an infinite deck.
    #[must_use]
    pub const fn infinite() -> Self {
        Self {
            pool: Pool::Infinite,
            stacked: VecDeque::new(),
        }
    }

    /// Creates a source drawing from a fresh shoe.
    #[must_use]
    pub const fn shoe() -> Self {
        Self {
            pool: Pool::Shoe(Shoe::new()),
            stacked: VecDeque::new(),
        }
    }

    /// Returns the shoe, if this source is shoe-backed.
    #[must_use]
    pub const fn as_shoe(&self) -> Option<&Shoe> {
        match &self.pool {
            Pool::Shoe(shoe) => Some(shoe),
            Pool::Infinite => None,
        }
    }

    /// Returns the shoe mutably, if this source is shoe-backed.
    pub const fn as_shoe_mut(&mut self) -> Option<&mut Shoe> {
        match &mut self.pool {
            Pool::Shoe(shoe) => Some(shoe),
            Pool::Infinite => None,
        }
    }

    /// Queues cards to be dealt before any random draw.
    pub fn stack(&mut self, cards: &[Rank]) {
        self.stacked.extend(cards.iter().copied());
    }

    /// Returns the number of stacked cards not yet dealt.
    #[must_use]
    pub fn stacked_len(&self) -> usize {
        self.stacked.len()
    }

    /// Reshuffles the shoe if it has fallen below `threshold` cards.
    ///
    /// Returns `true` if a reshuffle was performed. Infinite sources never
    /// reshuffle.
    pub fn check_and_reshuffle(&mut self, threshold: usize) -> bool {
        let Pool::Shoe(shoe) = &mut self.pool else {
            return false;
        };

        if !shoe.needs_reshuffle(threshold) {
            return false;
        }

        debug!(remaining = shoe.deck_count(), threshold, "reshuffling shoe");
        shoe.reset();
        true
    }

    /// Draws a card.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is exhausted, or if a stacked card is
    /// invalid or no longer present in the shoe.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Rank, DrawError> {
        let rank = if let Some(rank) = self.stacked.pop_front() {
            match &mut self.pool {
                Pool::Shoe(shoe) => shoe.take(rank)?,
                Pool::Infinite if !is_valid_rank(rank) => {
                    return Err(DrawError::InvalidRank(rank));
                }
                Pool::Infinite => {}
            }
            rank
        } else {
            match &mut self.pool {
                Pool::Shoe(shoe) => shoe.draw(rng)?,
                Pool::Infinite => draw_infinite(rng),
            }
        };

        trace!(rank, "drew card");
        Ok(rank)
    }
}
