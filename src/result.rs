//! Episode outcomes and rewards.

use crate::hand::{DealerHand, Hand, compare};

/// How a finished episode ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player scored higher than the dealer, or the dealer busted.
    Win,
    /// Player won with a natural blackjack and naturals pay extra.
    Natural,
    /// Equal scores.
    Push,
    /// Dealer scored higher.
    Lose,
    /// Player went over 21.
    Bust,
}

impl Outcome {
    /// Settles a player hand that stood against the dealer's final hand.
    ///
    /// A win with a natural becomes [`Outcome::Natural`] only when
    /// `natural_pays` is set.
    #[must_use]
    pub fn settle(player: &Hand, dealer: &DealerHand, natural_pays: bool) -> Self {
        match compare(player.score(), dealer.score()) {
            1 if natural_pays && player.is_natural() => Self::Natural,
            1 => Self::Win,
            0 => Self::Push,
            _ => Self::Lose,
        }
    }

    /// Reward for this outcome at single stakes.
    #[must_use]
    pub const fn base_reward(self) -> f64 {
        match self {
            Self::Win => 1.0,
            Self::Natural => 1.5,
            Self::Push => 0.0,
            Self::Lose | Self::Bust => -1.0,
        }
    }
}

/// Result of a finished episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpisodeResult {
    /// How the episode ended.
    pub outcome: Outcome,
    /// Whether the player doubled down.
    pub doubled: bool,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score, if the dealer played.
    pub dealer_score: Option<u8>,
}

impl EpisodeResult {
    /// Reward paid for the episode.
    ///
    /// Doubling multiplies the reward by two, except that a double that
    /// busts loses a single unit.
    #[must_use]
    pub const fn reward(&self) -> f64 {
        let base = self.outcome.base_reward();
        match self.outcome {
            Outcome::Bust => base,
            _ if self.doubled => base * 2.0,
            _ => base,
        }
    }
}
