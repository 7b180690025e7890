//! Action, observation, and step types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;
use crate::error::ActionError;

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Keep the current hand and let the dealer play.
    Stand,
    /// Draw one card.
    Hit,
    /// Draw exactly one card at double stakes, then stand.
    Double,
}

impl Action {
    /// Returns the action's discrete value.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Stand => 0,
            Self::Hit => 1,
            Self::Double => 2,
        }
    }

    /// Converts a discrete value into an action, given the size of the
    /// action space.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidAction`] if `action` is not below `n`.
    pub const fn from_index(action: usize, n: usize) -> Result<Self, ActionError> {
        if action >= n {
            return Err(ActionError::InvalidAction { action, n });
        }
        match action {
            0 => Ok(Self::Stand),
            1 => Ok(Self::Hit),
            2 => Ok(Self::Double),
            _ => Err(ActionError::InvalidAction { action, n }),
        }
    }
}

/// The card-counting channel of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountObservation {
    /// Offset running count, excluding the dealer's hole card while it is
    /// still hidden.
    pub value: i32,
    /// Whether the dealer's hole card is still hidden.
    pub unknown_dealer: bool,
}

/// What the agent sees after a reset or step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observation {
    /// The player's best total.
    pub player_total: u8,
    /// The dealer's face-up card.
    pub dealer_up_card: Rank,
    /// Whether the player holds a usable ace.
    pub usable_ace: bool,
    /// Count channel, present only with card counting enabled.
    pub count: Option<CountObservation>,
}

impl Observation {
    /// Flattens the observation into integer features.
    ///
    /// The order matches [`crate::space::observation_space`].
    #[must_use]
    pub fn to_features(&self) -> Vec<i32> {
        let mut features = alloc::vec![
            i32::from(self.player_total),
            i32::from(self.dealer_up_card),
            i32::from(self.usable_ace),
        ];
        if let Some(count) = self.count {
            features.extend([count.value, i32::from(count.unknown_dealer)]);
        }
        features
    }
}

/// Diagnostic data attached to a step. Currently always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub struct Info {}

/// The result of a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Observation after the action.
    pub observation: Observation,
    /// Reward earned by the action.
    pub reward: f64,
    /// Whether the episode has ended.
    pub done: bool,
    /// Diagnostic data.
    pub info: Info,
}

/// Lifecycle of the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodeState {
    /// No cards have been dealt.
    NotStarted,
    /// Waiting for player actions.
    InProgress,
    /// The episode has ended; reset to play again.
    Done,
}
