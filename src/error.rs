//! Error types for environment operations.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur while drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No card of any rank remains in the shoe.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
    /// A stacked card asked for a rank the shoe has run out of.
    #[error("no card of rank {0} left in the shoe")]
    RankUnavailable(Rank),
    /// A stacked card is not a valid rank.
    #[error("invalid rank {0}")]
    InvalidRank(Rank),
}

/// Errors that can occur when interpreting an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is outside the environment's action space.
    #[error("action {action} is outside the action space of size {n}")]
    InvalidAction {
        /// The rejected action.
        action: usize,
        /// Size of the action space.
        n: usize,
    },
}

/// Errors that can occur during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// No episode has been dealt yet.
    #[error("no episode in progress; call reset first")]
    NotStarted,
    /// The current episode already ended.
    #[error("episode is over; call reset to start a new one")]
    EpisodeOver,
    /// The action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// A card could not be drawn.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur when building an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The count channel needs a finite shoe to count.
    #[error("card counting requires a shoe-backed card source")]
    CountingRequiresShoe,
    /// The reshuffle threshold cannot cover the initial deal.
    #[error("reshuffle threshold {0} is below the four cards of the initial deal")]
    ThresholdTooLow(usize),
}
