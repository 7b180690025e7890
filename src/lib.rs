//! A single-player blackjack environment for reinforcement-learning agents,
//! with optional `no_std` support.
//!
//! The crate provides a [`BlackjackEnv`] type that deals episodes, applies
//! hit/stand/double-down actions, plays the dealer's stand-on-17 policy, and
//! reports observations and rewards. [`EnvOptions`] selects between an
//! infinite deck and a depleting [`Shoe`], and can expose a card-counting
//! channel in observations.
//!
//! # Example
//!
//! ```
//! use bjenv::{BlackjackEnv, EnvOptions};
//!
//! let mut env = BlackjackEnv::new(EnvOptions::counting_shoe(), 42).unwrap();
//! let observation = env.reset().unwrap();
//! assert_eq!(observation.to_features().len(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod env;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod source;
pub mod space;

// Re-export main types
pub use card::{ACE, DECK_SIZE, Rank, TEN, count_weight};
pub use env::{Action, BlackjackEnv, CountObservation, EpisodeState, Info, Observation, Step};
pub use error::{ActionError, ConfigError, DrawError, StepError};
pub use hand::{DealerHand, Hand, compare, hand_total, is_bust, is_natural, score, usable_ace};
pub use options::EnvOptions;
pub use result::{EpisodeResult, Outcome};
pub use shoe::Shoe;
pub use source::{CardSource, Pool};
pub use space::Discrete;
