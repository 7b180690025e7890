//! Episode engine and state management.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Rank, count_weight};
use crate::error::{ConfigError, DrawError, StepError};
use crate::hand::{DealerHand, Hand};
use crate::options::EnvOptions;
use crate::result::EpisodeResult;
use crate::source::CardSource;
use crate::space::{self, Discrete};

mod actions;
mod dealer;
pub mod state;

pub use state::{Action, CountObservation, EpisodeState, Info, Observation, Step};

/// Cards dealt to each side at the start of an episode.
const INITIAL_CARDS: usize = 2;

/// A single-player blackjack environment.
///
/// The environment owns the player's and dealer's hands, the card source, and
/// the random number generator. Drive it with [`reset`](Self::reset) to deal
/// an episode and [`step`](Self::step) to act until the step reports `done`.
///
/// ```
/// use bjenv::{BlackjackEnv, EnvOptions};
///
/// let mut env = BlackjackEnv::new(EnvOptions::hit_stand(), 7).unwrap();
/// let observation = env.reset().unwrap();
/// assert!(observation.player_total >= 4);
///
/// let step = env.step(0).unwrap();
/// assert!(step.done);
/// ```
#[derive(Debug, Clone)]
pub struct BlackjackEnv<R = ChaCha8Rng> {
    /// Environment options.
    options: EnvOptions,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: DealerHand,
    /// Where cards are drawn from.
    pub source: CardSource,
    /// Current episode state.
    state: EpisodeState,
    /// Result of the last finished episode.
    result: Option<EpisodeResult>,
    /// Random number generator.
    rng: R,
}

impl BlackjackEnv<ChaCha8Rng> {
    /// Creates a new environment with the given seed.
    ///
    /// No cards are dealt until [`reset`](Self::reset) is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are inconsistent.
    pub fn new(options: EnvOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng + SeedableRng> BlackjackEnv<R> {
    /// Replaces the random number generator.
    ///
    /// With `None`, a fresh seed is drawn from the current generator. Returns
    /// the seed that was used.
    pub fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        let seed = seed.unwrap_or_else(|| self.rng.next_u64());
        self.rng = R::seed_from_u64(seed);
        vec![seed]
    }
}

impl<R: Rng> BlackjackEnv<R> {
    /// Creates a new environment around an existing random number generator.
    ///
    /// # Errors
    ///
    /// Returns an error if card counting is requested without a shoe, or if
    /// a shoe's reshuffle threshold is too low to cover the initial deal.
    pub fn with_rng(options: EnvOptions, rng: R) -> Result<Self, ConfigError> {
        if options.card_counting && !options.shoe {
            return Err(ConfigError::CountingRequiresShoe);
        }
        if options.shoe && options.reshuffle_threshold < INITIAL_CARDS * 2 {
            return Err(ConfigError::ThresholdTooLow(options.reshuffle_threshold));
        }

        let source = if options.shoe {
            CardSource::shoe()
        } else {
            CardSource::infinite()
        };

        Ok(Self {
            options,
            player: Hand::new(),
            dealer: DealerHand::new(),
            source,
            state: EpisodeState::NotStarted,
            result: None,
            rng,
        })
    }

    /// Returns the environment options.
    #[must_use]
    pub const fn options(&self) -> &EnvOptions {
        &self.options
    }

    /// Returns the current episode state.
    #[must_use]
    pub const fn state(&self) -> EpisodeState {
        self.state
    }

    /// Returns whether the current episode has ended.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == EpisodeState::Done
    }

    /// Returns the result of the current episode, once it has ended.
    #[must_use]
    pub const fn result(&self) -> Option<EpisodeResult> {
        self.result
    }

    /// Returns the action space.
    #[must_use]
    pub const fn action_space(&self) -> Discrete {
        Discrete::new(self.options.action_count())
    }

    /// Returns the per-field observation space.
    #[must_use]
    pub fn observation_space(&self) -> Vec<Discrete> {
        space::observation_space(self.options.card_counting)
    }

    /// Queues cards to be dealt before any random draw.
    ///
    /// With a shoe, each stacked card is removed from the shoe when dealt.
    pub fn stack_cards(&mut self, cards: &[Rank]) {
        self.source.stack(cards);
    }

    /// Starts a new episode and returns the initial observation.
    ///
    /// A shoe that has fallen below the reshuffle threshold is restored
    /// before dealing.
    ///
    /// # Errors
    ///
    /// Returns an error if a card cannot be drawn.
    pub fn reset(&mut self) -> Result<Observation, DrawError> {
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.state = EpisodeState::NotStarted;

        if self.options.shoe {
            if self
                .source
                .check_and_reshuffle(self.options.reshuffle_threshold)
            {
                debug!("shoe restored before dealing");
            }
            for _ in 0..INITIAL_CARDS {
                let card = self.draw()?;
                self.dealer.add_card(card);
                let card = self.draw()?;
                self.player.add_card(card);
            }
        } else {
            for _ in 0..INITIAL_CARDS {
                let card = self.draw()?;
                self.dealer.add_card(card);
            }
            for _ in 0..INITIAL_CARDS {
                let card = self.draw()?;
                self.player.add_card(card);
            }
        }

        self.state = EpisodeState::InProgress;
        debug!(
            player = ?self.player.cards(),
            up_card = ?self.dealer.up_card(),
            "dealt new episode"
        );

        Ok(self.observation())
    }

    /// Applies an action and advances the episode by one turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is outside the action space, no
    /// episode is in progress, or a card cannot be drawn. A draw failure ends
    /// the episode.
    pub fn step(&mut self, action: usize) -> Result<Step, StepError> {
        let action = Action::from_index(action, self.options.action_count())?;

        match self.state {
            EpisodeState::NotStarted => return Err(StepError::NotStarted),
            EpisodeState::Done => return Err(StepError::EpisodeOver),
            EpisodeState::InProgress => {}
        }

        let finished = match action {
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::Double => self.double_down(),
        };

        let finished = match finished {
            Ok(finished) => finished,
            Err(err) => {
                self.state = EpisodeState::Done;
                return Err(err.into());
            }
        };

        let reward = finished.map_or(0.0, |result| result.reward());
        if let Some(result) = finished {
            self.state = EpisodeState::Done;
            self.result = Some(result);
            debug!(?action, ?result, reward, "episode finished");
        }

        Ok(Step {
            observation: self.observation(),
            reward,
            done: finished.is_some(),
            info: Info::default(),
        })
    }

    /// Builds the observation for the current hands.
    ///
    /// While the dealer's hole card is hidden, the count value excludes it:
    /// its counting weight is added back on top of the shoe's deck value.
    #[must_use]
    pub fn observation(&self) -> Observation {
        let count = if self.options.card_counting {
            self.source.as_shoe().map(|shoe| {
                let unknown_dealer = !self.dealer.is_hole_revealed();
                let value = shoe.deck_value()
                    + self
                        .dealer
                        .hole_card()
                        .filter(|_| unknown_dealer)
                        .map_or(0, count_weight);
                CountObservation {
                    value,
                    unknown_dealer,
                }
            })
        } else {
            None
        };

        Observation {
            player_total: self.player.value(),
            dealer_up_card: self.dealer.up_card().unwrap_or(0),
            usable_ace: self.player.has_usable_ace(),
            count,
        }
    }

    /// Draws a card from the source.
    fn draw(&mut self) -> Result<Rank, DrawError> {
        self.source.draw(&mut self.rng)
    }
}
