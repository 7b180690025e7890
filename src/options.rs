//! Environment configuration options.

use crate::shoe::DEFAULT_RESHUFFLE_THRESHOLD;

/// Total the dealer stands on by default.
pub const DEFAULT_DEALER_STANDS_ON: u8 = 17;

/// Configuration options for a blackjack environment.
///
/// The three classic variants are available as presets, and every field can
/// be adjusted with the builder methods:
///
/// ```
/// use bjenv::EnvOptions;
///
/// let options = EnvOptions::double_down()
///     .with_natural(true)
///     .with_shoe(true);
/// assert!(options.double_down);
/// assert!(options.natural);
/// assert!(options.shoe);
/// assert!(!options.card_counting);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvOptions {
    /// Whether a natural blackjack win pays 1.5 instead of 1.
    pub natural: bool,
    /// Whether the double-down action is available.
    pub double_down: bool,
    /// Whether cards come from a finite shoe rather than an infinite deck.
    pub shoe: bool,
    /// Whether observations carry the card-counting channel.
    pub card_counting: bool,
    /// The shoe is reshuffled at reset when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// The dealer draws while its total is below this value.
    pub dealer_stands_on: u8,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self::hit_stand()
    }
}

impl EnvOptions {
    /// Hit or stand only, infinite deck.
    #[must_use]
    pub const fn hit_stand() -> Self {
        Self {
            natural: false,
            double_down: false,
            shoe: false,
            card_counting: false,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            dealer_stands_on: DEFAULT_DEALER_STANDS_ON,
        }
    }

    /// Hit, stand, or double down, infinite deck.
    #[must_use]
    pub const fn double_down() -> Self {
        Self::hit_stand().with_double_down(true)
    }

    /// Hit, stand, or double down from a depleting shoe, with the count
    /// exposed in observations.
    ///
    /// ```
    /// use bjenv::EnvOptions;
    ///
    /// let options = EnvOptions::counting_shoe();
    /// assert!(options.double_down && options.shoe && options.card_counting);
    /// assert_eq!(options.reshuffle_threshold, 15);
    /// ```
    #[must_use]
    pub const fn counting_shoe() -> Self {
        Self::double_down()
            .with_shoe(true)
            .with_card_counting(true)
    }

    /// Sets whether natural wins pay 1.5.
    #[must_use]
    pub const fn with_natural(mut self, natural: bool) -> Self {
        self.natural = natural;
        self
    }

    /// Sets whether double down is available.
    #[must_use]
    pub const fn with_double_down(mut self, allowed: bool) -> Self {
        self.double_down = allowed;
        self
    }

    /// Sets whether cards come from a finite shoe.
    #[must_use]
    pub const fn with_shoe(mut self, shoe: bool) -> Self {
        self.shoe = shoe;
        self
    }

    /// Sets whether observations carry the count channel.
    #[must_use]
    pub const fn with_card_counting(mut self, counting: bool) -> Self {
        self.card_counting = counting;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::EnvOptions;
    ///
    /// let options = EnvOptions::counting_shoe().with_reshuffle_threshold(20);
    /// assert_eq!(options.reshuffle_threshold, 20);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the total the dealer stands on.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Number of discrete actions these options allow.
    #[must_use]
    pub const fn action_count(&self) -> usize {
        if self.double_down { 3 } else { 2 }
    }
}
