//! Hand arithmetic and player/dealer hand representations.

extern crate alloc;

use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::{ACE, Rank, TEN};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

fn raw_sum(cards: &[Rank]) -> u8 {
    cards.iter().fold(0u8, |sum, &rank| sum.saturating_add(rank))
}

/// Returns whether the hand holds an ace that can count as 11 without busting.
#[must_use]
pub fn usable_ace(cards: &[Rank]) -> bool {
    cards.contains(&ACE) && raw_sum(cards).saturating_add(10) <= BLACKJACK
}

/// Returns the best total of the hand.
///
/// One ace is counted as 11 when that keeps the total at or below 21.
#[must_use]
pub fn hand_total(cards: &[Rank]) -> u8 {
    let sum = raw_sum(cards);
    if usable_ace(cards) { sum + 10 } else { sum }
}

/// Returns whether the hand total exceeds 21.
#[must_use]
pub fn is_bust(cards: &[Rank]) -> bool {
    hand_total(cards) > BLACKJACK
}

/// Returns the hand's score: 0 when bust, the total otherwise.
#[must_use]
pub fn score(cards: &[Rank]) -> u8 {
    if is_bust(cards) { 0 } else { hand_total(cards) }
}

/// Returns whether the hand is exactly an ace and a ten-value card.
#[must_use]
pub fn is_natural(cards: &[Rank]) -> bool {
    matches!(cards, [ACE, TEN] | [TEN, ACE])
}

/// Compares two scores, returning `-1`, `0`, or `1`.
#[must_use]
pub fn compare(player_score: u8, dealer_score: u8) -> i8 {
    match player_score.cmp(&dealer_score) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Rank]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Returns the cards in the hand, in the order drawn.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_total(&self.cards)
    }

    /// Returns whether the hand has a usable ace.
    #[must_use]
    pub fn has_usable_ace(&self) -> bool {
        usable_ace(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the hand's score (0 if bust).
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Rank>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Creates a dealer hand holding the given cards, hole card hidden.
    #[must_use]
    pub fn from_cards(cards: &[Rank]) -> Self {
        Self {
            cards: cards.to_vec(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    /// Returns the face-down card (second card).
    #[must_use]
    pub fn hole_card(&self) -> Option<Rank> {
        self.cards.get(1).copied()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_total(&self.cards)
    }

    /// Returns the hand's score (0 if bust).
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new episode.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
