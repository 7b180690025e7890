//! Card ranks, deck composition, and counting weights.

use rand::Rng;
use rand::seq::IndexedRandom;

/// A card's blackjack-relevant rank.
///
/// `1` is an ace, `2..=9` are pip cards, and `10` covers tens and face cards.
pub type Rank = u8;

/// Rank of an ace.
pub const ACE: Rank = 1;

/// Rank shared by tens, jacks, queens, and kings.
pub const TEN: Rank = 10;

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 10;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// The 13 ranks of one suit; ten-value cards appear four times.
pub const SUIT_RANKS: [Rank; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

/// Card counts per rank in a full deck, indexed by `rank - 1`.
pub const DECK_COMPOSITION: [u8; RANK_COUNT] = [4, 4, 4, 4, 4, 4, 4, 4, 4, 16];

/// Counting weight subtracted from the running count when a rank is drawn.
///
/// Weights over a full deck sum to zero, so a fresh shoe has a running count
/// of zero and an exhausted one returns to zero.
#[must_use]
pub const fn count_weight(rank: Rank) -> i32 {
    match rank {
        2 | 3 | 6 | 7 => 1,
        4 | 5 => 2,
        10 => -2,
        _ => 0,
    }
}

/// Returns whether `rank` is a valid blackjack rank.
#[must_use]
pub const fn is_valid_rank(rank: Rank) -> bool {
    rank >= ACE && rank <= TEN
}

/// Draws a rank from an infinite deck.
///
/// Every draw is independent and uniform over [`SUIT_RANKS`], so ten-value
/// cards come up four times as often as any other rank.
pub fn draw_infinite<R: Rng + ?Sized>(rng: &mut R) -> Rank {
    SUIT_RANKS.choose(rng).copied().unwrap_or(TEN)
}
