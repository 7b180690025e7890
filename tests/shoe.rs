//! Shoe and card source tests.

use bjenv::card::{DECK_COMPOSITION, SUIT_RANKS, draw_infinite};
use bjenv::shoe::MIN_RUNNING_COUNT;
use bjenv::{CardSource, DECK_SIZE, DrawError, Shoe, TEN, count_weight};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn fresh_shoe_holds_one_deck() {
    let shoe = Shoe::new();
    assert_eq!(shoe.deck_count(), DECK_SIZE);
    assert_eq!(shoe.counts(), &DECK_COMPOSITION);
    assert_eq!(shoe.remaining_of(TEN), 16);
    assert_eq!(shoe.running_count(), 0);
    assert_eq!(shoe.deck_value(), -MIN_RUNNING_COUNT);
}

#[test]
fn counting_weights_balance_over_a_deck() {
    let total: i32 = (1..=10)
        .map(|rank| count_weight(rank) * i32::from(DECK_COMPOSITION[usize::from(rank - 1)]))
        .sum();
    assert_eq!(total, 0);
}

#[test]
fn take_updates_counts_and_running_count() {
    let mut shoe = Shoe::new();
    shoe.take(10).unwrap();
    shoe.take(5).unwrap();

    assert_eq!(shoe.deck_count(), 50);
    assert_eq!(shoe.remaining_of(10), 15);
    assert_eq!(shoe.remaining_of(5), 3);
    assert_eq!(shoe.running_count(), 2 - 2);

    shoe.take(4).unwrap();
    assert_eq!(shoe.running_count(), -2);
    assert_eq!(shoe.deck_value(), 30);
}

#[test]
fn take_rejects_missing_or_invalid_ranks() {
    let mut shoe = Shoe::with_counts([0, 0, 0, 0, 0, 0, 0, 0, 1, 0]);
    assert_eq!(shoe.take(10), Err(DrawError::RankUnavailable(10)));
    assert_eq!(shoe.take(11), Err(DrawError::InvalidRank(11)));
    assert_eq!(shoe.take(0), Err(DrawError::InvalidRank(0)));
    shoe.take(9).unwrap();
    assert_eq!(shoe.deck_count(), 0);
}

#[test]
fn depleted_rank_is_never_drawn_again() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut shoe = Shoe::new();
    for _ in 0..16 {
        shoe.take(TEN).unwrap();
    }
    assert_eq!(shoe.running_count(), 32);

    for _ in 0..36 {
        let rank = shoe.draw(&mut rng).unwrap();
        assert_ne!(rank, TEN);
    }

    assert_eq!(shoe.deck_count(), 0);
    assert_eq!(shoe.running_count(), 0);
    assert_eq!(shoe.draw(&mut rng), Err(DrawError::ShoeExhausted));
}

#[test]
fn draw_picks_among_available_ranks() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut shoe = Shoe::with_counts([0, 0, 0, 0, 0, 0, 0, 1, 0, 16]);

    let mut seen_eight = false;
    for _ in 0..17 {
        let rank = shoe.draw(&mut rng).unwrap();
        assert!(rank == 8 || rank == 10);
        seen_eight |= rank == 8;
    }
    assert!(seen_eight);
    assert_eq!(shoe.draw(&mut rng), Err(DrawError::ShoeExhausted));
}

#[test]
fn reset_restores_composition() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut shoe = Shoe::new();
    for _ in 0..40 {
        shoe.draw(&mut rng).unwrap();
    }
    assert!(shoe.needs_reshuffle(15));

    shoe.reset();
    assert_eq!(shoe, Shoe::new());
    assert!(!shoe.needs_reshuffle(15));
}

#[test]
fn infinite_draws_stay_in_rank_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..500 {
        let rank = draw_infinite(&mut rng);
        assert!(SUIT_RANKS.contains(&rank));
    }
}

#[test]
fn stacked_cards_come_first() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut source = CardSource::shoe();
    source.stack(&[1, 10, 10]);
    assert_eq!(source.stacked_len(), 3);

    assert_eq!(source.draw(&mut rng), Ok(1));
    assert_eq!(source.draw(&mut rng), Ok(10));
    assert_eq!(source.draw(&mut rng), Ok(10));
    assert_eq!(source.stacked_len(), 0);

    let shoe = source.as_shoe().unwrap();
    assert_eq!(shoe.remaining_of(1), 3);
    assert_eq!(shoe.remaining_of(10), 14);
    assert_eq!(shoe.deck_count(), 49);
}

#[test]
fn infinite_source_rejects_invalid_stacked_rank() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut source = CardSource::infinite();
    source.stack(&[12]);
    assert_eq!(source.draw(&mut rng), Err(DrawError::InvalidRank(12)));
    assert!(source.as_shoe().is_none());
    assert!(!source.check_and_reshuffle(15));
}

#[test]
fn check_and_reshuffle_respects_threshold() {
    let mut source = CardSource::shoe();
    *source.as_shoe_mut().unwrap() = Shoe::with_counts([1, 1, 1, 1, 1, 1, 1, 1, 1, 6]);
    assert!(!source.check_and_reshuffle(15));
    assert_eq!(source.as_shoe().unwrap().deck_count(), 15);

    source.as_shoe_mut().unwrap().take(10).unwrap();
    assert!(source.check_and_reshuffle(15));
    assert_eq!(source.as_shoe().unwrap(), &Shoe::new());
}
