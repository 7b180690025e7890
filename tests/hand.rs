//! Hand arithmetic tests.

use bjenv::{DealerHand, Hand, compare, hand_total, is_bust, is_natural, score, usable_ace};

#[test]
fn usable_ace_counts_one_ace_as_eleven() {
    assert!(usable_ace(&[1, 6]));
    assert_eq!(hand_total(&[1, 6]), 17);

    assert!(usable_ace(&[1, 1, 9]));
    assert_eq!(hand_total(&[1, 1, 9]), 21);

    assert!(!usable_ace(&[1, 6, 8]));
    assert_eq!(hand_total(&[1, 6, 8]), 15);

    assert!(!usable_ace(&[10, 9]));
    assert_eq!(hand_total(&[10, 9]), 19);
}

#[test]
fn bust_and_score_follow_total() {
    assert!(!is_bust(&[10, 10, 1]));
    assert_eq!(score(&[10, 10, 1]), 21);

    assert!(is_bust(&[10, 10, 2]));
    assert_eq!(score(&[10, 10, 2]), 0);

    assert!(!is_bust(&[1, 1, 1, 1, 7]));
    assert_eq!(score(&[1, 1, 1, 1, 7]), 21);
}

#[test]
fn natural_requires_ace_and_ten_value() {
    assert!(is_natural(&[1, 10]));
    assert!(is_natural(&[10, 1]));
    assert!(!is_natural(&[1, 1]));
    assert!(!is_natural(&[1, 9]));
    assert!(!is_natural(&[1, 5, 5]));
}

#[test]
fn compare_returns_sign_of_difference() {
    assert_eq!(compare(20, 18), 1);
    assert_eq!(compare(18, 20), -1);
    assert_eq!(compare(19, 19), 0);
    assert_eq!(compare(0, 0), 0);
}

#[test]
fn hand_wrappers_recompute_from_cards() {
    let mut hand = Hand::from_cards(&[1, 5]);
    assert_eq!(hand.value(), 16);
    assert!(hand.has_usable_ace());

    hand.add_card(10);
    assert_eq!(hand.value(), 16);
    assert!(!hand.has_usable_ace());
    assert_eq!(hand.cards(), &[1, 5, 10]);

    hand.add_card(9);
    assert!(hand.is_bust());
    assert_eq!(hand.score(), 0);

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn dealer_hand_hole_card_visibility() {
    let mut dealer = DealerHand::from_cards(&[9, 7]);
    assert_eq!(dealer.up_card(), Some(9));
    assert_eq!(dealer.hole_card(), Some(7));
    assert!(!dealer.is_hole_revealed());

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.value(), 16);

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.up_card(), None);
}
