//! Property tests for shuffling and card derivation.

use std::collections::HashMap;

use concentration::shuffle::shuffle;
use concentration::{Card, DECK_SIZE, Deck};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn shuffle_returns_a_permutation(n in 0usize..300, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut order = shuffle(n, &mut rng);
        prop_assert_eq!(order.len(), n);

        order.sort_unstable();
        let expected: Vec<usize> = (0..n).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn card_rank_and_suit_stay_in_range(index in 0u8..52) {
        let card = Card::new(index).unwrap();
        prop_assert!(card.rank() <= 12);
        prop_assert_eq!(card.rank(), index % 13);
        prop_assert_eq!(card.suit() as u8, index / 13);
        prop_assert_eq!(card.display_rank(), index % 13 + 1);
    }

    #[test]
    fn shuffled_deck_holds_every_card_once(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let mut indices: Vec<u8> = deck.cards().map(Card::index).collect();
        indices.sort_unstable();
        let expected: Vec<u8> = (0..52).collect();
        prop_assert_eq!(indices, expected);
    }
}

#[test]
fn shuffle_handles_trivial_sizes() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(shuffle(0, &mut rng).is_empty());
    assert_eq!(shuffle(1, &mut rng), vec![0]);
}

#[test]
fn shuffle_is_reproducible_from_a_seed() {
    let first = shuffle(52, &mut ChaCha8Rng::seed_from_u64(1234));
    let second = shuffle(52, &mut ChaCha8Rng::seed_from_u64(1234));
    assert_eq!(first, second);
    assert_ne!(first, (0..52).collect::<Vec<_>>());
}

#[test]
fn shuffle_orders_are_equally_likely() {
    const DRAWS: usize = 60_000;
    const EXPECTED: usize = DRAWS / 6;
    // ~5 standard deviations for p = 1/6 over 60 000 draws.
    const TOLERANCE: usize = 500;

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
    for _ in 0..DRAWS {
        *counts.entry(shuffle(3, &mut rng)).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    assert!(counts.contains_key(&vec![0, 1, 2]));
    for (order, count) in &counts {
        assert!(
            count.abs_diff(EXPECTED) <= TOLERANCE,
            "order {order:?} drawn {count} times, expected about {EXPECTED}"
        );
    }
}
