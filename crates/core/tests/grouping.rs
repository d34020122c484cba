use wildrun_core::{
    best_partition, grouped_mask, parse_hand, run_lengths, wild_rank, Card, Deck, Rank, RngState,
    FINAL_ROUND,
};

macro_rules! mask_case {
    ($name:ident, $hand:expr, $round:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let hand = parse_hand($hand).unwrap();
            assert_eq!(grouped_mask(&hand, $round), $expected);
        }
    };
}

// Round 2 makes Six wild; nothing in the hand is wild.
mask_case!(same_rank_set_of_three, "3c 3s 3h", 2, vec![true, true, true]);
mask_case!(
    ascending_suit_run_no_wild,
    "9s ts js qs",
    FINAL_ROUND,
    vec![true, true, true, true]
);
// Round 1 makes Five wild, so the threes are not; the joker completes the set.
mask_case!(joker_completes_a_set, "3c 3s jo", 1, vec![true, true, true]);
mask_case!(
    unrelated_cards_stay_ungrouped,
    "2c 5d 9h",
    FINAL_ROUND,
    vec![false, false, false]
);
mask_case!(
    ace_low_ascending,
    "as 2s 3s",
    FINAL_ROUND,
    vec![true, true, true]
);
mask_case!(
    ace_low_descending,
    "3s 2s as",
    FINAL_ROUND,
    vec![true, true, true]
);
mask_case!(
    no_wraparound_at_the_ace,
    "ks as 2s",
    FINAL_ROUND,
    vec![false, false, false]
);
mask_case!(empty_hand, "", 1, Vec::<bool>::new());
mask_case!(
    two_melds_in_one_hand,
    "7c 7d 7h as 2s 3s",
    2,
    vec![true, true, true, true, true, true]
);
mask_case!(
    skip_filler_between_melds,
    "3c 3s 3h kd 9s ts js",
    2,
    vec![true, true, true, false, true, true, true]
);

#[test]
fn set_with_an_arbitrary_wild_rank() {
    // The scanner takes the resolved wild rank directly, so a rank no round
    // maps to still behaves as a wild.
    let hand = parse_hand("3c 4s 3h").unwrap();
    let lengths = run_lengths(&hand, Some(Rank::Four));
    assert_eq!(lengths[0], 3);
    assert_eq!(best_partition(&lengths).len(), 1);
}

#[test]
fn deterministic_masks() {
    let hand = parse_hand("9s jo js qs 3c 3d").unwrap();
    for round in 1..=FINAL_ROUND + 1 {
        assert_eq!(grouped_mask(&hand, round), grouped_mask(&hand, round));
    }
}

#[test]
fn wild_identity_is_transparent() {
    // Round 3 makes Seven wild. Whatever wild card sits in the gap, the
    // mask is the same, because wild status rather than identity drives
    // continuation.
    let baseline = grouped_mask(&parse_hand("9s jo js qs").unwrap(), 3);
    for wild in ["7c", "7d", "7h", "7s", "jo"] {
        let hand = parse_hand(&format!("9s {wild} js qs")).unwrap();
        assert_eq!(grouped_mask(&hand, 3), baseline, "wild {wild}");
    }
}

#[test]
fn mask_never_reorders_or_resizes() {
    let hand = parse_hand("qs 2c 9s jo 5d 4h ts").unwrap();
    let snapshot = hand.clone();
    let mask = grouped_mask(&hand, 4);
    assert_eq!(mask.len(), hand.len());
    assert_eq!(hand, snapshot);
}

// A span is a valid candidate meld if its real cards all share a rank, or
// share a suit and each sit at their anchored slot of one ascending or
// descending sequence. Written from the rules, independently of the scanner.
fn valid_span(cards: &[Card], wild: Option<Rank>) -> bool {
    let reals: Vec<(usize, Card)> = cards
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, c)| !c.is_wild_for(wild))
        .collect();
    if reals.len() <= 1 {
        return true;
    }
    let (i0, c0) = reals[0];
    let same_rank = reals.iter().all(|&(_, c)| c.rank == c0.rank);
    let same_suit = c0.suit.is_some() && reals.iter().all(|&(_, c)| c.suit == c0.suit);
    let slope = |dir: i32| {
        reals.iter().all(|&(i, c)| {
            match (c.rank.sequence_value(), c0.rank.sequence_value()) {
                (Some(v), Some(v0)) => i32::from(v) - i32::from(v0) == dir * (i - i0) as i32,
                _ => false,
            }
        })
    };
    same_rank || (same_suit && (slope(1) || slope(-1)))
}

fn brute_force_covered(hand: &[Card], wild: Option<Rank>, index: usize) -> usize {
    if index >= hand.len() {
        return 0;
    }
    let mut best = brute_force_covered(hand, wild, index + 1);
    for len in 3..=(hand.len() - index) {
        if valid_span(&hand[index..index + len], wild) {
            best = best.max(len + brute_force_covered(hand, wild, index + len));
        }
    }
    best
}

#[test]
fn optimal_on_small_hands() {
    let mut deck = Deck::game_deck();
    let mut rng = RngState::from_seed(0x5eed);
    deck.shuffle(&mut rng);
    for trial in 0..200 {
        if deck.draw.len() < 8 {
            deck = Deck::game_deck();
            deck.shuffle(&mut rng);
        }
        let round = trial % (FINAL_ROUND + 1) + 1;
        let hand = deck.draw_cards(3 + trial as usize % 6);
        let mask = grouped_mask(&hand, round);
        let covered = mask.iter().filter(|&&g| g).count();
        assert_eq!(
            covered,
            brute_force_covered(&hand, wild_rank(round), 0),
            "round {round} hand {:?}",
            hand.iter().map(Card::to_string).collect::<Vec<_>>()
        );
    }
}

#[test]
fn grouped_blocks_are_at_least_meld_sized() {
    let mut deck = Deck::game_deck();
    let mut rng = RngState::from_seed(99);
    deck.shuffle(&mut rng);
    for round in 1..=FINAL_ROUND {
        let hand = deck.deal(round);
        let mask = grouped_mask(&hand, round);
        let mut block = 0usize;
        for (i, &grouped) in mask.iter().enumerate() {
            if grouped {
                block += 1;
            }
            if !grouped || i + 1 == mask.len() {
                assert!(block == 0 || block >= 3, "block of {block} in round {round}");
                block = 0;
            }
        }
    }
}
