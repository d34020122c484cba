use crate::{best_partition, run_lengths, wild_rank, Card};

/// The engine entry point: which positions of `hand` are covered by the
/// chosen melds for `round`. Same length and order as `hand`; a pure
/// function of its inputs with no failure path (an empty hand yields an
/// empty mask). Callers own writing the flags back onto their hand state.
pub fn grouped_mask(hand: &[Card], round: u32) -> Vec<bool> {
    let wild = wild_rank(round);
    let lengths = run_lengths(hand, wild);
    let mut mask = vec![false; hand.len()];
    for meld in best_partition(&lengths) {
        for flag in &mut mask[meld.start..meld.start + meld.len] {
            *flag = true;
        }
    }
    mask
}
