use crate::{Card, Rank};

/// First round with no rank-based wild. The deal grows one card per round,
/// so round 11 is the 13-card final deal and `round + 2` would walk off the
/// top of the rank order.
pub const FINAL_ROUND: u32 = 11;

/// The rank treated as wild for a round: ordinal `round + 2` counted from
/// Two. From [`FINAL_ROUND`] on, no rank is wild and only jokers remain.
///
/// Note the rulebook text says threes are wild in round 1 and aces in the
/// final round; the shipped mapping starts at Five and reaches Ace in round
/// 10. Kept as shipped pending a rules decision.
pub fn wild_rank(round: u32) -> Option<Rank> {
    if round >= FINAL_ROUND {
        return None;
    }
    Rank::from_ordinal(round + 2)
}

/// Whether `card` is wild in `round`. Presentation layers use this for wild
/// badges; it is the same predicate the scanner applies internally.
pub fn is_wild(card: Card, round: u32) -> bool {
    card.is_wild_for(wild_rank(round))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    #[test]
    fn wild_rank_by_round() {
        assert_eq!(wild_rank(1), Some(Rank::Five));
        assert_eq!(wild_rank(2), Some(Rank::Six));
        assert_eq!(wild_rank(7), Some(Rank::Jack));
        assert_eq!(wild_rank(10), Some(Rank::Ace));
    }

    #[test]
    fn final_rounds_have_no_rank_wild() {
        assert_eq!(wild_rank(FINAL_ROUND), None);
        assert_eq!(wild_rank(FINAL_ROUND + 5), None);
    }

    #[test]
    fn jokers_stay_wild_past_the_threshold() {
        assert!(is_wild(Card::joker(), FINAL_ROUND));
        assert!(!is_wild(Card::standard(Suit::Spades, Rank::Ace), FINAL_ROUND));
        assert!(is_wild(Card::standard(Suit::Spades, Rank::Ace), 10));
    }
}
