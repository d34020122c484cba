use crate::HandState;
use wildrun_core::{Card, Rank};

/// Penalty value of a card left ungrouped when another player goes out.
/// Number cards count face value, court cards ten, aces fifteen, jokers
/// twenty-five.
pub fn point_value(card: Card) -> i64 {
    match card.rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 15,
        Rank::Joker => 25,
    }
}

/// Total penalty carried by the ungrouped part of a hand.
pub fn caught_points(hand: &HandState) -> i64 {
    hand.ungrouped_cards()
        .into_iter()
        .map(|(_, card)| point_value(card))
        .sum()
}
