use crate::{Card, Rank, RngState, Suit};

/// Jokers shuffled into the default game deck (two standard packs).
pub const DEFAULT_JOKERS: usize = 6;

/// Cards dealt to each player in a round: three in round 1, one more each
/// round after.
pub fn hand_size(round: u32) -> usize {
    round as usize + 2
}

/// The draw and discard piles. The game plays with two standard packs plus
/// jokers so that same-rank melds can repeat a suit.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn game_deck() -> Self {
        Self::with_jokers(DEFAULT_JOKERS)
    }

    pub fn with_jokers(jokers: usize) -> Self {
        let mut draw = Vec::with_capacity(104 + jokers);
        for _ in 0..2 {
            for suit in Suit::ALL {
                for rank in Rank::ORDERED {
                    draw.push(Card::standard(suit, rank));
                }
            }
        }
        draw.extend(std::iter::repeat(Card::joker()).take(jokers));
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Deals a hand for `round`, short only when the draw pile runs dry.
    pub fn deal(&mut self, round: u32) -> Vec<Card> {
        self.draw_cards(hand_size(round))
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.draw.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        self.discard.append(&mut cards);
    }

    pub fn reshuffle_discard(&mut self, rng: &mut RngState) {
        if self.discard.is_empty() {
            return;
        }
        self.draw.append(&mut self.discard);
        rng.shuffle(&mut self.draw);
    }
}
