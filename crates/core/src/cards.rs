use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// The ordered non-joker ranks, lowest first. Ordinal 0 is Two.
    pub const ORDERED: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn from_ordinal(ordinal: u32) -> Option<Rank> {
        Rank::ORDERED.get(ordinal as usize).copied()
    }

    /// Position of this rank along a suit run. Ace only ever sits below Two
    /// (A,2,3 ascending or 3,2,A descending; never K,A,2), so it maps to -1
    /// rather than to the top. Joker has no position.
    pub fn sequence_value(self) -> Option<i8> {
        match self {
            Rank::Ace => Some(-1),
            Rank::Two => Some(0),
            Rank::Three => Some(1),
            Rank::Four => Some(2),
            Rank::Five => Some(3),
            Rank::Six => Some(4),
            Rank::Seven => Some(5),
            Rank::Eight => Some(6),
            Rank::Nine => Some(7),
            Rank::Ten => Some(8),
            Rank::Jack => Some(9),
            Rank::Queen => Some(10),
            Rank::King => Some(11),
            Rank::Joker => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 't',
            Rank::Jack => 'j',
            Rank::Queen => 'q',
            Rank::King => 'k',
            Rank::Ace => 'a',
            Rank::Joker => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    /// Jokers are the only suitless cards.
    #[serde(default)]
    pub suit: Option<Suit>,
}

impl Card {
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    pub fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: None,
        }
    }

    pub fn is_joker(self) -> bool {
        self.rank == Rank::Joker
    }

    /// Whether this card is wild given the round's resolved wild rank.
    /// Jokers are always wild; `None` means no rank is wild this round.
    pub fn is_wild_for(self, wild_rank: Option<Rank>) -> bool {
        self.is_joker() || Some(self.rank) == wild_rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", self.rank.letter(), suit.letter()),
            None => write!(f, "jo"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("empty card token")]
    Empty,
    #[error("unknown rank `{0}`")]
    BadRank(char),
    #[error("unknown suit `{0}`")]
    BadSuit(char),
    #[error("malformed card token `{0}`")]
    Malformed(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Two-character tokens: rank letter then suit letter (`9s`, `tc`, `ah`),
    /// or `jo` for a joker.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let lower = token.to_ascii_lowercase();
        if lower.is_empty() {
            return Err(ParseCardError::Empty);
        }
        if lower == "jo" {
            return Ok(Card::joker());
        }
        let mut chars = lower.chars();
        let (rank_char, suit_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err(ParseCardError::Malformed(token.to_string())),
        };
        let rank = match rank_char {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            't' => Rank::Ten,
            'j' => Rank::Jack,
            'q' => Rank::Queen,
            'k' => Rank::King,
            'a' => Rank::Ace,
            other => return Err(ParseCardError::BadRank(other)),
        };
        let suit = match suit_char {
            'c' => Suit::Clubs,
            'd' => Suit::Diamonds,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            other => return Err(ParseCardError::BadSuit(other)),
        };
        Ok(Card::standard(suit, rank))
    }
}

/// Parses a whitespace-separated hand like `9s ts js qs jo`.
pub fn parse_hand(text: &str) -> Result<Vec<Card>, ParseCardError> {
    text.split_whitespace().map(Card::from_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_text_round_trip() {
        for token in ["2c", "9s", "td", "jh", "qs", "kc", "ad", "jo"] {
            let card: Card = token.parse().unwrap();
            assert_eq!(card.to_string(), token);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("1s".parse::<Card>(), Err(ParseCardError::BadRank('1')));
        assert_eq!("9x".parse::<Card>(), Err(ParseCardError::BadSuit('x')));
        assert!(matches!(
            "10s".parse::<Card>(),
            Err(ParseCardError::Malformed(_))
        ));
    }

    #[test]
    fn ace_sits_below_two() {
        assert_eq!(Rank::Ace.sequence_value(), Some(-1));
        assert_eq!(Rank::Two.sequence_value(), Some(0));
        assert_eq!(Rank::King.sequence_value(), Some(11));
        assert_eq!(Rank::Joker.sequence_value(), None);
    }

    #[test]
    fn joker_is_wild_regardless_of_round_rank() {
        assert!(Card::joker().is_wild_for(None));
        assert!(Card::joker().is_wild_for(Some(Rank::Five)));
        let five = Card::standard(Suit::Hearts, Rank::Five);
        assert!(five.is_wild_for(Some(Rank::Five)));
        assert!(!five.is_wild_for(Some(Rank::Six)));
        assert!(!five.is_wild_for(None));
    }
}
