use crate::{Card, Rank};

/// How a candidate run is classified once it holds two real (non-wild)
/// cards. Until then every extension is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Undetermined,
    SameRank,
    Ascending,
    Descending,
}

/// For every start position, the length of the longest contiguous run that
/// could stand alone as a same-rank group or a same-suit sequence, counting
/// wild substitution. The minimum-meld-size rule is not applied here; the
/// last position always scans as 1.
pub fn run_lengths(hand: &[Card], wild_rank: Option<Rank>) -> Vec<usize> {
    (0..hand.len())
        .map(|start| scan_from(hand, wild_rank, start))
        .collect()
}

fn scan_from(hand: &[Card], wild_rank: Option<Rank>, start: usize) -> usize {
    let mut len = 1;
    let mut shape = Shape::Undetermined;
    // Position of the first real card seen; every later real card must sit
    // at the exact offset from it, which keeps a sequence from drifting
    // (3,4,5,7 fails at the 7 even though 5 to 7 is only off by one).
    let mut anchor = (!hand[start].is_wild_for(wild_rank)).then_some(start);
    while start + len < hand.len() {
        let next = start + len;
        if !hand[next].is_wild_for(wild_rank) {
            match anchor {
                None => anchor = Some(next),
                Some(a) => match continuation(hand[a], hand[next], (next - a) as i32, shape) {
                    Some(fixed) => shape = fixed,
                    None => break,
                },
            }
        }
        len += 1;
    }
    len
}

/// Whether a real card `delta` positions after the anchor continues the run,
/// and with which shape. A same-rank pair fixes SameRank; a same-suit pair
/// whose rank gap equals the position gap fixes Ascending or Descending.
/// Ace's sequence value is -1, so it never continues upward past King.
fn continuation(from: Card, to: Card, delta: i32, shape: Shape) -> Option<Shape> {
    let same_rank = from.rank == to.rank;
    let same_suit = match (from.suit, to.suit) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    let step = match (from.rank.sequence_value(), to.rank.sequence_value()) {
        (Some(a), Some(b)) => Some(i32::from(b) - i32::from(a)),
        _ => None,
    };
    let ascends = same_suit && step == Some(delta);
    let descends = same_suit && step == Some(-delta);
    match shape {
        Shape::SameRank => same_rank.then_some(Shape::SameRank),
        Shape::Ascending => ascends.then_some(Shape::Ascending),
        Shape::Descending => descends.then_some(Shape::Descending),
        Shape::Undetermined => {
            if same_rank {
                Some(Shape::SameRank)
            } else if ascends {
                Some(Shape::Ascending)
            } else if descends {
                Some(Shape::Descending)
            } else {
                None
            }
        }
    }
}
