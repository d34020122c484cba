/// A contiguous span of the hand selected as a meld. Melds only exist
/// between the search and the mask; nothing stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meld {
    pub start: usize,
    pub len: usize,
}

/// Spans shorter than this advance the scan without counting as melds.
pub const MIN_MELD_LEN: usize = 3;

/// Picks non-overlapping melds maximizing the number of covered cards. A
/// candidate at position `i` may take any length up to `run_lengths[i]`;
/// lengths 1 and 2 are skip steps that cover nothing.
///
/// Suffix totals depend only on the start position, so the search is a
/// right-to-left table fill followed by a walk that replays the recorded
/// choices. Ties go to the longest candidate length: lengths are tried
/// longest first and a later candidate replaces the best only when strictly
/// greater.
pub fn best_partition(run_lengths: &[usize]) -> Vec<Meld> {
    let n = run_lengths.len();
    let mut score = vec![0usize; n + 1];
    let mut choice = vec![1usize; n];
    for index in (0..n).rev() {
        let limit = run_lengths[index].clamp(1, n - index);
        let mut best_len = limit;
        let mut best_score = covered(limit) + score[index + limit];
        for len in (1..limit).rev() {
            let total = covered(len) + score[index + len];
            if total > best_score {
                best_score = total;
                best_len = len;
            }
        }
        score[index] = best_score;
        choice[index] = best_len;
    }

    let mut melds = Vec::new();
    let mut index = 0;
    while index < n {
        let len = choice[index];
        if len >= MIN_MELD_LEN {
            melds.push(Meld { start: index, len });
        }
        index += len;
    }
    melds
}

fn covered(len: usize) -> usize {
    if len >= MIN_MELD_LEN {
        len
    } else {
        0
    }
}
