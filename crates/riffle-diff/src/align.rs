// Line alignment using LCS (Longest Common Subsequence).

use std::collections::HashSet;

/// The matched line-index pairs between the left and right sequences,
/// ordered by left index. Pairs are strictly increasing in both
/// coordinates: matches never cross.
#[derive(Debug, Clone, Default)]
pub struct AlignmentMap {
    pairs: Vec<(usize, usize)>,
    left_matched: HashSet<usize>,
    right_matched: HashSet<usize>,
}

impl AlignmentMap {
    fn from_pairs(pairs: Vec<(usize, usize)>) -> Self {
        let left_matched = pairs.iter().map(|&(i, _)| i).collect();
        let right_matched = pairs.iter().map(|&(_, j)| j).collect();
        Self {
            pairs,
            left_matched,
            right_matched,
        }
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether left line `i` participates in any pair.
    pub fn contains_left(&self, i: usize) -> bool {
        self.left_matched.contains(&i)
    }

    /// Whether right line `j` participates in any pair.
    pub fn contains_right(&self, j: usize) -> bool {
        self.right_matched.contains(&j)
    }

    /// Pairs sorted by left index must be strictly increasing in the right
    /// index. Holds by construction of the backtrack; exposed for tests.
    pub fn is_monotonic(&self) -> bool {
        self.pairs
            .windows(2)
            .all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1)
    }
}

/// Compute the LCS alignment between two line sequences.
///
/// Equality is exact full-line string equality. O(m·n) time and space;
/// every content change recomputes from scratch, which is fine for
/// interactive documents and an accepted latency cost for huge ones.
pub fn align(left: &[String], right: &[String]) -> AlignmentMap {
    let m = left.len();
    let n = right.len();

    let mut dp = vec![vec![0u32; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            if left[i - 1] == right[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    // Backtrack from the far corner. On a tie between the two moves we
    // step through the right sequence first, which fixes which of several
    // equally long alignments wins when lines repeat.
    let mut pairs = Vec::new();
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        if left[i - 1] == right[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();

    log::trace!("aligned {}x{} lines, {} matched", m, n, pairs.len());
    AlignmentMap::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_sequences_match_every_index() {
        let a = lines(&["a", "b", "c"]);
        let map = align(&a, &a);
        assert_eq!(map.pairs(), &[(0, 0), (1, 1), (2, 2)]);
        for i in 0..3 {
            assert!(map.contains_left(i));
            assert!(map.contains_right(i));
        }
    }

    #[test]
    fn empty_left_matches_nothing() {
        let map = align(&[], &lines(&["a", "b", "c"]));
        assert!(map.is_empty());
        assert!(!map.contains_right(0));
    }

    #[test]
    fn empty_right_matches_nothing() {
        let map = align(&lines(&["a", "b"]), &[]);
        assert!(map.is_empty());
    }

    #[test]
    fn single_changed_line() {
        let map = align(&lines(&["a", "b", "c"]), &lines(&["a", "x", "c"]));
        assert_eq!(map.pairs(), &[(0, 0), (2, 2)]);
        assert!(!map.contains_left(1));
        assert!(!map.contains_right(1));
    }

    #[test]
    fn insertion_shifts_matches() {
        let map = align(&lines(&["a", "b"]), &lines(&["a", "new", "b"]));
        assert_eq!(map.pairs(), &[(0, 0), (1, 2)]);
    }

    #[test]
    fn duplicate_lines_tie_break_is_deterministic() {
        // Two equally long alignments exist; the backtrack advances the
        // right index on ties, so the later left line wins the pairing.
        let map = align(&lines(&["x", "x"]), &lines(&["x"]));
        assert_eq!(map.pairs(), &[(1, 0)]);
    }

    #[test]
    fn duplicate_lines_mirrored() {
        let map = align(&lines(&["x"]), &lines(&["x", "x"]));
        assert_eq!(map.pairs(), &[(0, 1)]);
    }

    #[test]
    fn pairs_are_strictly_monotonic() {
        let left = lines(&["a", "b", "a", "c", "b", "d"]);
        let right = lines(&["b", "a", "d", "a", "b", "c"]);
        let map = align(&left, &right);
        assert!(map.is_monotonic());
        for &(i, j) in map.pairs() {
            assert_eq!(left[i], right[j]);
        }
    }

    #[test]
    fn equality_is_exact() {
        // No trimming or case folding.
        let map = align(&lines(&["a ", "B"]), &lines(&["a", "b"]));
        assert!(map.is_empty());
    }
}
