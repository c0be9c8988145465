// Per-line diff classification derived from the alignment map.

use riffle_core::{DiffStatus, Side};

use crate::align::AlignmentMap;

/// Classify every line index on `side` as matched or distinct.
///
/// A line is `Matched` if it appears in any pair of the map for that side.
/// Membership alone decides the marker, so with repeated lines a side can
/// be matched without a one-to-one partner on the other side. Indices past
/// the other side's length trivially have no pair and come out `Distinct`.
pub fn classify(side: Side, line_count: usize, map: &AlignmentMap) -> Vec<DiffStatus> {
    (0..line_count)
        .map(|idx| {
            let matched = match side {
                Side::Left => map.contains_left(idx),
                Side::Right => map.contains_right(idx),
            };
            if matched {
                DiffStatus::Matched
            } else {
                DiffStatus::Distinct
            }
        })
        .collect()
}
