// riffle-diff: line alignment, diff classification, and line copy.

pub mod align;
pub mod classify;
pub mod lines;
pub mod reconcile;

pub use align::{align, AlignmentMap};
pub use classify::classify;
pub use lines::{join_lines, normalize_breaks, split_lines};
pub use reconcile::copy_line;
