// riffle-session: the two-pane reconciliation session.
//
// Owns both panes and the derived alignment state. Every content mutation
// (a committed edit, a copy, or fresh external text) triggers a full
// synchronous recomputation of the alignment map and per-side statuses
// before the next observation. Nothing incremental is kept across edits.

pub mod persist;

use riffle_core::{CopyRequest, DiffStatus, Side};
use riffle_diff::{align, classify, copy_line, normalize_breaks, AlignmentMap};
use riffle_editor::input::PaneAction;
use riffle_editor::PaneState;

pub struct DiffSession {
    left: PaneState,
    right: PaneState,
    pub left_title: String,
    pub right_title: String,
    map: AlignmentMap,
    left_status: Vec<DiffStatus>,
    right_status: Vec<DiffStatus>,
    /// Shared vertical scroll offset: both panes scroll in lockstep.
    scroll: usize,
    generation: u64,
}

impl DiffSession {
    /// Start a session from two raw text values. CRLF breaks are
    /// normalized here, once, on the way in.
    pub fn new(left_text: &str, right_text: &str) -> Self {
        let mut session = Self {
            left: PaneState::from_text(&normalize_breaks(left_text)),
            right: PaneState::from_text(&normalize_breaks(right_text)),
            left_title: "Left".to_string(),
            right_title: "Right".to_string(),
            map: AlignmentMap::default(),
            left_status: Vec::new(),
            right_status: Vec::new(),
            scroll: 0,
            generation: 0,
        };
        session.recompute();
        session
    }

    fn pane(&self, side: Side) -> &PaneState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn pane_mut(&mut self, side: Side) -> &mut PaneState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Full recomputation: alignment map, then per-side statuses.
    fn recompute(&mut self) {
        self.map = align(&self.left.buffer.lines, &self.right.buffer.lines);
        self.left_status = classify(Side::Left, self.left.line_count(), &self.map);
        self.right_status = classify(Side::Right, self.right.line_count(), &self.map);
        self.scroll = self.scroll.min(self.max_scroll());
        self.generation += 1;
        log::debug!(
            "recompute: {}x{} lines, {} matched",
            self.left.line_count(),
            self.right.line_count(),
            self.map.len()
        );
    }

    // ──────────────────────────────────────────────
    // Ingestion and retrieval
    // ──────────────────────────────────────────────

    /// Replace one side with externally supplied text.
    pub fn set_text(&mut self, side: Side, text: &str) {
        self.pane_mut(side).set_text(&normalize_breaks(text));
        self.recompute();
    }

    /// The current reconciled content of one side, at any time.
    pub fn text(&self, side: Side) -> String {
        self.pane(side).text()
    }

    pub fn line_count(&self, side: Side) -> usize {
        self.pane(side).line_count()
    }

    pub fn title(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_title,
            Side::Right => &self.right_title,
        }
    }

    // ──────────────────────────────────────────────
    // Editing
    // ──────────────────────────────────────────────

    /// Forward an action to one pane. Edits stay local to the buffer; the
    /// diff is refreshed when the pane commits.
    pub fn handle_action(&mut self, side: Side, action: PaneAction) {
        self.pane_mut(side).handle_action(action);
    }

    /// Commit pending edits on a pane — the focus-loss equivalent. A
    /// recompute only happens if the buffer actually changed.
    pub fn commit(&mut self, side: Side) {
        if self.pane(side).is_dirty() {
            self.pane_mut(side).mark_clean();
            self.recompute();
        }
    }

    pub fn cursor(&self, side: Side) -> riffle_core::Position {
        self.pane(side).cursor
    }

    // ──────────────────────────────────────────────
    // Diff queries
    // ──────────────────────────────────────────────

    pub fn alignment(&self) -> &AlignmentMap {
        &self.map
    }

    /// Per-line statuses for one side, index-aligned with its lines.
    pub fn statuses(&self, side: Side) -> &[DiffStatus] {
        match side {
            Side::Left => &self.left_status,
            Side::Right => &self.right_status,
        }
    }

    /// Indices of the navigable distinct lines on one side.
    pub fn mismatches(&self, side: Side) -> Vec<usize> {
        self.statuses(side)
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_distinct())
            .map(|(i, _)| i)
            .collect()
    }

    /// First distinct line strictly after `from`, if any.
    pub fn next_mismatch(&self, side: Side, from: usize) -> Option<usize> {
        self.statuses(side)
            .iter()
            .enumerate()
            .skip(from + 1)
            .find(|(_, s)| s.is_distinct())
            .map(|(i, _)| i)
    }

    /// Last distinct line strictly before `from`, if any.
    pub fn prev_mismatch(&self, side: Side, from: usize) -> Option<usize> {
        self.statuses(side)
            .iter()
            .enumerate()
            .take(from)
            .rev()
            .find(|(_, s)| s.is_distinct())
            .map(|(i, _)| i)
    }

    // ──────────────────────────────────────────────
    // Copy action
    // ──────────────────────────────────────────────

    /// Copy one line across to the opposite side, then recompute.
    ///
    /// Out-of-range indices and empty source lines are silent no-ops; the
    /// reconciled text is already normalized, so it goes back in without a
    /// second normalization pass.
    pub fn copy(&mut self, request: CopyRequest) {
        let target = request.source.opposite();
        let new_text = copy_line(
            &self.pane(request.source).buffer.lines,
            &self.pane(target).buffer.lines,
            request.index,
        );
        self.pane_mut(target).set_text(&new_text);
        self.recompute();
    }

    // ──────────────────────────────────────────────
    // Scroll sync
    // ──────────────────────────────────────────────

    fn max_scroll(&self) -> usize {
        self.left
            .line_count()
            .max(self.right.line_count())
            .saturating_sub(1)
    }

    /// Scrolling either pane moves both; the offset is clamped to the
    /// taller side.
    pub fn set_scroll(&mut self, offset: usize) {
        let new_offset = offset.min(self.max_scroll());
        if new_offset != self.scroll {
            self.scroll = new_offset;
            self.generation += 1;
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
