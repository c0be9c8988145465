// riffle-core: shared types for the riffle reconciliation engine.

// ──────────────────────────────────────────────
// Sides
// ──────────────────────────────────────────────

/// One of the two panes being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// ──────────────────────────────────────────────
// Diff status
// ──────────────────────────────────────────────

/// Per-line classification derived from the alignment map.
/// A `Distinct` line gets a diff marker and a copy affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    Matched,
    Distinct,
}

impl DiffStatus {
    pub fn is_distinct(self) -> bool {
        matches!(self, DiffStatus::Distinct)
    }
}

/// A single-interaction request to copy one line across to the other side.
/// Built transiently from user input and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyRequest {
    pub source: Side,
    pub index: usize,
}

// ──────────────────────────────────────────────
// Text positions
// ──────────────────────────────────────────────

/// A cursor position within a pane buffer. `col` is a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

// ──────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
