// Pane buffer: line-based text storage with basic editing operations.
//
// Line storage uses the same split semantics as the alignment engine:
// empty text is one empty line, a trailing break is a trailing empty line.

use riffle_core::Position;
use riffle_diff::{join_lines, split_lines};

/// Find the largest byte offset <= idx that is a valid char boundary in the string.
pub fn floor_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut i = idx;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

pub struct PaneBuffer {
    pub lines: Vec<String>,
}

impl PaneBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a buffer from already-normalized text.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }

    /// Replace the whole content. `text` must already be normalized.
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
    }

    pub fn text(&self) -> String {
        join_lines(&self.lines)
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(|s| s.as_str())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn insert_char(&mut self, pos: Position, ch: char) {
        if pos.line >= self.lines.len() {
            return;
        }
        let col = floor_char_boundary(&self.lines[pos.line], pos.col.min(self.lines[pos.line].len()));
        self.lines[pos.line].insert(col, ch);
    }

    /// Insert a break-free string at `pos`, returning the position after it.
    pub fn insert_str(&mut self, pos: Position, s: &str) -> Position {
        if pos.line >= self.lines.len() || s.is_empty() {
            return pos;
        }
        let col = floor_char_boundary(&self.lines[pos.line], pos.col.min(self.lines[pos.line].len()));
        self.lines[pos.line].insert_str(col, s);
        Position {
            line: pos.line,
            col: col + s.len(),
        }
    }

    pub fn delete_char(&mut self, pos: Position) {
        if pos.line >= self.lines.len() {
            return;
        }
        let line_len = self.lines[pos.line].len();
        let col = floor_char_boundary(&self.lines[pos.line], pos.col);
        if col < line_len {
            self.lines[pos.line].remove(col);
        } else if pos.line + 1 < self.lines.len() {
            // Delete at end of line: merge with next line
            let next = self.lines.remove(pos.line + 1);
            self.lines[pos.line].push_str(&next);
        }
    }

    /// Backspace: delete the character before pos, returning the new cursor position.
    pub fn backspace(&mut self, pos: Position) -> Position {
        if pos.line >= self.lines.len() {
            return pos;
        }
        if pos.col > 0 {
            let col = floor_char_boundary(&self.lines[pos.line], pos.col.min(self.lines[pos.line].len()));
            if col > 0 {
                let prev = floor_char_boundary(&self.lines[pos.line], col - 1);
                self.lines[pos.line].remove(prev);
                return Position {
                    line: pos.line,
                    col: prev,
                };
            }
            Position {
                line: pos.line,
                col: 0,
            }
        } else if pos.line > 0 {
            // Backspace at start of line: merge with previous line
            let current = self.lines.remove(pos.line);
            let new_col = self.lines[pos.line - 1].len();
            self.lines[pos.line - 1].push_str(&current);
            Position {
                line: pos.line - 1,
                col: new_col,
            }
        } else {
            pos
        }
    }

    pub fn insert_newline(&mut self, pos: Position) -> Position {
        if pos.line >= self.lines.len() {
            return pos;
        }
        let col = floor_char_boundary(&self.lines[pos.line], pos.col.min(self.lines[pos.line].len()));
        let rest = self.lines[pos.line][col..].to_string();
        self.lines[pos.line].truncate(col);
        self.lines.insert(pos.line + 1, rest);
        Position {
            line: pos.line + 1,
            col: 0,
        }
    }
}

impl Default for PaneBuffer {
    fn default() -> Self {
        Self::new()
    }
}
