// riffle-editor: editable pane state for one side of the comparison.

pub mod buffer;
pub mod input;

use riffle_core::Position;

use buffer::{floor_char_boundary, PaneBuffer};
use input::PaneAction;

pub use input::{key_to_pane_action, INDENT};

/// One editable pane: buffer, cursor, and an edited-since-commit flag.
///
/// Edits only touch the buffer; the session recomputes the alignment when
/// the pane commits (the focus-loss equivalent), not on every keystroke.
/// The cursor can sit on any line the splitter produced, including the
/// trailing empty line of text that ends in a line break.
pub struct PaneState {
    pub buffer: PaneBuffer,
    /// Cursor position; `col` is a byte offset into the line.
    pub cursor: Position,
    /// Column vertical moves return to after passing through shorter lines.
    desired_col: usize,
    dirty: bool,
}

impl PaneState {
    pub fn new() -> Self {
        Self {
            buffer: PaneBuffer::new(),
            cursor: Position::new(0, 0),
            desired_col: 0,
            dirty: false,
        }
    }

    /// Build a pane from already-normalized text.
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: PaneBuffer::from_text(text),
            cursor: Position::new(0, 0),
            desired_col: 0,
            dirty: false,
        }
    }

    /// Replace the whole content with already-normalized text.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.clamp_cursor();
        self.dirty = false;
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Whether the buffer changed since the last commit or set_text.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ──────────────────────────────────────────────
    // Cursor movement
    // ──────────────────────────────────────────────

    /// Pull the cursor into the buffer, snapping to a char boundary.
    fn clamp_cursor(&mut self) {
        self.cursor.line = self.cursor.line.min(self.buffer.line_count().saturating_sub(1));
        let line = self.buffer.line(self.cursor.line).unwrap_or("");
        self.cursor.col = floor_char_boundary(line, self.cursor.col.min(line.len()));
    }

    /// Jump to `line`, landing on the remembered column or the line end,
    /// whichever comes first. The remembered column survives the hop so a
    /// later move onto a longer line restores it.
    fn goto_line(&mut self, line: usize) {
        self.cursor.line = line;
        let text = self.buffer.line(line).unwrap_or("");
        self.cursor.col = floor_char_boundary(text, self.desired_col.min(text.len()));
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.goto_line(self.cursor.line - 1);
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.buffer.line_count() {
            self.goto_line(self.cursor.line + 1);
        }
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            let line = self.buffer.line(self.cursor.line).unwrap_or("");
            let col = self.cursor.col.min(line.len());
            self.cursor.col = line[..col]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.buffer.line(self.cursor.line).map_or(0, |l| l.len());
        }
        self.desired_col = self.cursor.col;
    }

    fn move_right(&mut self) {
        let line = self.buffer.line(self.cursor.line).unwrap_or("");
        if self.cursor.col < line.len() {
            let step = line[self.cursor.col..]
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
            self.cursor.col += step;
        } else if self.cursor.line + 1 < self.buffer.line_count() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
        self.desired_col = self.cursor.col;
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos;
        self.desired_col = pos.col;
    }

    // ──────────────────────────────────────────────
    // Actions
    // ──────────────────────────────────────────────

    /// Apply a pane action.
    pub fn handle_action(&mut self, action: PaneAction) {
        // Clamp first so a stale cursor can never index out of bounds.
        self.clamp_cursor();

        match action {
            PaneAction::InsertChar(ch) => {
                self.buffer.insert_char(self.cursor, ch);
                self.cursor.col += ch.len_utf8();
                self.desired_col = self.cursor.col;
                self.dirty = true;
            }
            PaneAction::Enter => {
                let new_pos = self.buffer.insert_newline(self.cursor);
                self.set_cursor(new_pos);
                self.dirty = true;
            }
            PaneAction::Indent => {
                let new_pos = self.buffer.insert_str(self.cursor, INDENT);
                self.set_cursor(new_pos);
                self.dirty = true;
            }
            PaneAction::Backspace => {
                let new_pos = self.buffer.backspace(self.cursor);
                self.set_cursor(new_pos);
                self.dirty = true;
            }
            PaneAction::Delete => {
                self.buffer.delete_char(self.cursor);
                self.dirty = true;
            }
            PaneAction::MoveUp => self.move_up(),
            PaneAction::MoveDown => self.move_down(),
            PaneAction::MoveLeft => self.move_left(),
            PaneAction::MoveRight => self.move_right(),
            PaneAction::Home => {
                self.cursor.col = 0;
                self.desired_col = 0;
            }
            PaneAction::End => {
                self.cursor.col = self.buffer.line(self.cursor.line).map_or(0, |l| l.len());
                self.desired_col = self.cursor.col;
            }
            PaneAction::SetCursor { line, col } => {
                let line = line.min(self.buffer.line_count().saturating_sub(1));
                // col is a character index (from a click) — convert to byte offset
                let byte_col = if let Some(line_str) = self.buffer.line(line) {
                    line_str
                        .char_indices()
                        .nth(col)
                        .map(|(i, _)| i)
                        .unwrap_or(line_str.len())
                } else {
                    0
                };
                self.set_cursor(Position::new(line, byte_col));
            }
        }
    }
}

impl Default for PaneState {
    fn default() -> Self {
        Self::new()
    }
}
