//! Clamped cursor over a flattened, filtered item list.
//!
//! Shared by the command palette and the data table: directional steps move
//! by one with no wraparound, and length changes (filter shrink, reload)
//! clamp the index back into range so it never points past the end, even
//! transiently.

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCursor {
    index: usize,
    len: usize,
}

impl ListCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Cursor index; meaningful only while `len > 0`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Re-announce the list length, clamping the cursor into the new range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn down(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Jump directly to an index (mouse hover unifies with the keyboard
    /// cursor). Out-of-range positions are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// The confirmable index, `None` for an empty list so confirm is a
    /// no-op.
    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }
}
