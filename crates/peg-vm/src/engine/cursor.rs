//! Input cursor: an immutable byte buffer and a mutable offset into it.
//!
//! The cursor never copies the input; callers are responsible for keeping
//! the buffer alive for the duration of a parse.

/// Zero-based offset into the input buffer.
pub type Pos = usize;

pub struct Cursor<'i> {
    input: &'i [u8],
    pos: Pos,
}

impl<'i> Cursor<'i> {
    pub fn new(input: &'i [u8]) -> Self {
        Self { input, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Snapshot the offset for a transaction marker.
    #[inline]
    pub fn snapshot(&self) -> Pos {
        self.pos
    }

    /// Restore a previously snapshotted offset.
    #[inline]
    pub fn restore(&mut self, pos: Pos) {
        self.pos = pos;
    }

    pub fn match_literal(&mut self, bytes: &[u8]) -> bool {
        if self.input[self.pos..].starts_with(bytes) {
            self.pos += bytes.len();
            true
        } else {
            false
        }
    }

    pub fn match_class(&mut self, class: &peg_ir::ByteClass) -> bool {
        match self.input.get(self.pos) {
            Some(&b) if class.contains(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    pub fn match_any(&mut self, n: usize) -> bool {
        if self.pos + n <= self.input.len() {
            self.pos += n;
            true
        } else {
            false
        }
    }

    pub fn slice(&self, start: Pos, end: Pos) -> &'i [u8] {
        &self.input[start..end]
    }
}
