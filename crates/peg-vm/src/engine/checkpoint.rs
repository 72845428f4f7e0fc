//! Transaction marker: the `(pos, depth)` pair every speculative combinator
//! snapshots on entry and restores on failure.

use super::cursor::Pos;

#[derive(Clone, Copy, Debug)]
pub struct Checkpoint {
    pub pos: Pos,
    pub depth: usize,
}
