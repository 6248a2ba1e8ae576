use std::ops::{Index, IndexMut};

use once_cell::sync::Lazy;

use crate::{
    piece::Cell,
    square::{Square, BOARD_CELLS},
};

/// Empty playing area inside an intact sentinel ring.
static EMPTY: Lazy<[Cell; BOARD_CELLS]> = Lazy::new(|| {
    let mut cells = [Cell::OffBoard; BOARD_CELLS];
    for square in Square::playing() {
        cells[square.index()] = Cell::Empty;
    }
    cells
});

/// The occupancy grid, sentinels included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mailbox([Cell; BOARD_CELLS]);

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailbox {
    pub fn new() -> Self {
        Self(*EMPTY)
    }
}

impl Index<Square> for Mailbox {
    type Output = Cell;

    #[inline]
    fn index(&self, index: Square) -> &Self::Output {
        // Square is always below BOARD_CELLS.
        &self.0[index.index()]
    }
}

impl IndexMut<Square> for Mailbox {
    #[inline]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}
