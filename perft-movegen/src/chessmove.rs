use std::fmt::Display;

use tinyvec::TinyVec;

use crate::{colour::Colour, piece::Piece, square::Square};

/// A list of moves, stored inline up to the usual pseudo-legal maximum.
pub type MoveList = TinyVec<[Move; 256]>;

/// A single ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// The square the piece moves from.
    pub from: Square,
    /// The square the piece lands on.
    pub dest: Square,
    /// The colour of the moving piece; a captured piece is always the opponent's.
    pub colour: Colour,
    /// The moving piece.
    pub piece: Piece,
    /// The piece standing on `dest` before the move, if any.
    pub capture: Option<Piece>,
}

impl Default for Move {
    fn default() -> Self {
        Self { from: Square::default(), dest: Square::default(), colour: Colour::White, piece: Piece::King, capture: None }
    }
}

impl Move {
    #[must_use]
    #[inline]
    pub const fn new(from: Square, dest: Square, colour: Colour, piece: Piece, capture: Option<Piece>) -> Self {
        Self { from, dest, colour, piece, capture }
    }

    #[must_use]
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.dest)
    }
}
