//! Pseudo-legal move generation by walking step vectors over the mailbox.

use super::Board;
use crate::{
    chessmove::{Move, MoveList},
    colour::Colour,
    piece::{Cell, Piece},
    square::{Direction, Square},
};

impl Board {
    /// Record a move from `from` to `dest` if the rules allow one, returning whether a ray may continue past `dest`.
    #[inline]
    fn try_push_move(&self, v: &mut MoveList, colour: Colour, piece: Piece, from: Square, dest: Square) -> bool {
        match self.mailbox[dest] {
            Cell::Empty => {
                v.push(Move::new(from, dest, colour, piece, None));
                true
            }
            Cell::OffBoard => false,
            Cell::Occupied(owner, _) if owner == colour => false,
            Cell::Occupied(_, captured) => {
                v.push(Move::new(from, dest, colour, piece, Some(captured)));
                false
            }
        }
    }

    /// One step per direction.
    fn leap(&self, v: &mut MoveList, colour: Colour, piece: Piece, from: Square, directions: &[Direction]) {
        for &dir in directions {
            if let Some(dest) = from.travel(dir) {
                self.try_push_move(v, colour, piece, from, dest);
            }
        }
    }

    /// Walk each direction until something other than an empty square is reached.
    fn slide(&self, v: &mut MoveList, colour: Colour, piece: Piece, from: Square, directions: &[Direction]) {
        for &dir in directions {
            let mut sq = from.travel(dir);
            while let Some(dest) = sq {
                if !self.try_push_move(v, colour, piece, from, dest) {
                    break;
                }
                sq = dest.travel(dir);
            }
        }
    }

    fn generate_family(&self, v: &mut MoveList, colour: Colour, piece: Piece) {
        for &from in self.squares_of(colour, piece) {
            match piece {
                Piece::King => self.leap(v, colour, piece, from, &Direction::KING),
                Piece::Knight => self.leap(v, colour, piece, from, &Direction::KNIGHT),
                Piece::Bishop => self.slide(v, colour, piece, from, &Direction::BISHOP),
                Piece::Rook => self.slide(v, colour, piece, from, &Direction::ROOK),
                Piece::Queen => self.slide(v, colour, piece, from, &Direction::KING),
                // Pawns never reach the board.
                Piece::Pawn => {}
            }
        }
    }

    /// Every pseudo-legal move for `colour`, whoever is on move.
    pub(crate) fn generate_for(&self, colour: Colour, v: &mut MoveList) {
        for piece in [Piece::King, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::Knight] {
            self.generate_family(v, colour, piece);
        }
    }

    /// King moves for the side to move.
    pub fn generate_kings(&self, v: &mut MoveList) {
        self.generate_family(v, self.side, Piece::King);
    }

    /// Bishop moves for the side to move.
    pub fn generate_bishops(&self, v: &mut MoveList) {
        self.generate_family(v, self.side, Piece::Bishop);
    }

    /// Rook moves for the side to move.
    pub fn generate_rooks(&self, v: &mut MoveList) {
        self.generate_family(v, self.side, Piece::Rook);
    }

    /// Queen moves for the side to move.
    pub fn generate_queens(&self, v: &mut MoveList) {
        self.generate_family(v, self.side, Piece::Queen);
    }

    /// Knight moves for the side to move.
    pub fn generate_knights(&self, v: &mut MoveList) {
        self.generate_family(v, self.side, Piece::Knight);
    }

    /// All pseudo-legal moves for the side to move: kings, bishops, rooks, queens, then knights.
    ///
    /// Moves that leave the mover's own king attacked are included; pawns are never generated.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn generate(&self, v: &mut MoveList) {
        self.generate_for(self.side, v);
    }
}
