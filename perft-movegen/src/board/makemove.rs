//! In-place make and unmake.
//!
//! Both operations check the move against the board before touching anything,
//! so an `Err` always leaves the position as it was.

use super::Board;
use crate::{
    chessmove::{Move, MoveList},
    colour::Colour,
    error::{BoardError, Result},
    piece::{Cell, Piece},
    square::Square,
};

impl Board {
    fn check_families(m: Move) -> Result<()> {
        if m.piece == Piece::Pawn {
            return Err(BoardError::UnsupportedMovingPiece(m.piece));
        }
        if let Some(captured @ (Piece::King | Piece::Pawn)) = m.capture {
            return Err(BoardError::IllegalCapture(captured));
        }
        Ok(())
    }

    /// Slot of the moving piece in its location list, or `None` for a king.
    fn find_mover(&self, colour: Colour, piece: Piece, square: Square) -> Result<Option<usize>> {
        if piece == Piece::King {
            return match self.kings[colour.index()] {
                Some(king) if king == square => Ok(None),
                _ => Err(BoardError::Desync { square }),
            };
        }
        self.piecelist.position(colour, piece, square).map(Some).ok_or(BoardError::Desync { square })
    }

    /// Apply a move and pass the turn.
    ///
    /// # Errors
    /// Pawn moves fail with [`BoardError::UnsupportedMovingPiece`], king or pawn
    /// captures with [`BoardError::IllegalCapture`], and a move that does not
    /// match the pieces on the board with [`BoardError::Desync`].
    #[inline]
    pub fn make(&mut self, m: Move) -> Result<()> {
        Self::check_families(m)?;

        if self.mailbox[m.from] != Cell::Occupied(m.colour, m.piece) {
            return Err(BoardError::Desync { square: m.from });
        }
        let target = m.capture.map_or(Cell::Empty, |captured| Cell::Occupied(!m.colour, captured));
        if self.mailbox[m.dest] != target {
            return Err(BoardError::Desync { square: m.dest });
        }

        let mover = self.find_mover(m.colour, m.piece, m.from)?;
        let victim = match m.capture {
            Some(captured) => {
                Some(self.piecelist.position(!m.colour, captured, m.dest).ok_or(BoardError::Desync { square: m.dest })?)
            }
            None => None,
        };

        self.mailbox[m.from] = Cell::Empty;
        self.mailbox[m.dest] = Cell::Occupied(m.colour, m.piece);

        match mover {
            None => self.kings[m.colour.index()] = Some(m.dest),
            Some(index) => self.piecelist.move_piece(m.colour, m.piece, index, m.dest),
        }

        if let (Some(captured), Some(index)) = (m.capture, victim) {
            self.piecelist.remove_piece(!m.colour, captured, index);
        }

        self.side = !self.side;
        Ok(())
    }

    /// Take back the most recently made move, which must be passed in again.
    ///
    /// Make and unmake pairs must nest: undoing anything but the latest move
    /// is reported as [`BoardError::Desync`] where detectable.
    ///
    /// # Errors
    /// The same conditions as [`Board::make`], checked against the position after the move.
    #[inline]
    pub fn unmake(&mut self, m: Move) -> Result<()> {
        Self::check_families(m)?;

        if self.mailbox[m.dest] != Cell::Occupied(m.colour, m.piece) {
            return Err(BoardError::Desync { square: m.dest });
        }
        if !self.mailbox[m.from].is_empty() {
            return Err(BoardError::Desync { square: m.from });
        }

        let mover = self.find_mover(m.colour, m.piece, m.dest)?;

        self.mailbox[m.from] = Cell::Occupied(m.colour, m.piece);
        match mover {
            None => self.kings[m.colour.index()] = Some(m.from),
            Some(index) => self.piecelist.move_piece(m.colour, m.piece, index, m.from),
        }

        if let Some(captured) = m.capture {
            self.mailbox[m.dest] = Cell::Occupied(!m.colour, captured);
            self.piecelist.add_piece(!m.colour, captured, m.dest);
        } else {
            self.mailbox[m.dest] = Cell::Empty;
        }

        self.side = !self.side;
        Ok(())
    }

    /// True if any pseudo-legal move of `colour`'s opponent captures `colour`'s king.
    ///
    /// Generates for the opponent regardless of who is on move, and leaves the board untouched.
    #[must_use]
    pub fn is_check(&self, colour: Colour) -> bool {
        if self.kings[colour.index()].is_none() {
            return false;
        }
        let mut moves = MoveList::new();
        self.generate_for(!colour, &mut moves);
        moves.iter().any(|m| m.capture == Some(Piece::King))
    }
}
