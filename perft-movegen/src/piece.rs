use std::fmt::Display;

use crate::colour::Colour;

/// A piece family, without colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// The families that live in location lists; kings have a dedicated square instead.
    pub const LISTED: [Self; 4] = [Self::Knight, Self::Bishop, Self::Rook, Self::Queen];

    /// Slot of this family in the per-colour location lists, if it has one.
    #[must_use]
    #[inline]
    pub const fn list_index(self) -> Option<usize> {
        match self {
            Self::Knight => Some(0),
            Self::Bishop => Some(1),
            Self::Rook => Some(2),
            Self::Queen => Some(3),
            Self::Pawn | Self::King => None,
        }
    }

    /// Parse a placement letter; uppercase is white.
    #[must_use]
    pub const fn from_fen_char(c: char) -> Option<(Colour, Self)> {
        let piece = match c.to_ascii_lowercase() {
            'k' => Self::King,
            'q' => Self::Queen,
            'r' => Self::Rook,
            'b' => Self::Bishop,
            'n' => Self::Knight,
            _ => return None,
        };
        let colour = if c.is_ascii_uppercase() { Colour::White } else { Colour::Black };
        Some((colour, piece))
    }

    /// Placement letter for this piece.
    #[must_use]
    pub const fn fen_char(self, colour: Colour) -> char {
        let c = match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        };
        match colour {
            Colour::White => c.to_ascii_uppercase(),
            Colour::Black => c,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Pawn => '♙',
            Self::Knight => '♘',
            Self::Bishop => '♗',
            Self::Rook => '♖',
            Self::Queen => '♕',
            Self::King => '♔',
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        };
        write!(f, "{name}")
    }
}

/// The contents of one mailbox cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Part of the sentinel ring around the playing area.
    OffBoard,
    #[default]
    Empty,
    Occupied(Colour, Piece),
}

impl Cell {
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The colour of the piece on this cell, if any.
    #[must_use]
    #[inline]
    pub const fn colour(self) -> Option<Colour> {
        match self {
            Self::Occupied(colour, _) => Some(colour),
            Self::OffBoard | Self::Empty => None,
        }
    }

    /// Placement letter, `.` for an empty square and `#` for the sentinel ring.
    #[must_use]
    pub const fn fen_char(self) -> char {
        match self {
            Self::OffBoard => '#',
            Self::Empty => '.',
            Self::Occupied(colour, piece) => piece.fen_char(colour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Piece};
    use crate::Colour;

    #[test]
    fn fen_letters() {
        assert_eq!(Piece::from_fen_char('R'), Some((Colour::White, Piece::Rook)));
        assert_eq!(Piece::from_fen_char('n'), Some((Colour::Black, Piece::Knight)));
        assert_eq!(Piece::from_fen_char('p'), None);
        assert_eq!(Piece::from_fen_char('x'), None);
        for piece in Piece::LISTED {
            for colour in Colour::ALL {
                assert_eq!(Piece::from_fen_char(piece.fen_char(colour)), Some((colour, piece)));
            }
        }
    }

    #[test]
    fn list_slots_are_distinct() {
        let slots: Vec<_> = Piece::LISTED.iter().filter_map(|p| p.list_index()).collect();
        assert_eq!(slots, vec![0, 1, 2, 3]);
        assert_eq!(Piece::King.list_index(), None);
        assert_eq!(Piece::Pawn.list_index(), None);
    }

    #[test]
    fn cell_colour() {
        assert_eq!(Cell::Occupied(Colour::Black, Piece::Queen).colour(), Some(Colour::Black));
        assert_eq!(Cell::Empty.colour(), None);
        assert_eq!(Cell::OffBoard.colour(), None);
        assert_eq!(Cell::Occupied(Colour::White, Piece::King).fen_char(), 'K');
    }
}
