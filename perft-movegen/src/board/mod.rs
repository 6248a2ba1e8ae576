use std::{convert::TryFrom, fmt::Display};

use colored::Colorize;

use crate::{
    colour::Colour,
    error::{BoardError, Result},
    piece::{Cell, Piece},
    square::{File, Rank, Square, BOARD_CELLS},
};

mod generate;
mod mailbox;
mod makemove;
mod piecelist;

use mailbox::Mailbox;
use piecelist::Piecelist;

/// A chess position on a padded mailbox, updated in place by make and unmake.
///
/// Each search line owns its own `Board`; parallel callers clone one per worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Occupancy of every cell, sentinels included.
    mailbox: Mailbox,
    /// King square per colour. A side may lack a king in partial test setups.
    kings: [Option<Square>; 2],
    /// Locations of all other pieces.
    piecelist: Piecelist,
    /// The side to move.
    side: Colour,
}

impl Display for Board {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let square = Square::from_rank_file(rank, file);
                let square_colour = |s: &str| if (rank as u8 + file as u8) & 1 == 0 { s.on_green() } else { s.on_white() };

                if let Cell::Occupied(colour, piece) = self.mailbox[square] {
                    let c = piece.glyph().to_string();
                    let c = if colour == Colour::White { c.bright_white() } else { c.black() };
                    write!(f, "{}", square_colour(&format!("{c} ")))?;
                } else {
                    write!(f, "{}", square_colour("  "))?;
                }
            }
            writeln!(f)?;
        }
        if self.side == Colour::White {
            writeln!(f, "White to move.")?;
        } else {
            writeln!(f, "Black to move.")?;
        }
        Ok(())
    }
}

impl Board {
    fn empty() -> Self {
        Self { mailbox: Mailbox::new(), kings: [None; 2], piecelist: Piecelist::new(), side: Colour::White }
    }

    /// Parse the placement and side-to-move fields of a FEN string; later fields are ignored.
    ///
    /// # Errors
    /// Fails on pawns or any other unknown placement character, on a placement
    /// that is not exactly 8x8, on a missing side-to-move field, and when either
    /// side has more than one king.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(BoardError::MalformedPlacement)?;
        let side = fields.next().ok_or(BoardError::MissingSideToMove)?;

        let mut b = Self::empty();
        let mut king_count = [0_usize; 2];

        let mut rows = 0;
        for (row, text) in placement.split('/').enumerate() {
            // Placement text lists rank 8 first.
            let rank = 7_usize.checked_sub(row).map(|r| Rank::ALL[r]).ok_or(BoardError::MalformedPlacement)?;
            let mut file = 0_u8;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    #[allow(clippy::cast_possible_truncation)]
                    let skip = skip as u8;
                    file += skip;
                    if file > 8 {
                        return Err(BoardError::MalformedPlacement);
                    }
                    continue;
                }

                let (colour, piece) = Piece::from_fen_char(c).ok_or(BoardError::InvalidPlacementSymbol(c))?;
                let file_of = File::try_from(file).map_err(|_| BoardError::MalformedPlacement)?;
                let square = Square::from_rank_file(rank, file_of);

                b.mailbox[square] = Cell::Occupied(colour, piece);
                if piece == Piece::King {
                    b.kings[colour.index()] = Some(square);
                    king_count[colour.index()] += 1;
                } else {
                    b.piecelist.add_piece(colour, piece, square);
                }
                file += 1;
            }
            if file != 8 {
                return Err(BoardError::MalformedPlacement);
            }
            rows += 1;
        }
        if rows != 8 {
            return Err(BoardError::MalformedPlacement);
        }

        for colour in Colour::ALL {
            let count = king_count[colour.index()];
            if count > 1 {
                return Err(BoardError::KingCount { colour, count });
            }
        }

        b.side = if side.starts_with('w') { Colour::White } else { Colour::Black };

        tracing::debug!(fen, side = %b.side, pieces = b.piecelist.iter().count() + b.kings.iter().flatten().count(), "parsed position");
        Ok(b)
    }

    /// Placement and side-to-move fields of this position.
    #[must_use]
    pub fn fen(&self) -> String {
        let mut fen = String::new();
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0_u8;
            for file in File::ALL {
                match self.mailbox[Square::from_rank_file(rank, file)] {
                    Cell::Occupied(colour, piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.fen_char(colour));
                    }
                    Cell::Empty | Cell::OffBoard => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank != Rank::One {
                fen.push('/');
            }
        }
        fen.push_str(if self.side == Colour::White { " w" } else { " b" });
        fen
    }

    /// Plain-text diagram: eight rows from rank 8 down, `.` for empty squares.
    #[must_use]
    pub fn grid(&self) -> String {
        let mut grid = String::with_capacity(8 * 16);
        for rank in Rank::ALL.into_iter().rev() {
            let row: Vec<String> =
                File::ALL.iter().map(|&file| self.mailbox[Square::from_rank_file(rank, file)].fen_char().to_string()).collect();
            grid.push_str(&row.join(" "));
            grid.push('\n');
        }
        grid
    }

    /// The side to move.
    #[must_use]
    pub const fn side(&self) -> Colour {
        self.side
    }

    /// Occupancy of a cell.
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.mailbox[square]
    }

    #[must_use]
    pub const fn king_square(&self, colour: Colour) -> Option<Square> {
        self.kings[colour.index()]
    }

    /// Squares holding `colour`'s pieces of one family. Always empty for pawns.
    #[must_use]
    pub fn squares_of(&self, colour: Colour, piece: Piece) -> &[Square] {
        match piece {
            Piece::King => self.kings[colour.index()].as_slice(),
            _ => self.piecelist.get(colour, piece).map_or(&[], |list| list.as_slice()),
        }
    }

    /// Check that the occupancy grid and the location lists agree.
    ///
    /// # Errors
    /// Returns [`BoardError::Desync`] naming the first inconsistent square.
    pub fn validate(&self) -> Result<()> {
        let mut owners = [0_u8; BOARD_CELLS];

        for colour in Colour::ALL {
            let Some(king) = self.kings[colour.index()] else { continue };
            if self.mailbox[king] != Cell::Occupied(colour, Piece::King) {
                return Err(BoardError::Desync { square: king });
            }
            owners[king.index()] += 1;
        }

        for (colour, piece, square) in self.piecelist.iter() {
            if !square.is_playing() || self.mailbox[square] != Cell::Occupied(colour, piece) {
                return Err(BoardError::Desync { square });
            }
            owners[square.index()] = owners[square.index()].saturating_add(1);
        }

        for square in Square::all() {
            let owned = owners[square.index()];
            let consistent = match self.mailbox[square] {
                Cell::OffBoard => !square.is_playing(),
                Cell::Empty => square.is_playing() && owned == 0,
                Cell::Occupied(..) => owned == 1,
            };
            if !consistent {
                return Err(BoardError::Desync { square });
            }
        }
        Ok(())
    }
}
