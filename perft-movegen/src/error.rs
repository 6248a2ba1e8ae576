//! Error types for perft-movegen.
//!
//! Every [`BoardError`] raised by make or unmake means the caller and the board
//! disagree about the position; none of them are recoverable mid-search.

use thiserror::Error;

use crate::{colour::Colour, piece::Piece, square::Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("padded index {0} is outside the board")]
    IndexOutOfRange(u8),

    #[error("file index {0} is out of range")]
    FileOutOfRange(u8),

    #[error("rank index {0} is out of range")]
    RankOutOfRange(u8),

    #[error("{0:?} is not a square name")]
    BadName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid piece placement symbol {0:?}")]
    InvalidPlacementSymbol(char),

    #[error("piece placement does not describe an 8x8 board")]
    MalformedPlacement,

    #[error("FEN has no side-to-move field")]
    MissingSideToMove,

    #[error("{colour} has {count} kings, expected at most one")]
    KingCount { colour: Colour, count: usize },

    #[error("{0} moves are not supported")]
    UnsupportedMovingPiece(Piece),

    #[error("a {0} cannot be captured")]
    IllegalCapture(Piece),

    #[error("board state disagrees with itself at {square}")]
    Desync { square: Square },
}

pub type Result<T> = std::result::Result<T, BoardError>;
