//! Padded 10x12 board geometry.
//!
//! The 8x8 playing area sits inside a ring of sentinel cells two ranks deep
//! above and below and one file wide to either side, so a single knight leap
//! from any playing square lands somewhere inside the 120-cell array. The
//! a-file is on the high side of each row: a8 is 98, h8 is 91, a1 is 28, h1 is 21.

use std::{
    convert::TryFrom,
    fmt::{Debug, Display},
    str::FromStr,
};

use crate::error::SquareError;

/// Number of cells in the padded board.
pub const BOARD_CELLS: usize = 120;

/// Width of one padded row.
const ROW: u8 = 10;

/// A file on the chessboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [Self; 8] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G, Self::H];
}

impl TryFrom<u8> for File {
    type Error = SquareError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(SquareError::FileOutOfRange(value))
    }
}

impl Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(b'a' + *self as u8))
    }
}

/// A rank on the chessboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    pub const ALL: [Self; 8] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five, Self::Six, Self::Seven, Self::Eight];
}

impl TryFrom<u8> for Rank {
    type Error = SquareError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(SquareError::RankOutOfRange(value))
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(b'1' + *self as u8))
    }
}

/// A step vector on the padded board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    NorthNorthEast,
    EastNorthEast,
    EastSouthEast,
    SouthSouthEast,
    SouthSouthWest,
    WestSouthWest,
    WestNorthWest,
    NorthNorthWest,
}

impl Direction {
    /// Single-step king moves; the queen walks the same vectors as rays.
    pub const KING: [Self; 8] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::West,
        Self::East,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];
    pub const BISHOP: [Self; 4] = [Self::NorthWest, Self::NorthEast, Self::SouthWest, Self::SouthEast];
    pub const ROOK: [Self; 4] = [Self::North, Self::West, Self::East, Self::South];
    pub const KNIGHT: [Self; 8] = [
        Self::NorthNorthWest,
        Self::NorthNorthEast,
        Self::WestNorthWest,
        Self::EastNorthEast,
        Self::WestSouthWest,
        Self::EastSouthEast,
        Self::SouthSouthWest,
        Self::SouthSouthEast,
    ];

    /// Index delta of one step. Only meaningful for a 10-wide padded row.
    #[must_use]
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Self::North => 10,
            Self::NorthEast => 9,
            Self::East => -1,
            Self::SouthEast => -11,
            Self::South => -10,
            Self::SouthWest => -9,
            Self::West => 1,
            Self::NorthWest => 11,
            Self::NorthNorthEast => 19,
            Self::EastNorthEast => 8,
            Self::EastSouthEast => -12,
            Self::SouthSouthEast => -21,
            Self::SouthSouthWest => -19,
            Self::WestSouthWest => -8,
            Self::WestNorthWest => 12,
            Self::NorthNorthWest => 21,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
            Self::NorthNorthEast => Self::SouthSouthWest,
            Self::EastNorthEast => Self::WestSouthWest,
            Self::EastSouthEast => Self::WestNorthWest,
            Self::SouthSouthEast => Self::NorthNorthWest,
            Self::SouthSouthWest => Self::NorthNorthEast,
            Self::WestSouthWest => Self::EastNorthEast,
            Self::WestNorthWest => Self::EastSouthEast,
            Self::NorthNorthWest => Self::SouthSouthEast,
        }
    }
}

/// An index into the padded board, always below [`BOARD_CELLS`].
///
/// A `Square` may name a sentinel cell; use [`Square::is_playing`] to tell.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Square(u8);

impl Square {
    #[must_use]
    #[inline]
    pub const fn from_rank_file(rank: Rank, file: File) -> Self {
        Self((rank as u8 + 2) * ROW + (8 - file as u8))
    }

    #[must_use]
    #[inline]
    pub const fn into_inner(self) -> u8 {
        self.0
    }

    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step once in `dir`. Returns `None` only when the step leaves the padded array;
    /// landing on a sentinel cell is still `Some`.
    #[must_use]
    #[inline]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn travel(self, dir: Direction) -> Option<Self> {
        let dest = self.0 as i16 + dir.offset() as i16;
        if dest >= 0 && dest < BOARD_CELLS as i16 {
            Some(Self(dest as u8))
        } else {
            None
        }
    }

    /// True if this square is inside the 8x8 playing area.
    #[must_use]
    #[inline]
    pub const fn is_playing(self) -> bool {
        let row = self.0 / ROW;
        let column = self.0 % ROW;
        row >= 2 && row <= 9 && column >= 1 && column <= 8
    }

    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        if !self.is_playing() {
            return None;
        }
        Some(Rank::ALL[(self.0 / ROW - 2) as usize])
    }

    #[must_use]
    pub const fn file(self) -> Option<File> {
        if !self.is_playing() {
            return None;
        }
        Some(File::ALL[(8 - self.0 % ROW) as usize])
    }

    /// Every cell of the padded board, sentinels included.
    #[allow(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_CELLS as u8).map(Self)
    }

    /// The 64 playing squares in reading order: a8 to h8, down to a1 to h1.
    pub fn playing() -> impl Iterator<Item = Self> {
        Rank::ALL.into_iter().rev().flat_map(|rank| File::ALL.into_iter().map(move |file| Self::from_rank_file(rank, file)))
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < BOARD_CELLS {
            Ok(Self(value))
        } else {
            Err(SquareError::IndexOutOfRange(value))
        }
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.as_bytes() else {
            return Err(SquareError::BadName(s.to_string()));
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::BadName(s.to_string()));
        }
        Ok(Self::from_rank_file(Rank::try_from(rank - b'1')?, File::try_from(file - b'a')?))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.file(), self.rank()) {
            (Some(file), Some(rank)) => write!(f, "{file}{rank}"),
            _ => write!(f, "#{}", self.0),
        }
    }
}

impl Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
