use tinyvec::TinyVec;

use crate::{colour::Colour, piece::Piece, square::Square};

/// Squares of one colour's pieces of one family, packed from the front.
pub type Squares = TinyVec<[Square; 10]>;

/// Per-colour location lists for knights, bishops, rooks and queens.
///
/// Order within a list is not meaningful: capturing removes an entry by
/// shifting the tail left, and uncapturing appends.
#[derive(Clone, Debug, Default)]
pub struct Piecelist {
    lists: [[Squares; 4]; 2],
}

impl Piecelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// The location list for a family, or `None` for kings and pawns.
    pub fn get(&self, colour: Colour, piece: Piece) -> Option<&Squares> {
        Some(&self.lists[colour.index()][piece.list_index()?])
    }

    fn get_mut(&mut self, colour: Colour, piece: Piece) -> Option<&mut Squares> {
        Some(&mut self.lists[colour.index()][piece.list_index()?])
    }

    /// Append a piece. Returns `false` if the family has no list.
    pub fn add_piece(&mut self, colour: Colour, piece: Piece, square: Square) -> bool {
        let Some(list) = self.get_mut(colour, piece) else { return false };
        list.push(square);
        true
    }

    /// Slot holding `square`, first match wins.
    pub fn position(&self, colour: Colour, piece: Piece, square: Square) -> Option<usize> {
        self.get(colour, piece)?.iter().position(|&s| s == square)
    }

    /// Overwrite the slot at `index` in place.
    pub fn move_piece(&mut self, colour: Colour, piece: Piece, index: usize, to: Square) {
        if let Some(list) = self.get_mut(colour, piece) {
            list[index] = to;
        }
    }

    /// Drop the slot at `index`, shifting later entries left.
    pub fn remove_piece(&mut self, colour: Colour, piece: Piece, index: usize) {
        if let Some(list) = self.get_mut(colour, piece) {
            list.remove(index);
        }
    }

    /// Every listed piece with its colour and family.
    pub fn iter(&self) -> impl Iterator<Item = (Colour, Piece, Square)> + '_ {
        Colour::ALL.into_iter().flat_map(move |colour| {
            Piece::LISTED.into_iter().flat_map(move |piece| {
                self.get(colour, piece).into_iter().flat_map(|list| list.iter()).map(move |&square| (colour, piece, square))
            })
        })
    }
}

impl PartialEq for Piecelist {
    /// Lists compare as sets.
    fn eq(&self, other: &Self) -> bool {
        self.lists.iter().flatten().zip(other.lists.iter().flatten()).all(|(a, b)| {
            let mut a = a.clone();
            let mut b = b.clone();
            a.sort_unstable();
            b.sort_unstable();
            a == b
        })
    }
}

impl Eq for Piecelist {}
