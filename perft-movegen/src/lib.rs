#![warn(clippy::pedantic, clippy::nursery, clippy::perf, clippy::style)]

mod board;
mod chessmove;
mod colour;
mod error;
mod piece;
mod square;

pub use board::Board;
pub use chessmove::{Move, MoveList};
pub use colour::Colour;
pub use error::{BoardError, SquareError};
pub use piece::{Cell, Piece};
pub use square::{Direction, File, Rank, Square, BOARD_CELLS};

/// Count the leaf positions reachable in exactly `depth` legal moves.
///
/// Moves that leave the mover's own king attacked are made, tested and taken
/// back without being counted. The board is restored before returning, even on error.
///
/// # Errors
/// Propagates any [`BoardError`] from making or unmaking a move, which only
/// happens if the board was already inconsistent.
#[inline]
pub fn perft(board: &mut Board, depth: u32) -> Result<u64, BoardError> {
    if depth == 0 {
        return Ok(1);
    }

    let mut moves = MoveList::new();
    board.generate(&mut moves);

    let mover = board.side();
    let mut count = 0;
    for m in moves {
        board.make(m)?;
        let subtree = if board.is_check(mover) { Ok(0) } else { perft(board, depth - 1) };
        board.unmake(m)?;
        count += subtree?;
    }
    Ok(count)
}

#[cfg(test)]
mod perft {
    use crate::{perft, Board};

    #[test]
    fn lone_rook_with_kings() {
        let mut startpos = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w").unwrap();
        let before = startpos.clone();
        // The rook's ten moves plus the five king steps; e1-d1 and e1-f1 are legal.
        assert_eq!(perft(&mut startpos, 1), Ok(15));
        assert_eq!(startpos, before);
    }

    #[test]
    fn depth_zero_is_one() {
        let mut startpos = Board::from_fen("8/8/8/8/8/8/8/8 w").unwrap();
        assert_eq!(perft(&mut startpos, 0), Ok(1));
        assert_eq!(perft(&mut startpos, 3), Ok(0));
    }

    #[test]
    fn perft_test37() {
        let mut startpos = Board::from_fen("8/1n4N1/2k5/8/8/5K2/1N4n1/8 w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(14));
        assert_eq!(perft(&mut startpos, 2), Ok(195));
        assert_eq!(perft(&mut startpos, 3), Ok(2760));
        assert_eq!(perft(&mut startpos, 4), Ok(38675));
    }

    #[test]
    fn perft_test38() {
        let mut startpos = Board::from_fen("8/1k6/8/5N2/8/4n3/8/2K5 w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(11));
        assert_eq!(perft(&mut startpos, 2), Ok(156));
        assert_eq!(perft(&mut startpos, 3), Ok(1636));
        assert_eq!(perft(&mut startpos, 4), Ok(20534));
    }

    #[test]
    fn perft_test39() {
        let mut startpos = Board::from_fen("8/8/4k3/3Nn3/3nN3/4K3/8/8 w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(19));
        assert_eq!(perft(&mut startpos, 2), Ok(289));
        assert_eq!(perft(&mut startpos, 3), Ok(4442));
        assert_eq!(perft(&mut startpos, 4), Ok(73584));
    }

    #[test]
    fn perft_test40() {
        let mut startpos = Board::from_fen("K7/8/2n5/1n6/8/8/8/k6N w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(3));
        assert_eq!(perft(&mut startpos, 2), Ok(51));
        assert_eq!(perft(&mut startpos, 3), Ok(345));
        assert_eq!(perft(&mut startpos, 4), Ok(5301));
        assert_eq!(perft(&mut startpos, 5), Ok(38348));
    }

    #[test]
    fn perft_test41() {
        let mut startpos = Board::from_fen("k7/8/2N5/1N6/8/8/8/K6n w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(17));
        assert_eq!(perft(&mut startpos, 2), Ok(54));
        assert_eq!(perft(&mut startpos, 3), Ok(835));
        assert_eq!(perft(&mut startpos, 4), Ok(5910));
        assert_eq!(perft(&mut startpos, 5), Ok(92250));
    }

    #[test]
    fn perft_test42() {
        let mut startpos = Board::from_fen("8/1n4N1/2k5/8/8/5K2/1N4n1/8 b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(15));
        assert_eq!(perft(&mut startpos, 2), Ok(193));
        assert_eq!(perft(&mut startpos, 3), Ok(2816));
        assert_eq!(perft(&mut startpos, 4), Ok(40039));
    }

    #[test]
    fn perft_test43() {
        let mut startpos = Board::from_fen("8/1k6/8/5N2/8/4n3/8/2K5 b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(16));
        assert_eq!(perft(&mut startpos, 2), Ok(180));
        assert_eq!(perft(&mut startpos, 3), Ok(2290));
        assert_eq!(perft(&mut startpos, 4), Ok(24640));
    }

    #[test]
    fn perft_test44() {
        let mut startpos = Board::from_fen("8/8/3K4/3Nn3/3nN3/4k3/8/8 b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(4));
        assert_eq!(perft(&mut startpos, 2), Ok(68));
        assert_eq!(perft(&mut startpos, 3), Ok(1118));
        assert_eq!(perft(&mut startpos, 4), Ok(16199));
    }

    #[test]
    fn perft_test45() {
        let mut startpos = Board::from_fen("K7/8/2n5/1n6/8/8/8/k6N b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(17));
        assert_eq!(perft(&mut startpos, 2), Ok(54));
        assert_eq!(perft(&mut startpos, 3), Ok(835));
        assert_eq!(perft(&mut startpos, 4), Ok(5910));
        assert_eq!(perft(&mut startpos, 5), Ok(92250));
    }

    #[test]
    fn perft_test46() {
        let mut startpos = Board::from_fen("k7/8/2N5/1N6/8/8/8/K6n b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(3));
        assert_eq!(perft(&mut startpos, 2), Ok(51));
        assert_eq!(perft(&mut startpos, 3), Ok(345));
        assert_eq!(perft(&mut startpos, 4), Ok(5301));
        assert_eq!(perft(&mut startpos, 5), Ok(38348));
    }

    #[test]
    fn perft_test47() {
        let mut startpos = Board::from_fen("B6b/8/8/8/2K5/4k3/8/b6B w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(17));
        assert_eq!(perft(&mut startpos, 2), Ok(278));
        assert_eq!(perft(&mut startpos, 3), Ok(4607));
        assert_eq!(perft(&mut startpos, 4), Ok(76778));
    }

    #[test]
    fn perft_test48() {
        let mut startpos = Board::from_fen("8/8/1B6/7b/7k/8/2B1b3/7K w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(21));
        assert_eq!(perft(&mut startpos, 2), Ok(316));
        assert_eq!(perft(&mut startpos, 3), Ok(5744));
        assert_eq!(perft(&mut startpos, 4), Ok(93338));
    }

    #[test]
    fn perft_test49() {
        let mut startpos = Board::from_fen("k7/B7/1B6/1B6/8/8/8/K6b w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(21));
        assert_eq!(perft(&mut startpos, 2), Ok(144));
        assert_eq!(perft(&mut startpos, 3), Ok(3242));
        assert_eq!(perft(&mut startpos, 4), Ok(32955));
    }

    #[test]
    fn perft_test50() {
        let mut startpos = Board::from_fen("K7/b7/1b6/1b6/8/8/8/k6B w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(7));
        assert_eq!(perft(&mut startpos, 2), Ok(143));
        assert_eq!(perft(&mut startpos, 3), Ok(1416));
        assert_eq!(perft(&mut startpos, 4), Ok(31787));
    }

    #[test]
    fn perft_test51() {
        let mut startpos = Board::from_fen("B6b/8/8/8/2K5/5k2/8/b6B b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(6));
        assert_eq!(perft(&mut startpos, 2), Ok(106));
        assert_eq!(perft(&mut startpos, 3), Ok(1829));
        assert_eq!(perft(&mut startpos, 4), Ok(31151));
    }

    #[test]
    fn perft_test52() {
        let mut startpos = Board::from_fen("8/8/1B6/7b/7k/8/2B1b3/7K b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(17));
        assert_eq!(perft(&mut startpos, 2), Ok(309));
        assert_eq!(perft(&mut startpos, 3), Ok(5133));
        assert_eq!(perft(&mut startpos, 4), Ok(93603));
    }

    #[test]
    fn perft_test53() {
        let mut startpos = Board::from_fen("k7/B7/1B6/1B6/8/8/8/K6b b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(7));
        assert_eq!(perft(&mut startpos, 2), Ok(143));
        assert_eq!(perft(&mut startpos, 3), Ok(1416));
        assert_eq!(perft(&mut startpos, 4), Ok(31787));
    }

    #[test]
    fn perft_test54() {
        let mut startpos = Board::from_fen("K7/b7/1b6/1b6/8/8/8/k6B b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(21));
        assert_eq!(perft(&mut startpos, 2), Ok(144));
        assert_eq!(perft(&mut startpos, 3), Ok(3242));
        assert_eq!(perft(&mut startpos, 4), Ok(32955));
    }

    #[test]
    fn perft_test55() {
        let mut startpos = Board::from_fen("7k/RR6/8/8/8/8/rr6/7K w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(19));
        assert_eq!(perft(&mut startpos, 2), Ok(275));
        assert_eq!(perft(&mut startpos, 3), Ok(5300));
        assert_eq!(perft(&mut startpos, 4), Ok(104_342));
    }

    #[test]
    fn perft_test56() {
        let mut startpos = Board::from_fen("R6r/8/8/2K5/5k2/8/8/r6R w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(36));
        assert_eq!(perft(&mut startpos, 2), Ok(1027));
        assert_eq!(perft(&mut startpos, 3), Ok(29215));
    }

    #[test]
    fn perft_test57() {
        let mut startpos = Board::from_fen("7k/RR6/8/8/8/8/rr6/7K b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(19));
        assert_eq!(perft(&mut startpos, 2), Ok(275));
        assert_eq!(perft(&mut startpos, 3), Ok(5300));
        assert_eq!(perft(&mut startpos, 4), Ok(104_342));
    }

    #[test]
    fn perft_test58() {
        let mut startpos = Board::from_fen("R6r/8/8/2K5/5k2/8/8/r6R b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(36));
        assert_eq!(perft(&mut startpos, 2), Ok(1027));
        assert_eq!(perft(&mut startpos, 3), Ok(29227));
    }

    #[test]
    fn perft_test59() {
        let mut startpos = Board::from_fen("6kq/8/8/8/8/8/8/7K w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(2));
        assert_eq!(perft(&mut startpos, 2), Ok(36));
        assert_eq!(perft(&mut startpos, 3), Ok(143));
        assert_eq!(perft(&mut startpos, 4), Ok(3637));
        assert_eq!(perft(&mut startpos, 5), Ok(14893));
    }

    #[test]
    fn perft_test60() {
        let mut startpos = Board::from_fen("6KQ/8/8/8/8/8/8/7k b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(2));
        assert_eq!(perft(&mut startpos, 2), Ok(36));
        assert_eq!(perft(&mut startpos, 3), Ok(143));
        assert_eq!(perft(&mut startpos, 4), Ok(3637));
        assert_eq!(perft(&mut startpos, 5), Ok(14893));
    }

    #[test]
    fn perft_test61() {
        let mut startpos = Board::from_fen("K7/8/8/3Q4/4q3/8/8/7k w - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(6));
        assert_eq!(perft(&mut startpos, 2), Ok(35));
        assert_eq!(perft(&mut startpos, 3), Ok(495));
        assert_eq!(perft(&mut startpos, 4), Ok(8349));
    }

    #[test]
    fn perft_test62() {
        let mut startpos = Board::from_fen("6qk/8/8/8/8/8/8/7K b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(22));
        assert_eq!(perft(&mut startpos, 2), Ok(43));
        assert_eq!(perft(&mut startpos, 3), Ok(1015));
        assert_eq!(perft(&mut startpos, 4), Ok(4167));
        assert_eq!(perft(&mut startpos, 5), Ok(105_749));
    }

    #[test]
    fn perft_test64() {
        let mut startpos = Board::from_fen("K7/8/8/3Q4/4q3/8/8/7k b - - 0 1").unwrap();
        assert_eq!(perft(&mut startpos, 1), Ok(6));
        assert_eq!(perft(&mut startpos, 2), Ok(35));
        assert_eq!(perft(&mut startpos, 3), Ok(495));
        assert_eq!(perft(&mut startpos, 4), Ok(8349));
    }
}
