//! Random make/unmake walks that check the board comes back unchanged.

use perft_movegen::{Board, Move, MoveList, Piece};
use rand::{rngs::StdRng, seq::IteratorRandom, Rng, SeedableRng};
use tinyvec::TinyVec;

use crate::error::SoakError;

/// Deepest line a single walk may reach.
pub const MAX_WALK: u32 = 12;

type Line = TinyVec<[Move; 16]>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoakStats {
    pub walks: u32,
    pub makes: u64,
    /// Walks that stopped early because the side to move had no playable move.
    pub dead_ends: u64,
}

struct Walker {
    rng: StdRng,
    line: Line,
    stats: SoakStats,
}

impl Walker {
    fn walk(&mut self, board: &mut Board, depth: u32) -> Result<(), SoakError> {
        if depth == 0 {
            return Ok(());
        }

        let mut moves = MoveList::new();
        board.generate(&mut moves);
        // Kings are never captured; a line that allows it simply ends here.
        let Some(m) = moves.into_iter().filter(|m| m.capture != Some(Piece::King)).choose(&mut self.rng) else {
            self.stats.dead_ends += 1;
            return Ok(());
        };

        let snapshot = board.clone();
        self.line.push(m);

        board.make(m)?;
        self.stats.makes += 1;
        board.validate().map_err(|source| SoakError::Invalid { line: SoakError::line(&self.line), source })?;

        self.walk(board, depth - 1)?;

        board.unmake(m)?;
        board.validate().map_err(|source| SoakError::Invalid { line: SoakError::line(&self.line), source })?;
        if *board != snapshot {
            return Err(SoakError::Drift {
                line: SoakError::line(&self.line),
                expected: snapshot.fen(),
                found: board.fen(),
            });
        }

        self.line.pop();
        Ok(())
    }
}

/// Run `walks` random lines of random depth from `board`, checking after every
/// unmake that the position matches its snapshot. The same seed always plays the same lines.
///
/// # Errors
/// Returns the first line that failed validation or did not restore the position.
pub fn soak(board: &mut Board, walks: u32, seed: u64) -> Result<SoakStats, SoakError> {
    let mut walker = Walker { rng: StdRng::seed_from_u64(seed), line: Line::new(), stats: SoakStats::default() };

    for _ in 0..walks {
        let depth = walker.rng.gen_range(1..=MAX_WALK);
        tracing::trace!(depth, "starting walk");
        walker.walk(board, depth)?;
        walker.stats.walks += 1;
    }

    tracing::info!(seed, walks, makes = walker.stats.makes, "soak finished");
    Ok(walker.stats)
}
