//! Split perft: the subtree count under every legal root move.

use std::time::Instant;

use perft_movegen::{perft, Board, BoardError, Move, MoveList};
use rayon::prelude::*;

use crate::{error::DriverError, output::Output};

/// Count one root move's subtree on a private copy of the board.
///
/// Returns `None` if the move leaves the mover's king attacked.
fn subtree(board: &Board, m: Move, depth: u32) -> Result<Option<u64>, BoardError> {
    let mut board = board.clone();
    let mover = board.side();
    board.make(m)?;
    let nodes = if board.is_check(mover) { None } else { Some(perft(&mut board, depth - 1)?) };
    board.unmake(m)?;
    Ok(nodes)
}

/// Run split perft on the current rayon pool and report each legal root move
/// in generation order. Returns the total leaf count.
///
/// # Errors
/// Fails if any worker hits a [`BoardError`] or the output cannot be written.
pub fn divide<O: Output>(board: &Board, depth: u32, output: &mut O) -> Result<u64, DriverError> {
    let start = Instant::now();
    if depth == 0 {
        output.divide_complete(1, start.elapsed())?;
        return Ok(1);
    }

    let mut moves = MoveList::new();
    board.generate(&mut moves);
    output.start(moves.len());

    let sink: &O = output;
    let counts = moves
        .par_iter()
        .map(|&m| -> Result<(Move, Option<u64>), BoardError> {
            let nodes = subtree(board, m, depth)?;
            if let Some(nodes) = nodes {
                sink.tick(m, nodes);
            }
            Ok((m, nodes))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut total = 0;
    for (m, nodes) in counts {
        if let Some(nodes) = nodes {
            output.root_move(m, nodes)?;
            total += nodes;
        }
    }

    let elapsed = start.elapsed();
    tracing::info!(depth, nodes = total, elapsed = ?elapsed, "divide finished");
    output.divide_complete(total, elapsed)?;
    Ok(total)
}

/// Count each depth from 1 up to `depth` on the calling thread.
///
/// # Errors
/// Fails on a [`BoardError`] or if the output cannot be written.
pub fn iterate<O: Output>(board: &Board, depth: u32, output: &mut O) -> Result<u64, DriverError> {
    let mut board = board.clone();
    let mut nodes = 1;
    for d in 1..=depth {
        let start = Instant::now();
        nodes = perft(&mut board, d)?;
        output.depth_complete(d, nodes, start.elapsed())?;
    }
    Ok(nodes)
}
