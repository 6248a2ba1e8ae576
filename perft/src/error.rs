//! Errors raised by the perft driver.

use perft_movegen::{BoardError, Move};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} expects a value")]
    MissingValue(&'static str),

    #[error("{flag} expects a number, got {value:?}")]
    InvalidNumber { flag: &'static str, value: String },

    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
}

#[derive(Error, Debug)]
pub enum SoakError {
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Unmaking `line` did not restore the position it started from.
    #[error("position drifted after {line}: expected {expected}, found {found}")]
    Drift { line: String, expected: String, found: String },

    /// `Board::validate` failed partway through `line`.
    #[error("board invalid after {line}: {source}")]
    Invalid { line: String, source: BoardError },
}

impl SoakError {
    pub(crate) fn line(moves: &[Move]) -> String {
        let line: Vec<String> = moves.iter().map(ToString::to_string).collect();
        line.join(" ")
    }
}

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("bad arguments: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Soak(#[from] SoakError),

    #[error("could not start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}
