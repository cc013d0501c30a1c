use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
    #[error("Invalid board size {0:?}")]
    InvalidSize(Coord2),
    #[error("Too many mines, requested {requested} but only {capacity} fit")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Mines were already deployed on this board")]
    AlreadyDeployed,
    #[error("Board was already played, mines must be deployed first")]
    AlreadyStarted,
    #[error("Unknown difficulty, expected easy, medium or hard")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
