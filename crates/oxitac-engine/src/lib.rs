pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A move rejected by the board or the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    #[display("cell index {_0} is outside the 3x3 grid")]
    OutOfRange(#[error(not(source))] usize),
    #[display("cell {_0} is already occupied")]
    Occupied(#[error(not(source))] usize),
    #[display("the game has already ended")]
    GameOver,
    #[display("it is the automated player's turn")]
    AutomatedTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("{_0}")]
    Illegal(IllegalMove),
    #[display("it is {expected}'s turn, not {submitted}'s")]
    WrongTurn { expected: Mark, submitted: Mark },
}

/// The move selector was asked for a move on a board with no empty cell.
///
/// Unreachable through [`GameSession`]: the draw check runs before a reply
/// is ever scheduled. Surfacing it means an invariant was broken upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no legal move: the board has no empty cell")]
pub struct NoLegalMoveError;
