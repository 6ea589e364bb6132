use crate::{
    core::{lines::WinLine, mark::Mark},
    engine::score_board::{GameResult, ScoreBoard},
};

/// Outputs emitted by [`GameSession`](crate::GameSession) for the
/// presentation layer.
///
/// Events are queued in emission order and drained with
/// [`GameSession::pop_event`](crate::GameSession::pop_event). Rendering is
/// out of scope for the engine; these carry everything a front end needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// A mark was placed. Emitted once per successful move.
    CellOccupied { index: usize, mark: Mark },
    /// The game reached a terminal state. `line` is the winning triple,
    /// `None` for draws.
    GameEnded {
        result: GameResult,
        line: Option<WinLine>,
    },
    /// The game continues and the named mark moves next. Also emitted when
    /// a fresh board is set up.
    TurnChanged { turn: Mark },
    /// The tally changed (an increment or a reset); carries the snapshot.
    ScoreChanged { tally: ScoreBoard },
}
