use crate::core::mark::Mark;

/// The terminal result of one completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameResult {
    #[display("Player X wins!")]
    XWins,
    #[display("Player O wins!")]
    OWins,
    #[display("It's a draw!")]
    Draw,
}

impl GameResult {
    /// Returns the win result for `mark`.
    #[must_use]
    pub const fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => GameResult::XWins,
            Mark::O => GameResult::OWins,
        }
    }
}

/// Win/draw tally across consecutive games in a session.
///
/// Each completed game increments exactly one counter; there is no
/// deduplication. Counters persist until [`ScoreBoard::reset`] or process
/// exit - no storage durability.
///
/// # Example
///
/// ```
/// use oxitac_engine::{GameResult, ScoreBoard};
///
/// let mut scores = ScoreBoard::new();
/// scores.record(GameResult::XWins);
/// scores.record(GameResult::Draw);
///
/// assert_eq!(scores.x_wins(), 1);
/// assert_eq!(scores.o_wins(), 0);
/// assert_eq!(scores.draws(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ScoreBoard {
    /// Creates a tally with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    #[must_use]
    pub const fn x_wins(&self) -> usize {
        self.x_wins
    }

    #[must_use]
    pub const fn o_wins(&self) -> usize {
        self.o_wins
    }

    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the win count for `mark`.
    #[must_use]
    pub const fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Increments the counter matching `result`. One call, one increment.
    pub const fn record(&mut self, result: GameResult) {
        match result {
            GameResult::XWins => self.x_wins += 1,
            GameResult::OWins => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Zeroes all three counters.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}
