use std::{collections::VecDeque, fmt};

use crate::{
    IllegalMove, MoveError, NoLegalMoveError,
    core::{board::Board, lines::WinLine, mark::Mark},
    engine::{
        event::GameEvent,
        game::{Game, GameStatus, MoveOutcome},
        score_board::{GameResult, ScoreBoard},
    },
};

/// Pacing delay before the automated player's reply, purely for feel.
const REPLY_DELAY_MILLIS: u64 = 500;

/// Selects the automated player's next move.
///
/// The session owns a boxed policy and queries it when the automated
/// player's reply fires. Implementations must pick an empty cell and fail
/// with [`NoLegalMoveError`] when none exists - never an invalid index.
pub trait MovePolicy: fmt::Debug {
    fn select_move(&mut self, board: &Board) -> Result<usize, NoLegalMoveError>;
}

/// Trivial policy taking the lowest empty index.
///
/// Deterministic stand-in for tests and examples; the real opponent lives
/// in the selector crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmptyPolicy;

impl MovePolicy for FirstEmptyPolicy {
    fn select_move(&mut self, board: &Board) -> Result<usize, NoLegalMoveError> {
        board.empty_cells().next().ok_or(NoLegalMoveError)
    }
}

/// Who plays the `O` role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameMode {
    #[display("Human vs Human")]
    HumanVsHuman,
    #[display("Human vs Computer")]
    HumanVsAutomated,
}

impl GameMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsAutomated,
            GameMode::HumanVsAutomated => GameMode::HumanVsHuman,
        }
    }
}

const fn reply_frames(fps: u64) -> u64 {
    let frames = REPLY_DELAY_MILLIS * fps / 1000;
    // Never reply synchronously with the triggering move.
    if frames == 0 { 1 } else { frames }
}

/// A multi-game session: one active [`Game`], the score tally, the mode,
/// and the automated player's deferred reply.
///
/// All transitions run to completion on the caller's thread. The only
/// deferred work is the automated reply, counted down in ticks via
/// [`Self::increment_frame`]; when it fires it re-validates mode, status,
/// and turn, so a reply scheduled before a board reset or mode change is a
/// no-op rather than a move on the wrong board.
///
/// Outputs are queued as [`GameEvent`]s and drained with
/// [`Self::pop_event`]; the session never renders anything itself.
#[derive(Debug)]
pub struct GameSession<'a> {
    game: Game,
    scores: ScoreBoard,
    mode: GameMode,
    policy: Box<dyn MovePolicy + 'a>,
    fps: u64,
    reply_frames: Option<u64>,
    events: VecDeque<GameEvent>,
}

impl<'a> GameSession<'a> {
    /// Creates a session ticked at `fps` frames per second.
    ///
    /// `policy` plays the `O` role whenever `mode` is
    /// [`GameMode::HumanVsAutomated`]; it is kept (but idle) in
    /// human-vs-human mode so the mode can be toggled mid-session.
    #[must_use]
    pub fn new(fps: u64, mode: GameMode, policy: Box<dyn MovePolicy + 'a>) -> Self {
        let mut this = Self {
            game: Game::new(),
            scores: ScoreBoard::new(),
            mode,
            policy,
            fps,
            reply_frames: None,
            events: VecDeque::new(),
        };
        this.events.push_back(GameEvent::TurnChanged { turn: Mark::X });
        this
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        self.game.board()
    }

    #[must_use]
    pub const fn turn(&self) -> Mark {
        self.game.turn()
    }

    #[must_use]
    pub const fn status(&self) -> &GameStatus {
        self.game.status()
    }

    #[must_use]
    pub const fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Checks if an automated reply is scheduled but has not fired yet.
    #[must_use]
    pub const fn is_reply_pending(&self) -> bool {
        self.reply_frames.is_some()
    }

    /// Pops the oldest undelivered event, if any.
    pub fn pop_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    /// Handles a human cell activation: a move by whichever mark is due.
    ///
    /// In human-vs-automated mode the `O` turn belongs to the machine, so a
    /// human activation during it is rejected with
    /// [`IllegalMove::AutomatedTurn`]. Other rejections pass through from
    /// [`Game::submit_move`]; all of them leave the session unchanged.
    pub fn activate_cell(&mut self, index: usize) -> Result<(), MoveError> {
        if self.mode.is_human_vs_automated()
            && self.game.status().is_in_progress()
            && self.game.turn() == Mark::O
        {
            return Err(MoveError::Illegal(IllegalMove::AutomatedTurn));
        }
        self.apply_move(index, self.game.turn())?;
        Ok(())
    }

    /// Advances the session by one tick.
    ///
    /// Drives only the automated reply countdown; board state never changes
    /// on a tick unless a due reply fires.
    pub fn increment_frame(&mut self) {
        let Some(frames) = self.reply_frames else {
            return;
        };
        let frames = frames.saturating_sub(1);
        if frames > 0 {
            self.reply_frames = Some(frames);
            return;
        }
        self.reply_frames = None;
        self.play_automated_reply();
    }

    /// Starts a new game: empty board, turn `X`, in progress.
    ///
    /// Cancels any pending automated reply and keeps the tally.
    pub fn reset_board(&mut self) {
        self.game.reset();
        self.reply_frames = None;
        self.events.push_back(GameEvent::TurnChanged { turn: Mark::X });
    }

    /// Like [`Self::reset_board`], but also zeroes the tally.
    pub fn reset_all(&mut self) {
        self.reset_board();
        self.scores.reset();
        self.events.push_back(GameEvent::ScoreChanged {
            tally: self.scores,
        });
    }

    /// Switches to `mode` and starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset_board();
    }

    /// Flips the mode and starts a new game.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    fn apply_move(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, MoveError> {
        let outcome = self.game.submit_move(index, mark)?;
        self.events.push_back(GameEvent::CellOccupied { index, mark });
        match outcome {
            MoveOutcome::NextTurn(turn) => {
                self.events.push_back(GameEvent::TurnChanged { turn });
                if self.mode.is_human_vs_automated() && turn == Mark::O {
                    self.reply_frames = Some(reply_frames(self.fps));
                }
            }
            MoveOutcome::Won { winner, line } => {
                self.finish_game(GameResult::win_for(winner), Some(line));
            }
            MoveOutcome::Draw => {
                self.finish_game(GameResult::Draw, None);
            }
        }
        Ok(outcome)
    }

    fn finish_game(&mut self, result: GameResult, line: Option<WinLine>) {
        self.scores.record(result);
        self.events.push_back(GameEvent::GameEnded { result, line });
        self.events.push_back(GameEvent::ScoreChanged {
            tally: self.scores,
        });
    }

    /// Plays the automated player's due reply.
    ///
    /// The board may have been reset, or the mode changed, between
    /// scheduling and firing; a reply that no longer applies is dropped
    /// without touching anything.
    fn play_automated_reply(&mut self) {
        if !self.mode.is_human_vs_automated()
            || !self.game.status().is_in_progress()
            || self.game.turn() != Mark::O
        {
            return;
        }
        let index = self
            .policy
            .select_move(self.game.board())
            .expect("an in-progress game always has an empty cell");
        self.apply_move(index, Mark::O)
            .expect("the policy must select a legal cell for the current turn");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FPS: u64 = 60;

    fn automated_session() -> GameSession<'static> {
        GameSession::new(
            FPS,
            GameMode::HumanVsAutomated,
            Box::new(FirstEmptyPolicy),
        )
    }

    fn human_session() -> GameSession<'static> {
        GameSession::new(FPS, GameMode::HumanVsHuman, Box::new(FirstEmptyPolicy))
    }

    fn drain(session: &mut GameSession<'_>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(event) = session.pop_event() {
            events.push(event);
        }
        events
    }

    fn tick_until_reply(session: &mut GameSession<'_>) {
        for _ in 0..reply_frames(FPS) {
            session.increment_frame();
        }
        assert!(!session.is_reply_pending());
    }

    mod human_vs_human {
        use super::*;

        #[test]
        fn moves_alternate_between_the_players() {
            let mut session = human_session();
            session.activate_cell(0).unwrap();
            assert_eq!(session.turn(), Mark::O);
            session.activate_cell(4).unwrap();
            assert_eq!(session.turn(), Mark::X);
            assert!(!session.is_reply_pending());
        }

        #[test]
        fn each_move_emits_cell_occupied_then_turn_changed() {
            let mut session = human_session();
            drain(&mut session);
            session.activate_cell(0).unwrap();
            assert_eq!(
                drain(&mut session),
                [
                    GameEvent::CellOccupied {
                        index: 0,
                        mark: Mark::X
                    },
                    GameEvent::TurnChanged { turn: Mark::O },
                ]
            );
        }

        #[test]
        fn a_win_records_the_score_and_emits_terminal_events() {
            let mut session = human_session();
            for index in [0, 4, 1, 7] {
                session.activate_cell(index).unwrap();
            }
            drain(&mut session);
            session.activate_cell(2).unwrap();

            assert_eq!(session.scores().x_wins(), 1);
            let events = drain(&mut session);
            assert_eq!(events.len(), 3);
            assert!(events[0].is_cell_occupied());
            let GameEvent::GameEnded { result, line } = events[1] else {
                panic!("expected GameEnded, got {:?}", events[1]);
            };
            assert_eq!(result, GameResult::XWins);
            assert_eq!(line.unwrap().cells(), [0, 1, 2]);
            assert_eq!(
                events[2],
                GameEvent::ScoreChanged {
                    tally: *session.scores()
                }
            );
        }

        #[test]
        fn a_draw_records_the_score_with_no_line() {
            let mut session = human_session();
            for index in [0, 1, 2, 4, 3, 5, 7, 6] {
                session.activate_cell(index).unwrap();
            }
            drain(&mut session);
            session.activate_cell(8).unwrap();

            assert_eq!(session.scores().draws(), 1);
            let events = drain(&mut session);
            assert_eq!(
                events[1],
                GameEvent::GameEnded {
                    result: GameResult::Draw,
                    line: None
                }
            );
        }

        #[test]
        fn activations_after_the_end_are_rejected() {
            let mut session = human_session();
            for index in [0, 4, 1, 7, 2] {
                session.activate_cell(index).unwrap();
            }
            drain(&mut session);
            let err = session.activate_cell(3).unwrap_err();
            assert_eq!(err, MoveError::Illegal(IllegalMove::GameOver));
            assert!(drain(&mut session).is_empty());
        }
    }

    mod automated_opponent {
        use super::*;

        #[test]
        fn a_human_move_schedules_a_deferred_reply() {
            let mut session = automated_session();
            session.activate_cell(4).unwrap();
            assert!(session.is_reply_pending());
            // The reply has not fired yet: still O's turn, board unchanged.
            assert_eq!(session.turn(), Mark::O);
            assert_eq!(session.board().count(Mark::O), 0);
        }

        #[test]
        fn the_reply_fires_after_the_pacing_delay() {
            let mut session = automated_session();
            session.activate_cell(4).unwrap();
            tick_until_reply(&mut session);
            assert_eq!(session.board().count(Mark::O), 1);
            // FirstEmptyPolicy takes the lowest empty index.
            assert_eq!(session.board().cell(0), Some(Mark::O));
            assert_eq!(session.turn(), Mark::X);
        }

        #[test]
        fn the_reply_emits_the_same_events_as_a_human_move() {
            let mut session = automated_session();
            session.activate_cell(4).unwrap();
            drain(&mut session);
            tick_until_reply(&mut session);
            assert_eq!(
                drain(&mut session),
                [
                    GameEvent::CellOccupied {
                        index: 0,
                        mark: Mark::O
                    },
                    GameEvent::TurnChanged { turn: Mark::X },
                ]
            );
        }

        #[test]
        fn human_activation_during_the_machines_turn_is_rejected() {
            let mut session = automated_session();
            session.activate_cell(4).unwrap();
            let err = session.activate_cell(5).unwrap_err();
            assert_eq!(err, MoveError::Illegal(IllegalMove::AutomatedTurn));
            assert_eq!(session.board().count(Mark::O), 0);
            // The pending reply is unaffected.
            assert!(session.is_reply_pending());
        }

        #[test]
        fn resetting_the_board_makes_a_scheduled_reply_a_no_op() {
            let mut session = automated_session();
            session.activate_cell(4).unwrap();
            assert!(session.is_reply_pending());
            session.reset_board();
            drain(&mut session);

            for _ in 0..reply_frames(FPS) * 2 {
                session.increment_frame();
            }

            assert_eq!(session.board().empty_cells().count(), Board::CELLS);
            assert_eq!(session.turn(), Mark::X);
            assert!(drain(&mut session).is_empty());
        }

        #[test]
        fn toggling_the_mode_also_cancels_the_reply() {
            let mut session = automated_session();
            session.activate_cell(4).unwrap();
            session.toggle_mode();
            assert!(session.mode().is_human_vs_human());

            for _ in 0..reply_frames(FPS) * 2 {
                session.increment_frame();
            }
            assert_eq!(session.board().empty_cells().count(), Board::CELLS);
        }

        #[test]
        fn ticks_without_a_pending_reply_change_nothing() {
            let mut session = automated_session();
            drain(&mut session);
            for _ in 0..100 {
                session.increment_frame();
            }
            assert_eq!(session.board().empty_cells().count(), Board::CELLS);
            assert!(drain(&mut session).is_empty());
        }

        #[test]
        fn reply_frames_is_never_zero() {
            assert_eq!(reply_frames(60), 30);
            assert_eq!(reply_frames(1), 1);
        }
    }

    mod resets {
        use super::*;

        #[test]
        fn reset_board_keeps_the_tally() {
            let mut session = human_session();
            for index in [0, 4, 1, 7, 2] {
                session.activate_cell(index).unwrap();
            }
            session.reset_board();
            assert_eq!(session.scores().x_wins(), 1);
            assert_eq!(session.turn(), Mark::X);
            assert!(session.status().is_in_progress());
            assert_eq!(session.board().empty_cells().count(), Board::CELLS);
        }

        #[test]
        fn reset_board_announces_the_fresh_turn() {
            let mut session = human_session();
            session.activate_cell(0).unwrap();
            drain(&mut session);
            session.reset_board();
            assert_eq!(
                drain(&mut session),
                [GameEvent::TurnChanged { turn: Mark::X }]
            );
        }

        #[test]
        fn reset_all_zeroes_the_tally_and_reports_it() {
            let mut session = human_session();
            for index in [0, 4, 1, 7, 2] {
                session.activate_cell(index).unwrap();
            }
            drain(&mut session);
            session.reset_all();
            assert_eq!(*session.scores(), ScoreBoard::new());
            let events = drain(&mut session);
            assert_eq!(
                events,
                [
                    GameEvent::TurnChanged { turn: Mark::X },
                    GameEvent::ScoreChanged {
                        tally: ScoreBoard::new()
                    },
                ]
            );
        }

        #[test]
        fn set_mode_starts_a_fresh_game() {
            let mut session = human_session();
            session.activate_cell(0).unwrap();
            session.set_mode(GameMode::HumanVsAutomated);
            assert!(session.mode().is_human_vs_automated());
            assert_eq!(session.board().empty_cells().count(), Board::CELLS);
        }
    }
}
