use crossterm::event::{Event, KeyCode};
use oxitac_ai::HeuristicSelector;
use oxitac_engine::{Board, GameEvent, GameMode, GameSession, GameStatus};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph},
};

use crate::view::widgets::{BoardDisplay, ScoreDisplay, style};

/// The in-game screen: board, scoreboard, status line, and the
/// end-of-round overlay.
#[derive(Debug)]
pub struct GameScreen {
    session: GameSession<'static>,
    cursor: usize,
    status_line: String,
    end_message: Option<String>,
    is_exiting: bool,
}

impl GameScreen {
    pub fn new(fps: u64, mode: GameMode, selector: HeuristicSelector) -> Self {
        let mut this = Self {
            session: GameSession::new(fps, mode, Box::new(selector)),
            cursor: 4,
            status_line: String::new(),
            end_message: None,
            is_exiting: false,
        };
        this.drain_session_events();
        this
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left => self.move_cursor(0, -1),
                KeyCode::Right => self.move_cursor(0, 1),
                KeyCode::Up => self.move_cursor(-1, 0),
                KeyCode::Down => self.move_cursor(1, 0),
                // Disallowed activations (occupied cell, finished game, the
                // machine's turn) are silently ignored, same as the engine
                // treats them: rejected without any state change.
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let _ = self.session.activate_cell(self.cursor);
                }
                KeyCode::Char('r') => self.session.reset_board(),
                KeyCode::Char('f') => self.session.reset_all(),
                KeyCode::Char('m') => self.session.toggle_mode(),
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            }
        }
        self.drain_session_events();
    }

    pub fn update(&mut self) {
        self.session.increment_frame();
        self.drain_session_events();
    }

    fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let (row, col) = Board::position(self.cursor);
        let side = i32::try_from(Board::SIDE).unwrap_or(i32::MAX);
        let row = i32::try_from(row).unwrap_or(0) + d_row;
        let col = i32::try_from(col).unwrap_or(0) + d_col;
        if (0..side).contains(&row) && (0..side).contains(&col) {
            self.cursor = usize::try_from(row * side + col).unwrap_or(self.cursor);
        }
    }

    fn drain_session_events(&mut self) {
        while let Some(event) = self.session.pop_event() {
            match event {
                GameEvent::TurnChanged { turn } => {
                    self.status_line = format!("Player {turn}'s turn");
                    self.end_message = None;
                }
                GameEvent::GameEnded { result, .. } => {
                    self.status_line = result.to_string();
                    self.end_message = Some(result.to_string());
                }
                // The board and the tally are drawn straight from the
                // session state each frame.
                GameEvent::CellOccupied { .. } | GameEvent::ScoreChanged { .. } => {}
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let win_line = match self.session.status() {
            GameStatus::Won { line, .. } => Some(*line),
            GameStatus::InProgress | GameStatus::Draw => None,
        };

        let mut board = BoardDisplay::new(self.session.board())
            .win_line(win_line)
            .block(Block::bordered().title("TIC-TAC-TOE"));
        if self.session.status().is_in_progress() {
            board = board.cursor(self.cursor);
        }
        let scores = ScoreDisplay::new(self.session.scores(), self.session.mode())
            .block(Block::bordered().title("Score"));

        let main_height = board.height().max(scores.height());
        let [main_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(main_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas::<3>(frame.area());
        let [board_area, score_area] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(scores.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas::<2>(main_area);

        frame.render_widget(board, board_area);
        frame.render_widget(scores, score_area);

        let status = if self.session.is_reply_pending() {
            "Computer is thinking..."
        } else {
            self.status_line.as_str()
        };
        frame.render_widget(
            Line::styled(status, style::DEFAULT).centered(),
            status_area,
        );

        let help_text = if self.session.status().is_in_progress() {
            "Controls: ← ↑ ↓ → (Move) | Enter (Place) | M (Mode) | R (Restart) | F (Reset Scores) | Q (Quit)"
        } else {
            "Controls: R (Play Again) | F (Reset Scores) | M (Mode) | Q (Quit)"
        };
        frame.render_widget(Line::styled(help_text, style::HELP).centered(), help_area);

        if let Some(message) = &self.end_message {
            self.draw_end_overlay(frame, board_area, message);
        }
    }

    fn draw_end_overlay(&self, frame: &mut Frame<'_>, board_area: Rect, message: &str) {
        let text = Text::from_iter([
            Line::styled(message, style::TITLE).centered(),
            Line::raw(""),
            Line::styled("R (Play Again)", style::HELP).centered(),
        ]);

        let height = u16::try_from(text.lines.len()).unwrap_or(u16::MAX) + 2;
        let width = u16::try_from(message.len()).unwrap_or(u16::MAX).max(16) + 4;
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas::<1>(board_area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas::<1>(area);

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(text).block(Block::bordered()), area);
    }
}
