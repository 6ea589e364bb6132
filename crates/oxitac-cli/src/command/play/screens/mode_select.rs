use crossterm::event::{Event, KeyCode};
use oxitac_ai::HeuristicSelector;
use oxitac_engine::GameMode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph},
};

use crate::view::widgets::style;

/// The pre-game screen: pick who plays `O` before the first round.
#[derive(Debug)]
pub struct ModeSelectScreen {
    fps: u64,
    selector: Option<HeuristicSelector>,
    chosen: Option<GameMode>,
    is_exiting: bool,
}

impl ModeSelectScreen {
    pub fn new(fps: u64, selector: HeuristicSelector) -> Self {
        Self {
            fps,
            selector: Some(selector),
            chosen: None,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    /// Takes the chosen mode plus everything the game screen needs.
    ///
    /// Returns `Some` exactly once, after a mode has been picked.
    pub fn take_start(&mut self) -> Option<(u64, GameMode, HeuristicSelector)> {
        let mode = self.chosen.take()?;
        Some((self.fps, mode, self.selector.take().unwrap_or_default()))
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('1') | KeyCode::Char('h') => {
                    self.chosen = Some(GameMode::HumanVsHuman);
                }
                KeyCode::Char('2') | KeyCode::Char('c') => {
                    self.chosen = Some(GameMode::HumanVsAutomated);
                }
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let text = Text::from_iter([
            Line::styled("TIC-TAC-TOE", style::TITLE).centered(),
            Line::raw(""),
            Line::raw("Choose a game mode:").centered(),
            Line::raw(""),
            Line::raw("1 - Human vs Human").centered(),
            Line::raw("2 - Human vs Computer").centered(),
            Line::raw(""),
            Line::styled("Q (Quit)", style::HELP).centered(),
        ]);

        let width = 40;
        let height = u16::try_from(text.lines.len()).unwrap_or(u16::MAX) + 2;
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas::<1>(frame.area());
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas::<1>(area);

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(text).block(Block::bordered()), area);
    }
}
