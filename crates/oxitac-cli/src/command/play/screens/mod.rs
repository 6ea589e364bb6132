use crossterm::event::Event;
use oxitac_ai::HeuristicSelector;
use oxitac_engine::GameMode;
use ratatui::Frame;

use self::{game::GameScreen, mode_select::ModeSelectScreen};

mod game;
mod mode_select;

#[derive(Debug)]
pub enum Screen {
    ModeSelect(ModeSelectScreen),
    Game(GameScreen),
}

impl Screen {
    pub fn mode_select(fps: u64, selector: HeuristicSelector) -> Self {
        Screen::ModeSelect(ModeSelectScreen::new(fps, selector))
    }

    pub fn game(fps: u64, mode: GameMode, selector: HeuristicSelector) -> Self {
        Screen::Game(GameScreen::new(fps, mode, selector))
    }

    pub fn should_exit(&self) -> bool {
        match self {
            Screen::ModeSelect(screen) => screen.is_exiting(),
            Screen::Game(screen) => screen.is_exiting(),
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        match self {
            Screen::ModeSelect(screen) => screen.draw(frame),
            Screen::Game(screen) => screen.draw(frame),
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match self {
            Screen::ModeSelect(screen) => {
                screen.handle_event(event);
                if let Some((fps, mode, selector)) = screen.take_start() {
                    *self = Screen::Game(GameScreen::new(fps, mode, selector));
                }
            }
            Screen::Game(screen) => screen.handle_event(event),
        }
    }

    pub fn update(&mut self) {
        match self {
            // Nothing ticks while the mode is being chosen.
            Screen::ModeSelect(_) => {}
            Screen::Game(screen) => screen.update(),
        }
    }
}
