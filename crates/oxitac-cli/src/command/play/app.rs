use std::time::{Duration, Instant};

use crossterm::event;
use oxitac_ai::HeuristicSelector;
use oxitac_engine::GameMode;
use ratatui::{DefaultTerminal, Frame};

use crate::command::play::screens::Screen;

const FPS: u64 = 60;
const TICK_INTERVAL: Duration = Duration::from_micros(1_000_000 / FPS);

/// The interactive play application: a fixed-tick draw/input/update loop
/// around the active [`Screen`].
///
/// Ticks matter even without input: the engine's deferred automated reply
/// counts down in frames, so the session must be ticked at the rate it was
/// created with.
#[derive(Debug)]
pub struct PlayApp {
    screen: Screen,
}

impl PlayApp {
    pub fn new(mode: Option<GameMode>, selector: HeuristicSelector) -> Self {
        let screen = match mode {
            Some(mode) => Screen::game(FPS, mode, selector),
            None => Screen::mode_select(FPS, selector),
        };
        Self { screen }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let mut last_tick = Instant::now();
        while !self.screen.should_exit() {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                self.screen.handle_event(&event::read()?);
            }
            if last_tick.elapsed() >= TICK_INTERVAL {
                self.screen.update();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        self.screen.draw(frame);
    }
}
