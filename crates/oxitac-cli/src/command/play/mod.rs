use oxitac_ai::{HeuristicSelector, SelectorSeed};
use oxitac_engine::GameMode;

use crate::command::play::app::PlayApp;

mod app;
mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Start directly in the given mode, skipping the mode-select screen
    #[clap(long, value_enum)]
    mode: Option<ModeArg>,
    /// Seed for the automated opponent's tie-breaks (32 hex characters)
    #[clap(long)]
    seed: Option<SelectorSeed>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    /// Two humans sharing the keyboard
    Human,
    /// Play against the heuristic opponent
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Human => GameMode::HumanVsHuman,
            ModeArg::Computer => GameMode::HumanVsAutomated,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { mode, seed } = arg;

    let selector = match seed {
        Some(seed) => HeuristicSelector::with_seed(*seed),
        None => HeuristicSelector::new(),
    };
    let mut app = PlayApp::new(mode.map(GameMode::from), selector);

    ratatui::run(|terminal| app.run(terminal))
}
