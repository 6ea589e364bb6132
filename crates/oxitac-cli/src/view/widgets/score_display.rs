use std::iter;

use oxitac_engine::{GameMode, ScoreBoard};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

/// The scoreboard panel: the session tally plus the active mode.
pub struct ScoreDisplay<'a> {
    scores: &'a ScoreBoard,
    mode: GameMode,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(scores: &'a ScoreBoard, mode: GameMode) -> Self {
        Self {
            scores,
            mode,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&ScoreDisplay<'_>) -> String),
    LabelValue(&'static str, &'static dyn Fn(&ScoreDisplay<'_>) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::LabelValue("X WINS:", &|display| display.scores.x_wins().to_string()),
    Row::LabelValue("O WINS:", &|display| display.scores.o_wins().to_string()),
    Row::LabelValue("DRAWS:", &|display| display.scores.draws().to_string()),
    Row::Empty,
    Row::FullLabel("MODE:"),
    Row::FullValue(&|display| display.mode.to_string()),
];

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(&self), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ])
                    .areas::<2>(area);
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(&self), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
