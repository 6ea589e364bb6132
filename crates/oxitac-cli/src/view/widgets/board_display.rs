use oxitac_engine::{Board, Mark, WinLine};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::style;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the 3x3 grid: marks, the keyboard cursor, and the winning
/// triple highlight.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    cursor: Option<usize>,
    win_line: Option<WinLine>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            win_line: None,
            block: None,
        }
    }

    pub fn cursor(self, cursor: usize) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn win_line(self, win_line: Option<WinLine>) -> Self {
        Self { win_line, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        CELL_WIDTH * u16::try_from(Board::SIDE).unwrap_or(u16::MAX)
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        CELL_HEIGHT * u16::try_from(Board::SIDE).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }

    fn cell_style(&self, index: usize) -> Style {
        if self.win_line.is_some_and(|line| line.contains(index)) {
            return style::WIN_CELL;
        }
        if self.cursor == Some(index) {
            return style::CURSOR_CELL;
        }
        match self.board.cell(index) {
            Some(Mark::X) => style::X_MARK,
            Some(Mark::O) => style::O_MARK,
            None => style::EMPTY_CELL,
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let vertical = Layout::vertical([Constraint::Length(CELL_HEIGHT); Board::SIDE])
            .flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Length(CELL_WIDTH); Board::SIDE])
            .flex(Flex::Center);

        let grid_rows = vertical
            .areas::<{ Board::SIDE }>(area)
            .into_iter()
            .map(|row| horizontal.areas::<{ Board::SIDE }>(row));

        for (row, grid_row) in grid_rows.enumerate() {
            for (col, cell_area) in grid_row.into_iter().enumerate() {
                let index = row * Board::SIDE + col;
                let cell_style = self.cell_style(index);
                buf.set_style(cell_area, cell_style);

                let glyph = match self.board.cell(index) {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => ".",
                };
                let glyph_area = Rect {
                    y: cell_area.y + cell_area.height / 2,
                    height: 1,
                    ..cell_area
                };
                Line::raw(glyph).centered().render(glyph_area, buf);
            }
        }
    }
}
