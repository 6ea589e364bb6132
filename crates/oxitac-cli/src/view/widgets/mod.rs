use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{board_display::*, score_display::*};

mod board_display;
mod score_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::view::widgets::color;

    const fn fg_only(color: Color) -> Style {
        Style::new().fg(color)
    }

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_only(color::WHITE);
    pub const TITLE: Style = fg_only(color::YELLOW);
    pub const HELP: Style = fg_only(color::GRAY);

    pub const EMPTY_CELL: Style = fg_only(color::GRAY);
    pub const X_MARK: Style = fg_only(color::CYAN);
    pub const O_MARK: Style = fg_only(color::ORANGE);
    pub const WIN_CELL: Style = fg_bg(color::BLACK, color::GREEN);
    pub const CURSOR_CELL: Style = fg_bg(color::BLACK, color::WHITE);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
