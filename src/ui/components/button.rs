//! Navbar button component

use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border); the navbar height
pub const BUTTON_HEIGHT: u16 = crate::site::HEADER_HEIGHT;

/// Render a bordered navbar button. `is_pressed` highlights a toggle that is on,
/// a disabled button is drawn without a label.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: Option<&str>,
    is_pressed: bool,
    palette: &Palette,
) {
    let (border, text) = match (label, is_pressed) {
        (Some(_), true) => (
            palette.accent(),
            palette.accent().add_modifier(Modifier::BOLD),
        ),
        (Some(_), false) => (palette.muted(), palette.base()),
        (None, _) => (palette.muted(), palette.muted()),
    };

    let button = Paragraph::new(label.unwrap_or_default())
        .alignment(Alignment::Center)
        .style(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .style(palette.base()),
        );

    frame.render_widget(button, area);
}
