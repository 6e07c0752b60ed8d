//! Alert dialog component

use super::base::{render_dialog, DialogConfig};
use crate::ui::theme::Palette;
use ratatui::{style::Modifier, text::Span, Frame};

/// Render a blocking alert centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, message: &str, palette: &Palette) {
    let key_style = palette.accent().add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Alert",
            message,
            hint: Some(hint),
            max_width: 60,
            palette,
        },
    );
}
