//! Contact form rows
//!
//! Each field takes `FIELD_ROWS` page rows (label, value, error element) and
//! the submit button one more, matching `site::FORM_ROWS`.

use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ContactForm, FormField};
use crate::ui::theme::Palette;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

/// Label, value and error rows of one field
pub fn field_lines(field: &FormField, is_active: bool, palette: &Palette) -> [Line<'static>; 3] {
    let border_style = if field.aria_invalid() {
        palette.error()
    } else if is_active {
        palette.accent()
    } else {
        palette.muted()
    };

    let label_style = if is_active {
        palette.accent().add_modifier(Modifier::BOLD)
    } else {
        palette.base()
    };
    let marker = if field.is_valid() { " ✓" } else { "" };
    let label = Line::from(vec![
        Span::styled(field.kind.label().to_string(), label_style),
        Span::styled(marker, palette.success()),
    ]);

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };
    let value_style = if display_str == "(empty)" {
        palette.muted()
    } else {
        palette.base()
    };
    let cursor = if is_active { "▌" } else { "" };
    let value = Line::from(vec![
        Span::styled("│ ", border_style),
        Span::styled(display_str, value_style),
        Span::styled(cursor, palette.accent()),
    ]);

    let error = Line::from(Span::styled(
        field.error_text().to_string(),
        palette.error(),
    ));

    [label, value, error]
}

/// The submit button row; dimmed while `aria-disabled`
pub fn submit_line(form: &ContactForm, is_focused: bool, palette: &Palette) -> Line<'static> {
    let is_active = is_focused && form.is_submit_button_active();
    let label = if form.submitting {
        "[ Sending... ]"
    } else {
        "[ Send message ]"
    };

    let style = if form.aria_disabled() {
        palette.muted()
    } else if is_active {
        palette
            .accent()
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        palette.accent().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(label, style)];
    if is_focused {
        spans.push(Span::styled(
            format!("  {SUBMIT_SHORTCUT} to send"),
            palette.muted(),
        ));
    }
    Line::from(spans)
}
