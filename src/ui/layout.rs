//! Layout components (navbar, menu, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use super::theme::Palette;
use super::widgets::render_scrollable_list;
use crate::app::{App, STATUS_BAR_HEIGHT};
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Width of the theme and menu buttons
const TOGGLE_WIDTH: u16 = 5;

/// Split the screen into the page area and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                     // Page
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the fixed navbar over the top rows of the page
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(navbar) = app.page().and_then(|p| p.navbar.as_ref()) else {
        return;
    };
    let navbar_area = Rect {
        height: BUTTON_HEIGHT.min(area.height),
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),               // Brand and links
            Constraint::Length(TOGGLE_WIDTH), // Theme toggle
            Constraint::Length(TOGGLE_WIDTH), // Hamburger
        ])
        .split(navbar_area);

    let mut spans = vec![Span::styled(
        format!(" {} ", navbar.brand),
        palette.heading(),
    )];
    // Desktop links when they fit, otherwise only the hamburger menu
    let links_width: usize = navbar.links.iter().map(|l| l.label.chars().count() + 3).sum();
    if (links_width + navbar.brand.chars().count() + 2) < usize::from(chunks[0].width) {
        for link in &navbar.links {
            spans.push(Span::styled(" · ", palette.muted()));
            spans.push(Span::styled(link.label.clone(), palette.base()));
        }
    }

    let brand = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted())
            .style(palette.base()),
    );
    frame.render_widget(brand, chunks[0]);

    let session = &app.session;
    let theme_icon = session.theme.map(|theme| theme.icon());
    render_button(frame, chunks[1], theme_icon, false, palette);

    let menu_open = session.menu.as_ref().is_some_and(|m| m.is_expanded());
    let menu_icon = session.menu.as_ref().map(|_| "☰");
    render_button(frame, chunks[2], menu_icon, menu_open, palette);
}

/// Draw the navigation dropdown while the menu is expanded
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(menu) = app.session.menu.as_ref().filter(|m| m.is_expanded()) else {
        return;
    };

    let width = menu
        .links()
        .iter()
        .map(|l| l.label.chars().count() as u16 + 6)
        .max()
        .unwrap_or(10)
        .min(area.width);
    let height = (menu.links().len() as u16 + 2).min(area.height.saturating_sub(BUTTON_HEIGHT));
    let dropdown = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y + BUTTON_HEIGHT,
        width,
        height,
    };

    let items: Vec<ListItem> = menu
        .links()
        .iter()
        .map(|link| ListItem::new(format!(" {} ", link.label)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.accent())
                .style(palette.base()),
        )
        .highlight_style(palette.accent().add_modifier(Modifier::REVERSED));

    frame.render_widget(ratatui::widgets::Clear, dropdown);
    render_scrollable_list(frame, dropdown, list, menu.selected);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_mode_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Page path on the right
    let path = format!(" {} ", app.session.path);
    let path_width = path.chars().count() as u16;
    let path_area = Rect {
        x: area.x + area.width.saturating_sub(path_width),
        width: path_width.min(area.width),
        ..area
    };
    let path_widget =
        Paragraph::new(path).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(path_widget, path_area);
}

/// Get keyboard hints for the current input mode
fn get_mode_hints(app: &App) -> String {
    if app.alert().is_some() {
        "Enter/Esc:dismiss".to_string()
    } else if app.in_form() {
        format!("Tab:next  S-Tab:prev  {SUBMIT_SHORTCUT}:send  Esc:leave form")
    } else if app.session.menu.as_ref().is_some_and(|m| m.is_expanded()) {
        "j/k:select  Enter:go  Esc:close".to_string()
    } else {
        "j/k:scroll  m:menu  t:theme  [/]:reviews  c:contact  q:quit".to_string()
    }
}
