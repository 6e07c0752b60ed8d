//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod page;
mod theme;
mod widgets;

use crate::app::App;
use components::render_alert_dialog;
use ratatui::Frame;
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.session.is_dark());
    let (page_area, status_area) = layout::create_layout(frame.area());

    page::draw(frame, page_area, app, &palette);

    // The navbar is fixed and covers the first rows of the page
    layout::draw_navbar(frame, page_area, app, &palette);
    layout::draw_menu(frame, page_area, app, &palette);

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.alert() {
        render_alert_dialog(frame, message, &palette);
    }
}
