//! Page body rendering
//!
//! The page is one tall list of lines scrolled by the session offset. Row
//! counts must agree with `site::PageLayout`; every section body is padded or
//! cut to `site::body_rows`.

use super::forms::{field_lines, submit_line};
use super::theme::Palette;
use crate::app::App;
use crate::site::{body_rows, Image, Page, Section, SectionKind, Skill, Testimonial, HEADER_HEIGHT};
use crate::state::{Carousel, LazyImages, ProgressBars};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of a progress bar track in cells
const BAR_WIDTH: usize = 20;

/// Left margin of section bodies
const INDENT: &str = "  ";

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(page) = app.page() else {
        return;
    };
    let lines = page_lines(page, app, palette);
    let paragraph = Paragraph::new(lines)
        .style(palette.base())
        .scroll((app.session.scroll.offset(), 0));
    frame.render_widget(paragraph, area);
}

/// Every row of the page, starting with the rows under the navbar
pub fn page_lines(page: &Page, app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(); HEADER_HEIGHT as usize];

    for section in &page.sections {
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            palette.heading(),
        )));
        lines.push(Line::default());

        let body_top = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let mut body = section_body(section, body_top, app, palette);
        body.resize(body_rows(&section.kind) as usize, Line::default());
        lines.extend(body);

        lines.push(Line::default());
    }

    lines
}

fn section_body(section: &Section, body_top: u16, app: &App, palette: &Palette) -> Vec<Line<'static>> {
    match &section.kind {
        SectionKind::Text { paragraphs } => paragraphs
            .iter()
            .map(|p| Line::from(format!("{INDENT}{p}")))
            .collect(),
        SectionKind::Skills { bars } => {
            skill_lines(bars, body_top, app.session.progress.as_ref(), palette)
        }
        SectionKind::Testimonials { items, .. } => {
            carousel_lines(items, app.session.carousel.as_ref(), palette)
        }
        SectionKind::Gallery { images } => {
            gallery_lines(images, body_top, app.session.images.as_ref(), palette)
        }
        SectionKind::Contact { form: Some(_) } => contact_lines(app, palette),
        SectionKind::Contact { form: None } => vec![Line::from(Span::styled(
            format!("{INDENT}The contact form is not available on this page."),
            palette.muted(),
        ))],
    }
}

fn skill_lines(
    bars: &[Skill],
    body_top: u16,
    progress: Option<&ProgressBars>,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);

    bars.iter()
        .enumerate()
        .map(|(idx, skill)| {
            let row = body_top.saturating_add(idx as u16);
            let bar = progress.and_then(|p| p.bar_at(row));
            let width = bar.map_or(skill.progress, |b| b.width);
            let percent_style = match bar {
                Some(bar) if !bar.is_revealed() => palette.muted(),
                _ => palette.base(),
            };
            let filled = usize::from(width.min(100)) * BAR_WIDTH / 100;
            Line::from(vec![
                Span::raw(format!("{INDENT}{:<label_width$}  ", skill.label)),
                Span::styled("█".repeat(filled), palette.accent()),
                Span::styled("░".repeat(BAR_WIDTH - filled), palette.muted()),
                Span::styled(format!(" {width:>3}%"), percent_style),
            ])
        })
        .collect()
}

fn carousel_lines(
    items: &[Testimonial],
    carousel: Option<&Carousel>,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let index = carousel.map_or(0, Carousel::index);
    let Some(item) = items.get(index) else {
        return Vec::new();
    };

    let byline = match &item.role {
        Some(role) => format!("{INDENT}- {}, {role}", item.author),
        None => format!("{INDENT}- {}", item.author),
    };

    let indicator = match carousel {
        Some(carousel) => {
            let mut spans = vec![Span::raw(INDENT)];
            for idx in 0..carousel.len() {
                if carousel.is_active(idx) {
                    spans.push(Span::styled("● ", palette.accent()));
                } else {
                    spans.push(Span::styled("○ ", palette.muted()));
                }
            }
            spans.push(Span::styled("  [ ‹ prev ]  [ next › ]", palette.muted()));
            Line::from(spans)
        }
        None => Line::default(),
    };

    vec![
        Line::from(Span::styled(
            format!("{INDENT}\u{201c}{}\u{201d}", item.quote),
            palette.base().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(byline, palette.muted())),
        Line::default(),
        indicator,
    ]
}

fn gallery_lines(
    images: &[Image],
    body_top: u16,
    lazy: Option<&LazyImages>,
    palette: &Palette,
) -> Vec<Line<'static>> {
    images
        .iter()
        .enumerate()
        .map(|(idx, image)| {
            let row = body_top.saturating_add(idx as u16);
            let src = match lazy.and_then(|l| l.image_at(row)) {
                Some(state) if state.is_loaded() => state.src.clone(),
                Some(_) => None,
                None => image.src.clone(),
            };
            match src {
                Some(src) => Line::from(vec![
                    Span::styled(format!("{INDENT}▣ "), palette.accent()),
                    Span::raw(image.alt.clone()),
                    Span::styled(format!("  {src}"), palette.muted()),
                ]),
                None => Line::from(vec![
                    Span::styled(format!("{INDENT}▢ "), palette.muted()),
                    Span::styled(image.alt.clone(), palette.muted()),
                ]),
            }
        })
        .collect()
}

fn contact_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let Some(contact) = app.contact.as_ref() else {
        return vec![Line::from(Span::styled(
            format!("{INDENT}The contact form could not be loaded."),
            palette.error(),
        ))];
    };

    let form = contact.form();
    let focused = contact.is_focused();
    let mut lines = Vec::new();
    for (idx, field) in form.fields().into_iter().enumerate() {
        let is_active = focused && form.active_field_index == idx;
        lines.extend(field_lines(field, is_active, palette));
    }
    lines.push(submit_line(form, focused, palette));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::site::PageLayout;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_line_count_matches_layout_on_every_page() {
        let mut app = App::new(SiteConfig::default()).unwrap();
        for path in ["index.html", "resume.html"] {
            app.navigate(path, "");
            let page = app.page().unwrap();
            let lines = page_lines(page, &app, &Palette::LIGHT);
            assert_eq!(lines.len(), PageLayout::compute(page).total_height as usize);
        }
    }

    #[test]
    fn test_section_titles_sit_on_layout_rows() {
        let app = App::new(SiteConfig::default()).unwrap();
        let page = app.page().unwrap();
        let lines = page_lines(page, &app, &Palette::LIGHT);
        for section in &page.sections {
            let row = app.session.layout.section_top(&section.id).unwrap() as usize;
            assert_eq!(text(&lines[row]), section.title);
        }
    }

    #[test]
    fn test_form_rows_start_at_layout_row() {
        let app = App::new(SiteConfig::default()).unwrap();
        let page = app.page().unwrap();
        let lines = page_lines(page, &app, &Palette::LIGHT);
        let row = app.session.layout.form_row.unwrap() as usize;
        assert_eq!(text(&lines[row]), "Name");
        assert_eq!(text(&lines[row + 3]), "Email");
        assert_eq!(text(&lines[row + 9]), "[ Send message ]");
    }

    #[test]
    fn test_unrevealed_bar_is_empty() {
        let skills = vec![Skill {
            label: "Rust".to_string(),
            progress: 80,
        }];
        let lines = skill_lines(&skills, 5, None, &Palette::LIGHT);
        assert!(text(&lines[0]).ends_with(" 80%"));

        let app = {
            let mut app = App::new(SiteConfig::default()).unwrap();
            app.set_terminal_size(6, 80);
            app.navigate("resume.html", "");
            app
        };
        let page = app.page().unwrap();
        let lines = page_lines(page, &app, &Palette::LIGHT);
        let row = app.session.layout.bar_rows[0] as usize;
        assert!(text(&lines[row]).ends_with("  0%"));
    }
}
